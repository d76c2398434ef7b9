//! Basic-strategy decision tables.
//!
//! [`recommend`] maps a hand and the dealer's up-card to a [`Move`]. The human
//! seat sees it as advice; bot seats play it.
//!
//! Every table is a fixed `[[Move; 10]; N]` array indexed by a normalized row
//! key and the dealer column, so a missing entry cannot compile.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::evaluate;

/// A basic-strategy move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the stake and take exactly one card.
    Double,
    /// Split the pair into two hands.
    Split,
    /// Forfeit the hand for half the stake.
    Surrender,
}

impl Move {
    /// Returns the move name, e.g. `"Double Down"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double Down",
            Self::Split => "Split",
            Self::Surrender => "Surrender",
        }
    }

    /// Returns the sentence shown by the strategy help action.
    #[must_use]
    pub const fn advice_text(self) -> &'static str {
        match self {
            Self::Hit => "Hit: take another card.",
            Self::Stand => "Stand: keep your hand.",
            Self::Double => "Double down: double your bet and take one card.",
            Self::Split => "Split your pair into two hands.",
            Self::Surrender => "Surrender if the table allows it.",
        }
    }

    /// Returns whether a bot draws a card on this move.
    ///
    /// Bots never raise their stake, so a double is played as a hit.
    #[must_use]
    pub const fn draws(self) -> bool {
        matches!(self, Self::Hit | Self::Double)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const H: Move = Move::Hit;
const S: Move = Move::Stand;
const D: Move = Move::Double;
const P: Move = Move::Split;
const R: Move = Move::Surrender;

/// Columns: dealer up-card 2, 3, 4, 5, 6, 7, 8, 9, 10, A.
type Row = [Move; 10];

/// Hard totals 8 through 17.
const HARD_FIRST: u8 = 8;
const HARD_LAST: u8 = 17;
const HARD_TOTALS: [Row; 10] = [
    [H, H, H, H, H, H, H, H, H, H], // 8 and below
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, H], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, R, H], // 15
    [S, S, S, S, S, H, H, R, R, R], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17 and above
];

/// Soft totals keyed by the non-ace component: A+2 through A+10.
const SOFT_FIRST: u8 = 2;
const SOFT_TOTALS: [Row; 9] = [
    [H, H, H, D, D, H, H, H, H, H], // A,2
    [H, H, H, D, D, H, H, H, H, H], // A,3
    [H, H, D, D, D, H, H, H, H, H], // A,4
    [H, H, D, D, D, H, H, H, H, H], // A,5
    [H, D, D, D, D, H, H, H, H, H], // A,6
    [S, D, D, D, D, S, S, H, H, H], // A,7
    [S, S, S, S, S, S, S, S, S, S], // A,8
    [S, S, S, S, S, S, S, S, S, S], // A,9
    [S, S, S, S, S, S, S, S, S, S], // A,10
];

/// Pairs keyed by card value, aces as 1.
const PAIR_FIRST: u8 = 1;
const PAIRS: [Row; 10] = [
    [P, P, P, P, P, P, P, P, P, P], // A,A
    [P, P, P, P, P, P, H, H, H, H], // 2,2
    [P, P, P, P, P, P, H, H, H, H], // 3,3
    [H, H, H, H, H, H, H, H, H, H], // 4,4
    [D, D, D, D, D, D, D, D, H, H], // 5,5
    [H, P, P, P, P, H, H, H, H, H], // 6,6
    [P, P, P, P, P, P, H, H, H, H], // 7,7
    [P, P, P, P, P, P, P, P, P, P], // 8,8
    [P, P, P, P, P, S, P, P, S, S], // 9,9
    [S, S, S, S, S, S, S, S, S, S], // 10,10
];

/// Maps a dealer up-card to its table column. Aces take the last column.
const fn dealer_column(up_card: &Card) -> Option<usize> {
    match up_card.value() {
        1 => Some(9),
        value @ 2..=10 => Some(value as usize - 2),
        _ => None,
    }
}

fn lookup<const N: usize>(
    table: &[Row; N],
    first: u8,
    key: u8,
    column: Option<usize>,
) -> Option<Move> {
    let row = table.get(usize::from(key.checked_sub(first)?))?;
    row.get(column?).copied()
}

/// Recommends a move for `cards` against the dealer's `up_card`.
///
/// Precedence: a two-card pair uses the pair table; otherwise a live soft
/// total whose non-ace component is 2..=10 uses the soft table; everything
/// else uses the hard table with totals clamped to 8..=17. Misses fall back to
/// stand, except the clamped low row which falls back to hit.
///
/// Multi-card soft hands go through the soft table by their non-ace
/// component, and soft hands outside that range fall through to the hard
/// table by their hard total.
#[must_use]
pub fn recommend(cards: &[Card], up_card: &Card) -> Move {
    let column = dealer_column(up_card);

    if let [first, second] = cards {
        if first.rank == second.rank {
            return lookup(&PAIRS, PAIR_FIRST, first.value(), column).unwrap_or(S);
        }
    }

    let value = evaluate(cards);
    if value.is_soft() {
        let non_ace = value.hard - 1;
        if (2..=10).contains(&non_ace) {
            return lookup(&SOFT_TOTALS, SOFT_FIRST, non_ace, column).unwrap_or(S);
        }
    }

    match value.hard {
        total if total <= HARD_FIRST => {
            lookup(&HARD_TOTALS, HARD_FIRST, HARD_FIRST, column).unwrap_or(H)
        }
        total if total >= HARD_LAST => {
            lookup(&HARD_TOTALS, HARD_FIRST, HARD_LAST, column).unwrap_or(S)
        }
        total => lookup(&HARD_TOTALS, HARD_FIRST, total, column).unwrap_or(S),
    }
}
