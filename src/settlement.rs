//! Pure settlement of a seat's hand against the dealer.
//!
//! Stakes are debited when they are placed, so a payout is what goes back to
//! the balance: twice the stake on a win, the stake plus the blackjack premium
//! on an undoubled natural, the stake alone on a push and nothing on a loss.

use crate::hand::BLACKJACK;
use crate::options::{GameOptions, RoundingMode};
use crate::result::HandOutcome;

/// Payout rules applied on a winning hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutRules {
    /// Profit multiple paid on a natural blackjack.
    pub blackjack_pays: f64,
    /// Rounding applied to the blackjack profit.
    pub rounding: RoundingMode,
}

impl Default for PayoutRules {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            rounding: RoundingMode::Down,
        }
    }
}

impl From<&GameOptions> for PayoutRules {
    fn from(options: &GameOptions) -> Self {
        Self {
            blackjack_pays: options.blackjack_pays,
            rounding: options.rounding_blackjack,
        }
    }
}

/// Outcome and payout of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Win, lose or push.
    pub outcome: HandOutcome,
    /// Whether the seat held a natural blackjack.
    pub natural: bool,
    /// Amount credited back to the balance, stake included.
    pub payout: usize,
}

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Compares a seat's best score to the dealer's.
///
/// A busted seat always loses, even when the dealer busts too.
#[must_use]
pub const fn outcome(dealer_best: u8, seat_best: u8) -> HandOutcome {
    if seat_best > BLACKJACK {
        HandOutcome::Lose
    } else if dealer_best > BLACKJACK || seat_best > dealer_best {
        HandOutcome::Win
    } else if seat_best < dealer_best {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}

/// Settles one hand.
///
/// # Example
///
/// ```
/// use blackjack_table::settlement::{settle, PayoutRules};
/// use blackjack_table::HandOutcome;
///
/// let natural = settle(17, 21, 2, 100, false, &PayoutRules::default());
/// assert_eq!(natural.outcome, HandOutcome::Win);
/// assert_eq!(natural.payout, 250);
/// ```
#[must_use]
pub fn settle(
    dealer_best: u8,
    seat_best: u8,
    seat_card_count: usize,
    bet: usize,
    is_doubled: bool,
    rules: &PayoutRules,
) -> Settlement {
    let outcome = outcome(dealer_best, seat_best);
    let natural = seat_card_count == 2 && seat_best == BLACKJACK;

    let payout = match outcome {
        HandOutcome::Win if natural && !is_doubled => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let premium = round_amount((bet as f64) * rules.blackjack_pays, rules.rounding);
            bet + premium
        }
        HandOutcome::Win => bet * 2,
        HandOutcome::Push => bet,
        HandOutcome::Lose => 0,
    };

    Settlement {
        outcome,
        natural,
        payout,
    }
}
