//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandOutcome {
    /// Seat wins (dealer busts or seat has the higher score).
    Win,
    /// Seat loses (seat busts or dealer has the higher score).
    Lose,
    /// Push (tie).
    Push,
}

impl HandOutcome {
    /// Returns the lowercase outcome label, e.g. `"win"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandResult {
    /// The hand index within the seat.
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Whether the hand was a natural blackjack.
    pub natural: bool,
    /// The stake on the hand.
    pub bet: usize,
    /// Amount credited back to the balance (stake included).
    pub payout: usize,
    /// The seat's best score.
    pub seat_value: u8,
    /// The dealer's best score.
    pub dealer_value: u8,
}

/// Results for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// Whether the seat is played by the human.
    pub human: bool,
    /// Results for each hand of the seat.
    pub hands: Vec<HandResult>,
    /// Total payout across the seat's hands.
    pub total_payout: usize,
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// Results for each seat, in seat order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final best score.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The human's balance after settlement, when betting is enabled.
    pub balance: Option<usize>,
}

impl RoundResult {
    /// Returns the human seat's result.
    #[must_use]
    pub fn human(&self) -> Option<&SeatResult> {
        self.seats.iter().find(|seat| seat.human)
    }
}
