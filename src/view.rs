//! Snapshots of the table for a presentation layer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::game::{Game, GameState, Seat};
use crate::hand::{Hand, HandStatus, HandValue, evaluate};

/// One hand as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Hard and soft totals.
    pub value: HandValue,
    /// Display text for the totals, e.g. `"7 / 17"`.
    pub score: String,
    /// The hand's status.
    pub status: HandStatus,
    /// The stake on the hand.
    pub bet: usize,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        let value = hand.value();
        Self {
            cards: hand.cards().to_vec(),
            value,
            score: value.to_string(),
            status: hand.status(),
            bet: hand.bet(),
        }
    }
}

/// One seat as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    /// The seat index.
    pub seat: usize,
    /// Whether the human plays this seat.
    pub human: bool,
    /// Whether the seat is acting right now.
    pub active: bool,
    /// The seat's hands.
    pub hands: Vec<HandView>,
}

/// The dealer as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerView {
    /// Cards in deal order; the hole card is `None` while hidden.
    pub cards: Vec<Option<Card>>,
    /// Totals of the visible cards.
    pub value: HandValue,
    /// Display text for the visible totals.
    pub score: String,
    /// Whether the hole card is still face down.
    pub hole_hidden: bool,
}

impl Game {
    fn seat_is_active(&self, index: usize, seat: &Seat) -> bool {
        match self.state() {
            GameState::PlayerTurn => seat.is_human(),
            GameState::BotTurn => self.current_turn().seat_index == index,
            _ => false,
        }
    }

    /// Returns the view of the seat at `index`.
    #[must_use]
    pub fn seat_view(&self, index: usize) -> Option<SeatView> {
        let seat = self.seat(index)?;
        Some(SeatView {
            seat: index,
            human: seat.is_human(),
            active: self.seat_is_active(index, seat),
            hands: seat.hands().iter().map(HandView::from).collect(),
        })
    }

    /// Returns views of every seat in seat order.
    #[must_use]
    pub fn seat_views(&self) -> Vec<SeatView> {
        (0..self.seats().len())
            .filter_map(|index| self.seat_view(index))
            .collect()
    }

    /// Returns the view of the dealer, hiding the hole card until it is
    /// revealed.
    #[must_use]
    pub fn dealer_view(&self) -> DealerView {
        let dealer = self.dealer_hand();
        let hole_hidden = !dealer.is_empty() && !dealer.is_hole_revealed();

        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!hole_hidden || index > 0).then_some(*card))
            .collect();
        let value = if hole_hidden {
            dealer.visible_value()
        } else {
            evaluate(dealer.cards())
        };

        DealerView {
            cards,
            value,
            score: value.to_string(),
            hole_hidden,
        }
    }
}
