use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// One position at the table, holding one or more hands.
///
/// Hands are kept in a list so a split only appends a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    human: bool,
    hands: Vec<Hand>,
}

impl Seat {
    pub(super) const fn new(human: bool) -> Self {
        Self {
            human,
            hands: Vec::new(),
        }
    }

    /// Returns whether the seat is played by the human.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.human
    }

    /// Returns the seat's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    pub(super) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns whether any hand can still act.
    #[must_use]
    pub fn has_active_hand(&self) -> bool {
        self.hands.iter().any(Hand::is_active)
    }

    /// Replaces the seat's hands with one empty hand carrying `bet`.
    pub(super) fn reset(&mut self, bet: usize) {
        self.hands.clear();
        self.hands.push(Hand::new(bet));
    }

    /// Drops every hand.
    pub(super) fn clear(&mut self) {
        self.hands.clear();
    }

    /// Deals `card` to the seat's first hand.
    pub(super) fn receive(&mut self, card: Card) {
        if let Some(hand) = self.hands.first_mut() {
            hand.add_card(card);
        }
    }
}
