//! Hand evaluation and player/dealer hand representations.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u8 = 21;

const SOFT_BONUS: u8 = 10;

/// Hard and soft totals of a hand.
///
/// `hard` counts every ace as 1. `soft` is present only when the hand holds
/// at least one ace and is always `hard + 10`: a single ace is promoted to 11,
/// whatever the ace count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HandValue {
    /// Total with every ace counted as 1.
    pub hard: u8,
    /// Total with one ace counted as 11, if the hand holds an ace.
    pub soft: Option<u8>,
}

impl HandValue {
    /// Returns the soft total if it does not bust, otherwise the hard total.
    #[must_use]
    pub const fn best_score(self) -> u8 {
        match self.soft {
            Some(soft) if soft <= BLACKJACK => soft,
            _ => self.hard,
        }
    }

    /// Returns whether the soft total is in play (present and not busting).
    #[must_use]
    pub const fn is_soft(self) -> bool {
        matches!(self.soft, Some(soft) if soft <= BLACKJACK)
    }

    /// Returns whether the best score exceeds 21.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.best_score() > BLACKJACK
    }
}

/// Formats the totals for display: `"hard / soft"` while the soft total is
/// live, the hard total otherwise, and nothing for an empty hand.
impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hard == 0 {
            return Ok(());
        }
        match self.soft {
            Some(soft) if soft <= BLACKJACK && soft != self.hard => {
                write!(f, "{} / {}", self.hard, soft)
            }
            _ => write!(f, "{}", self.hard),
        }
    }
}

/// Evaluates the hard and soft totals of `cards`.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let hard = cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.value()));
    let soft = cards
        .iter()
        .any(Card::is_ace)
        .then_some(hard.saturating_add(SOFT_BONUS));

    HandValue { hard, soft }
}

/// Returns the best score of `cards`.
#[must_use]
pub fn best_score(cards: &[Card]) -> u8 {
    evaluate(cards).best_score()
}

/// Returns whether `cards` form a natural: two cards with a best score of 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && best_score(cards) == BLACKJACK
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandStatus {
    /// Hand is still being played.
    Active,
    /// Hand has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural 21 and stands automatically.
    Blackjack,
}

/// A seat's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    /// Stake riding on this hand (zero for bots and when betting is off).
    bet: usize,
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given stake.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            doubled: false,
        }
    }

    /// Adds a card to the hand, marking it bust or blackjack as appropriate.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();
        if value.is_bust() {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value.best_score() == BLACKJACK {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Returns the stake on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the stake and flags the hand as doubled.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the stake was doubled this round.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the best score of the hand.
    #[must_use]
    pub fn best_score(&self) -> u8 {
        self.value().best_score()
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is a pair of equal rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card; the second is the up-card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hole card (first card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-up card (second card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Evaluates the cards visible to the table.
    #[must_use]
    pub fn visible_value(&self) -> HandValue {
        if self.hole_revealed {
            self.value()
        } else {
            evaluate(self.cards.get(1..).unwrap_or_default())
        }
    }

    /// Evaluates the full hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the best score of the full hand.
    #[must_use]
    pub fn best_score(&self) -> u8 {
        self.value().best_score()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
