//! Deck lifecycle: generation, shuffling and drawing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};

/// Default minimum number of cards kept in the deck before it is replaced.
///
/// Enough for a full four-seat round including dealer draws.
pub const MIN_BUFFER: usize = 20;

/// Returns the 52 canonical cards in generation order (all ranks of
/// spades, then hearts, diamonds and clubs). No shuffling is applied.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in RANKS {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Returns a uniformly shuffled copy of `cards`. The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// The cards remaining to be drawn, front first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a freshly shuffled 52-card deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_cards(shuffle(&create_deck(), rng))
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Removes and returns the first card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Draws a card, first replacing the deck with a fresh shuffled one when
    /// fewer than `threshold` cards remain.
    ///
    /// The old remainder is discarded on replacement.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a replenished deck always holds DECK_SIZE cards"
    )]
    pub fn draw_replenishing<R: Rng + ?Sized>(&mut self, threshold: usize, rng: &mut R) -> Card {
        if self.needs_replenish(threshold) {
            tracing::debug!(remaining = self.len(), "replacing depleted deck");
            *self = Self::shuffled(rng);
        }
        self.draw()
            .expect("deck holds at least one card after replenishing")
    }

    /// Returns whether fewer than `threshold` cards remain. An empty deck
    /// always needs replenishing.
    #[must_use]
    pub fn needs_replenish(&self, threshold: usize) -> bool {
        self.cards.len() < threshold.clamp(1, DECK_SIZE)
    }

    /// Returns the remaining cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
