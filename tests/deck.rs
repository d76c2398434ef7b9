//! Deck generation, shuffle and replenishment tests.

use blackjack_table::deck::{create_deck, shuffle};
use blackjack_table::{Card, DECK_SIZE, Deck, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn canonical_deck_order() {
    let cards = create_deck();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards[0], Card::new(Suit::Spades, 2));
    assert_eq!(cards[12], Card::new(Suit::Spades, 1));
    assert_eq!(cards[13], Card::new(Suit::Hearts, 2));
    assert_eq!(cards[51], Card::new(Suit::Clubs, 1));
}

#[test]
fn shuffle_leaves_input_untouched() {
    let cards = create_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shuffled = shuffle(&cards, &mut rng);
    assert_eq!(cards, create_deck());
    assert_ne!(shuffled, cards);
}

#[test]
fn same_seed_same_order() {
    let a = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(99));
    let b = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn draws_front_first() {
    let mut deck = Deck::from_cards(vec![
        Card::new(Suit::Hearts, 3),
        Card::new(Suit::Clubs, 9),
    ]);
    assert_eq!(deck.draw(), Some(Card::new(Suit::Hearts, 3)));
    assert_eq!(deck.draw(), Some(Card::new(Suit::Clubs, 9)));
    assert_eq!(deck.draw(), None);
    assert!(deck.is_empty());
}

#[test]
fn replenishes_below_threshold() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::from_cards(vec![Card::new(Suit::Hearts, 3); 5]);
    assert!(deck.needs_replenish(20));

    deck.draw_replenishing(20, &mut rng);
    assert_eq!(deck.len(), DECK_SIZE - 1);
}

#[test]
fn zero_threshold_only_replenishes_an_empty_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let only = Card::new(Suit::Diamonds, 12);
    let mut deck = Deck::from_cards(vec![only]);

    assert_eq!(deck.draw_replenishing(0, &mut rng), only);
    assert!(deck.is_empty());
    assert!(deck.needs_replenish(0));

    deck.draw_replenishing(0, &mut rng);
    assert_eq!(deck.len(), DECK_SIZE - 1);
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let canonical = create_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shuffled = shuffle(&canonical, &mut rng);

        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        for card in &canonical {
            prop_assert!(shuffled.contains(card));
        }
    }
}
