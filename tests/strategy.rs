//! Basic strategy tests.

use blackjack_table::strategy::recommend;
use blackjack_table::{Card, Move, Suit};
use proptest::prelude::*;

fn hand(ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .map(|&rank| Card::new(Suit::Hearts, rank))
        .collect()
}

fn up(rank: u8) -> Card {
    Card::new(Suit::Spades, rank)
}

#[test]
fn pairs_take_precedence() {
    assert_eq!(recommend(&hand(&[8, 8]), &up(10)), Move::Split);
    assert_eq!(recommend(&hand(&[1, 1]), &up(6)), Move::Split);
    assert_eq!(recommend(&hand(&[5, 5]), &up(9)), Move::Double);
    assert_eq!(recommend(&hand(&[5, 5]), &up(1)), Move::Hit);
    assert_eq!(recommend(&hand(&[9, 9]), &up(7)), Move::Stand);
    assert_eq!(recommend(&hand(&[10, 10]), &up(6)), Move::Stand);
    assert_eq!(recommend(&hand(&[13, 13]), &up(6)), Move::Stand);
}

#[test]
fn mixed_faces_are_not_a_pair() {
    assert_eq!(recommend(&hand(&[11, 12]), &up(6)), Move::Stand);
}

#[test]
fn soft_totals() {
    assert_eq!(recommend(&hand(&[1, 7]), &up(2)), Move::Stand);
    assert_eq!(recommend(&hand(&[1, 7]), &up(3)), Move::Double);
    assert_eq!(recommend(&hand(&[1, 7]), &up(9)), Move::Hit);
    assert_eq!(recommend(&hand(&[7, 1]), &up(9)), Move::Hit);
    assert_eq!(recommend(&hand(&[1, 2]), &up(5)), Move::Double);
}

#[test]
fn multi_card_soft_hands_use_the_non_ace_component() {
    // A,2,3 reads as A,5.
    assert_eq!(recommend(&hand(&[1, 2, 3]), &up(5)), Move::Double);
    // A,5,6 has no live soft total and plays as hard 12.
    assert_eq!(recommend(&hand(&[1, 5, 6]), &up(4)), Move::Stand);
}

#[test]
fn hard_totals() {
    assert_eq!(recommend(&hand(&[10, 6]), &up(7)), Move::Hit);
    assert_eq!(recommend(&hand(&[10, 6]), &up(10)), Move::Surrender);
    assert_eq!(recommend(&hand(&[10, 5]), &up(10)), Move::Surrender);
    assert_eq!(recommend(&hand(&[10, 2]), &up(4)), Move::Stand);
    assert_eq!(recommend(&hand(&[5, 6]), &up(10)), Move::Double);
    assert_eq!(recommend(&hand(&[5, 6]), &up(1)), Move::Hit);
}

#[test]
fn hard_totals_clamp_to_table_edges() {
    assert_eq!(recommend(&hand(&[2, 3]), &up(6)), Move::Hit);
    assert_eq!(recommend(&hand(&[10, 4, 5]), &up(1)), Move::Stand);
    assert_eq!(recommend(&hand(&[10, 12, 5]), &up(1)), Move::Stand);
}

#[test]
fn face_up_cards_share_the_ten_column() {
    for rank in [10, 11, 12, 13] {
        assert_eq!(recommend(&hand(&[10, 6]), &up(rank)), Move::Surrender);
    }
}

#[test]
fn advice_text_names_the_move() {
    assert_eq!(Move::Hit.to_string(), "Hit");
    assert!(Move::Double.draws());
    assert!(!Move::Surrender.draws());
}

fn arb_card() -> impl Strategy<Value = Card> {
    (0..4usize, 1..=13u8).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

proptest! {
    #[test]
    fn recommendation_is_deterministic(
        cards in prop::collection::vec(arb_card(), 2..6),
        up_card in arb_card(),
    ) {
        prop_assert_eq!(recommend(&cards, &up_card), recommend(&cards, &up_card));
    }

    #[test]
    fn suits_never_change_the_move(
        ranks in prop::collection::vec(1..=13u8, 2..5),
        up_rank in 1..=13u8,
    ) {
        let hearts: Vec<Card> = ranks.iter().map(|&rank| Card::new(Suit::Hearts, rank)).collect();
        let clubs: Vec<Card> = ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect();
        prop_assert_eq!(
            recommend(&hearts, &Card::new(Suit::Spades, up_rank)),
            recommend(&clubs, &Card::new(Suit::Diamonds, up_rank))
        );
    }
}
