//! Settlement tests.

use blackjack_table::settlement::{PayoutRules, outcome, settle};
use blackjack_table::{HandOutcome, RoundingMode};
use proptest::prelude::*;

#[test]
fn payouts_include_the_stake() {
    let rules = PayoutRules::default();

    let win = settle(18, 20, 2, 100, false, &rules);
    assert_eq!((win.outcome, win.payout), (HandOutcome::Win, 200));

    let push = settle(19, 19, 3, 100, false, &rules);
    assert_eq!((push.outcome, push.payout), (HandOutcome::Push, 100));

    let loss = settle(20, 19, 2, 100, false, &rules);
    assert_eq!((loss.outcome, loss.payout), (HandOutcome::Lose, 0));

    let dealer_bust = settle(24, 12, 2, 100, false, &rules);
    assert_eq!(dealer_bust.payout, 200);
}

#[test]
fn naturals_pay_the_premium() {
    let rules = PayoutRules::default();

    let natural = settle(17, 21, 2, 100, false, &rules);
    assert!(natural.natural);
    assert_eq!(natural.payout, 250);

    // Three-card 21 is a plain win.
    let three_card = settle(17, 21, 3, 100, false, &rules);
    assert!(!three_card.natural);
    assert_eq!(three_card.payout, 200);

    let against_21 = settle(21, 21, 2, 100, false, &rules);
    assert_eq!((against_21.outcome, against_21.payout), (HandOutcome::Push, 100));
}

#[test]
fn blackjack_premium_rounding() {
    let down = PayoutRules::default();
    assert_eq!(settle(17, 21, 2, 15, false, &down).payout, 37);

    let up = PayoutRules {
        rounding: RoundingMode::Up,
        ..PayoutRules::default()
    };
    assert_eq!(settle(17, 21, 2, 15, false, &up).payout, 38);

    let six_to_five = PayoutRules {
        blackjack_pays: 1.2,
        ..PayoutRules::default()
    };
    assert_eq!(settle(17, 21, 2, 10, false, &six_to_five).payout, 22);
}

#[test]
fn zero_stake_pays_nothing() {
    let result = settle(17, 21, 2, 0, false, &PayoutRules::default());
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.payout, 0);
}

proptest! {
    #[test]
    fn a_busted_seat_always_loses(dealer in 2..=30u8, seat in 22..=30u8, bet in 0..1000usize) {
        let result = settle(dealer, seat, 3, bet, false, &PayoutRules::default());
        prop_assert_eq!(result.outcome, HandOutcome::Lose);
        prop_assert_eq!(result.payout, 0);
    }

    #[test]
    fn outcome_is_consistent_with_scores(dealer in 2..=30u8, seat in 2..=21u8) {
        let expected = if dealer > 21 || seat > dealer {
            HandOutcome::Win
        } else if seat < dealer {
            HandOutcome::Lose
        } else {
            HandOutcome::Push
        };
        prop_assert_eq!(outcome(dealer, seat), expected);
    }

    #[test]
    fn payout_never_exceeds_premium_win(
        dealer in 2..=30u8,
        seat in 2..=30u8,
        cards in 2..6usize,
        bet in 0..10_000usize,
    ) {
        let result = settle(dealer, seat, cards, bet, false, &PayoutRules::default());
        prop_assert!(result.payout <= bet * 5 / 2);
    }
}
