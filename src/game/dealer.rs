use alloc::vec::Vec;

use crate::result::{HandResult, RoundResult, SeatResult};
use crate::settlement::{PayoutRules, settle};

use super::{Game, GameState, TableEvent};

/// The dealer draws below this score and stands on it, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Plays one dealer transition: reveal the hole card, draw one card, or
    /// stand and settle the round.
    pub(super) fn dealer_step(&mut self) -> TableEvent {
        if !self.dealer.is_hole_revealed() {
            self.dealer.reveal_hole();
            let value = self.dealer.value();
            tracing::debug!(best = value.best_score(), "dealer reveals hole card");
            return TableEvent::HoleRevealed { value };
        }

        if self.dealer.best_score() < DEALER_STANDS_ON {
            let card = self.draw();
            self.dealer.add_card(card);
            let value = self.dealer.value();
            tracing::debug!(%card, best = value.best_score(), "dealer hits");
            return TableEvent::DealerHit { card, value };
        }

        let result = self.settle_round();
        self.state = GameState::GameOver;
        self.last_result = Some(result.clone());
        TableEvent::RoundSettled(result)
    }

    /// Settles every hand against the dealer and credits the human's payout.
    fn settle_round(&mut self) -> RoundResult {
        let dealer_value = self.dealer.best_score();
        let rules = PayoutRules::from(&self.options);

        let seats: Vec<SeatResult> = self
            .seats
            .iter()
            .enumerate()
            .map(|(index, seat)| {
                let hands: Vec<HandResult> = seat
                    .hands()
                    .iter()
                    .enumerate()
                    .map(|(hand_index, hand)| {
                        let seat_value = hand.best_score();
                        let settlement = settle(
                            dealer_value,
                            seat_value,
                            hand.len(),
                            hand.bet(),
                            hand.is_doubled(),
                            &rules,
                        );
                        HandResult {
                            hand_index,
                            outcome: settlement.outcome,
                            natural: settlement.natural,
                            bet: hand.bet(),
                            payout: settlement.payout,
                            seat_value,
                            dealer_value,
                        }
                    })
                    .collect();
                let total_payout: usize = hands.iter().map(|hand| hand.payout).sum();

                SeatResult {
                    seat: index,
                    human: seat.is_human(),
                    hands,
                    total_payout,
                }
            })
            .collect();

        let balance = if self.options.betting {
            let payout: usize = seats
                .iter()
                .filter(|seat| seat.human)
                .map(|seat| seat.total_payout)
                .sum();
            self.bankroll.settle(payout);
            Some(self.bankroll.balance())
        } else {
            None
        };

        tracing::info!(
            dealer = dealer_value,
            balance = ?balance,
            "round settled"
        );

        RoundResult {
            seats,
            dealer_value,
            dealer_bust: self.dealer.is_bust(),
            balance,
        }
    }
}
