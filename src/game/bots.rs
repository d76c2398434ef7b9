use crate::hand::HandStatus;
use crate::strategy::{Move, recommend};

use super::{Game, GameState, TableEvent, TurnPosition};

impl Game {
    /// Finds the first active bot hand strictly after `after`, in seat order.
    fn next_bot_hand(&self, after: Option<TurnPosition>) -> Option<TurnPosition> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| !seat.is_human())
            .flat_map(|(seat_index, seat)| {
                seat.hands()
                    .iter()
                    .enumerate()
                    .filter(|(_, hand)| hand.is_active())
                    .map(move |(hand_index, _)| TurnPosition {
                        seat_index,
                        hand_index,
                    })
            })
            .find(|position| {
                after.is_none_or(|after| {
                    (position.seat_index, position.hand_index)
                        > (after.seat_index, after.hand_index)
                })
            })
    }

    /// Hands the turn to the first bot with an active hand, or to the dealer.
    pub(super) fn enter_bot_turn(&mut self) {
        self.move_to_bot(self.next_bot_hand(None));
    }

    fn move_to_bot(&mut self, next: Option<TurnPosition>) {
        if let Some(position) = next {
            self.turn = position;
            self.state = GameState::BotTurn;
        } else {
            self.state = GameState::DealerTurn;
        }
    }

    /// Plays one strategy decision for the acting bot.
    ///
    /// Hits and doubles draw one card; any other move stands. A bust or a
    /// stand passes the turn to the next bot.
    pub(super) fn bot_step(&mut self) -> TableEvent {
        let turn = self.turn;
        let threshold = self.options.reshuffle_threshold;
        let up_card = self.dealer.up_card().copied();

        let Some(hand) = self
            .seats
            .get_mut(turn.seat_index)
            .and_then(|seat| seat.hand_mut(turn.hand_index))
            .filter(|hand| hand.is_active())
        else {
            self.state = GameState::DealerTurn;
            return self.dealer_step();
        };

        let decision = up_card.map_or(Move::Stand, |up_card| recommend(hand.cards(), &up_card));

        let event = if decision.draws() {
            let card = self.deck.draw_replenishing(threshold, &mut self.rng);
            hand.add_card(card);
            let value = hand.value();
            tracing::debug!(seat = turn.seat_index, %card, best = value.best_score(), "bot hits");
            TableEvent::BotHit {
                seat: turn.seat_index,
                card,
                value,
            }
        } else {
            hand.set_status(HandStatus::Stand);
            let value = hand.value();
            tracing::debug!(seat = turn.seat_index, %decision, best = value.best_score(), "bot stands");
            TableEvent::BotStand {
                seat: turn.seat_index,
                decision,
                value,
            }
        };

        if !hand.is_active() {
            let next = self.next_bot_hand(Some(turn));
            self.move_to_bot(next);
        }

        event
    }
}
