use alloc::string::String;

use crate::advice::{AdviceProvider, AdviceRequest, advise_or_fallback};
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::strategy::{Move, recommend};

use super::{Game, GameState, HUMAN_SEAT, Seat, TurnPosition};

fn hand_at(seats: &mut [Seat], turn: TurnPosition) -> Option<&mut Hand> {
    seats.get_mut(turn.seat_index)?.hand_mut(turn.hand_index)
}

impl Game {
    fn ensure_player_turn(&self) -> Result<&Hand, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let hand = self
            .seat(self.turn.seat_index)
            .and_then(|seat| seat.hand(self.turn.hand_index))
            .ok_or(ActionError::InvalidState)?;

        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        Ok(hand)
    }

    /// Moves to the human's next active hand, or on to the bots.
    fn advance_after_hand(&mut self) {
        let human = &self.seats[HUMAN_SEAT];
        let next = (self.turn.hand_index + 1..human.hands().len())
            .find(|&index| human.hand(index).is_some_and(Hand::is_active));

        match next {
            Some(hand_index) => self.turn.hand_index = hand_index,
            None => self.enter_bot_turn(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human seat's turn or the hand is no
    /// longer active.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let threshold = self.options.reshuffle_threshold;
        let hand = hand_at(&mut self.seats, self.turn).ok_or(ActionError::InvalidState)?;
        let card = self.deck.draw_replenishing(threshold, &mut self.rng);
        hand.add_card(card);

        let value = hand.value();
        let status = hand.status();
        tracing::debug!(%card, best = value.best_score(), "player hits");

        if status != HandStatus::Active {
            self.advance_after_hand();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human seat's turn or the hand is no
    /// longer active.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let hand = hand_at(&mut self.seats, self.turn).ok_or(ActionError::InvalidState)?;
        hand.set_status(HandStatus::Stand);
        tracing::debug!(best = hand.best_score(), "player stands");

        self.advance_after_hand();

        Ok(())
    }

    /// Player action: Double down (double the stake, take one card, stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human seat's turn, the hand does not
    /// hold exactly two cards, the table's double rule excludes its value, or
    /// the balance cannot cover the additional stake.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let hand = self.ensure_player_turn()?;
        if hand.len() != 2 || !self.options.double.allows(hand.best_score()) {
            return Err(ActionError::CannotDouble);
        }

        if self.options.betting {
            self.bankroll.double()?;
        }

        let threshold = self.options.reshuffle_threshold;
        let hand = hand_at(&mut self.seats, self.turn).ok_or(ActionError::InvalidState)?;
        let card = self.deck.draw_replenishing(threshold, &mut self.rng);
        hand.double_bet();
        hand.add_card(card);

        // Doubling always ends the hand.
        if hand.is_active() {
            hand.set_status(HandStatus::Stand);
        }
        tracing::debug!(%card, best = hand.best_score(), bet = hand.bet(), "player doubles");

        self.advance_after_hand();

        Ok(card)
    }

    /// Player action: Split.
    ///
    /// Splitting is recognized for pairs but not played: the call is rejected
    /// and the hand, stake and deck are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] when the hand is not a pair and
    /// [`ActionError::SplitUnsupported`] when it is, or an error if it is not
    /// the human seat's turn.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let hand = self.ensure_player_turn()?;
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }

        tracing::debug!("split requested on a pair, not supported");
        Err(ActionError::SplitUnsupported)
    }

    /// Returns whether [`Game::double_down`] would be accepted.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.ensure_player_turn().is_ok_and(|hand| {
            hand.len() == 2
                && self.options.double.allows(hand.best_score())
                && (!self.options.betting || self.bankroll.balance() >= self.bankroll.current_bet())
        })
    }

    /// Returns whether the human hand is a pair that could be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.ensure_player_turn().is_ok_and(Hand::can_split)
    }

    /// Returns the basic-strategy move for the human hand against the
    /// dealer's up-card, while the human is acting.
    #[must_use]
    pub fn recommendation(&self) -> Option<Move> {
        let hand = self.ensure_player_turn().ok()?;
        let up_card = self.dealer.up_card()?;
        Some(recommend(hand.cards(), up_card))
    }

    /// Builds the advice request for the human hand, while the human is
    /// acting.
    #[must_use]
    pub fn advice_request(&self) -> Option<AdviceRequest> {
        let hand = self.ensure_player_turn().ok()?;
        let up_card = self.dealer.up_card()?;
        Some(AdviceRequest::new(hand.cards(), up_card))
    }

    /// Asks `provider` for advice on the human hand.
    ///
    /// A failing provider yields the fallback text; the round is never
    /// affected. Returns `None` outside the human's turn.
    pub fn request_advice<P: AdviceProvider + ?Sized>(&self, provider: &P) -> Option<String> {
        let request = self.advice_request()?;
        Some(advise_or_fallback(provider, &request))
    }
}
