use crate::deck::Deck;
use crate::error::{BetError, DealError};

use super::{Game, GameState, HUMAN_SEAT, TurnPosition};

impl Game {
    /// Places the opening bet and deals a new round.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is disabled, a round is in progress, the
    /// bet is zero, or the balance cannot cover it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.options.betting {
            return Err(BetError::BettingDisabled);
        }
        if !self.state.accepts_new_round() {
            return Err(BetError::InvalidState);
        }

        self.bankroll.stake(amount)?;
        self.deal(amount);

        Ok(())
    }

    /// Places the same opening bet as last round and deals.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed since the last full reset,
    /// or for any reason [`Game::place_bet`] would reject it.
    pub fn repeat_bet(&mut self) -> Result<(), BetError> {
        match self.bankroll.last_bet() {
            0 => Err(BetError::NoPreviousBet),
            amount => self.place_bet(amount),
        }
    }

    /// Deals a new round at a table without betting.
    ///
    /// # Errors
    ///
    /// Returns an error if the table plays for stakes (use
    /// [`Game::place_bet`]) or a round is in progress.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.options.betting {
            return Err(DealError::BetRequired);
        }
        if !self.state.accepts_new_round() {
            return Err(DealError::InvalidState);
        }

        self.deal(0);

        Ok(())
    }

    /// Shuffles a fresh deck and deals two cards to every seat and the
    /// dealer, one at a time, seats first.
    fn deal(&mut self, bet: usize) {
        self.deck = self
            .stacked
            .take()
            .unwrap_or_else(|| Deck::shuffled(&mut self.rng));
        self.last_result = None;
        self.dealer.clear();

        for seat in &mut self.seats {
            seat.reset(if seat.is_human() { bet } else { 0 });
        }

        for _ in 0..2 {
            for index in 0..self.seats.len() {
                let card = self.draw();
                self.seats[index].receive(card);
            }
            let card = self.draw();
            self.dealer.add_card(card);
        }

        self.turn = TurnPosition {
            seat_index: HUMAN_SEAT,
            hand_index: 0,
        };

        tracing::info!(
            seats = self.seats.len(),
            bet,
            remaining = self.deck.len(),
            "round dealt"
        );

        // A natural stands on its own.
        if self.seats[HUMAN_SEAT].has_active_hand() {
            self.state = GameState::PlayerTurn;
        } else {
            tracing::debug!("human seat dealt a natural, skipping player turn");
            self.enter_bot_turn();
        }
    }
}
