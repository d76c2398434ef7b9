//! Table engine and round state machine.
//!
//! A round moves through `PlayerTurn → BotTurn → DealerTurn → GameOver`.
//! The human seat acts through [`Game::hit`], [`Game::stand`],
//! [`Game::double_down`] and [`Game::split`]; bots and the dealer advance one
//! discrete transition per [`Game::step`] call.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::{GameOptions, clamp_seats};
use crate::result::RoundResult;

mod actions;
mod bet;
mod bots;
mod dealer;
mod seat;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use seat::Seat;
pub use state::{GameState, TableEvent, TurnPosition};

/// Index of the human-controlled seat.
pub const HUMAN_SEAT: usize = 0;

/// A blackjack table: one dealer, one human seat and up to three bot seats.
///
/// The game exclusively owns the deck, the hands and the bankroll. Balance and
/// the last bet persist across rounds; deck and hands are replaced when a
/// round starts.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    state: GameState,
    deck: Deck,
    /// Deck to deal the next round from instead of a fresh shuffle.
    stacked: Option<Deck>,
    seats: Vec<Seat>,
    dealer: DealerHand,
    bankroll: Bankroll,
    turn: TurnPosition,
    last_result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default().with_seats(2), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.seats().len(), 2);
    /// assert_eq!(game.options().seats, 2);
    /// assert_eq!(game.cards_remaining(), 0);
    /// ```
    #[must_use]
    pub fn new(mut options: GameOptions, seed: u64) -> Self {
        options.seats = clamp_seats(options.seats);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let seats = (0..usize::from(options.seats))
            .map(|index| Seat::new(index == HUMAN_SEAT))
            .collect();

        Self {
            state: Self::idle_state(&options),
            bankroll: Bankroll::new(options.starting_balance),
            options,
            deck: Deck::default(),
            stacked: None,
            seats,
            dealer: DealerHand::new(),
            turn: TurnPosition::default(),
            last_result: None,
            rng,
        }
    }

    const fn idle_state(options: &GameOptions) -> GameState {
        if options.betting {
            GameState::Betting
        } else {
            GameState::Setup
        }
    }

    /// Draws a card, replacing a depleted deck first.
    fn draw(&mut self) -> Card {
        self.deck
            .draw_replenishing(self.options.reshuffle_threshold, &mut self.rng)
    }

    /// Deals the next round from `deck` instead of a fresh shuffle.
    ///
    /// Cards are dealt front first. Useful for replays and tests.
    pub fn stack_deck(&mut self, deck: Deck) {
        self.stacked = Some(deck);
    }

    /// Returns the table options fixed at construction.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn current_turn(&self) -> TurnPosition {
        self.turn
    }

    /// Returns whether the human seat is acting.
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.state == GameState::PlayerTurn
    }

    /// Returns all seats in seat order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the seat at `index`.
    #[must_use]
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Returns the human seat's first hand.
    #[must_use]
    pub fn player_hand(&self) -> Option<&Hand> {
        self.seat(HUMAN_SEAT).and_then(|seat| seat.hand(0))
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the human's available balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.bankroll.balance()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Runs bot and dealer transitions until the round needs the human or
    /// is over, returning every event in order.
    pub fn play_out(&mut self) -> Vec<TableEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step() {
            events.push(event);
        }
        events
    }

    /// Performs one automatic transition.
    ///
    /// Returns `None` when nothing moves without the human (player turn,
    /// between rounds).
    pub fn step(&mut self) -> Option<TableEvent> {
        match self.state {
            GameState::BotTurn => Some(self.bot_step()),
            GameState::DealerTurn => Some(self.dealer_step()),
            _ => None,
        }
    }

    /// Returns a settled table to `Setup` or `Betting`, keeping the result.
    pub fn clear_round(&mut self) {
        if self.state == GameState::GameOver {
            self.state = Self::idle_state(&self.options);
        }
    }

    /// Abandons the session's current round.
    ///
    /// Hands and the dealer are discarded and any stake riding on an
    /// unfinished round is lost. A full reset also restores the starting
    /// balance and forgets the last bet.
    pub fn reset_session(&mut self, full_reset: bool) {
        if self.state.in_round() {
            tracing::info!(stake = self.bankroll.current_bet(), "round abandoned");
            self.bankroll.forfeit();
        }
        if full_reset {
            self.bankroll = Bankroll::new(self.options.starting_balance);
        }

        for seat in &mut self.seats {
            seat.clear();
        }
        self.dealer.clear();
        self.turn = TurnPosition::default();
        self.last_result = None;
        self.state = Self::idle_state(&self.options);
    }
}
