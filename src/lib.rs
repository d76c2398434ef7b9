//! A blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a full round: betting, the
//! human seat's decisions, basic-strategy bots, dealer play and settlement.
//! Hand evaluation ([`hand::evaluate`]), the strategy tables
//! ([`strategy::recommend`]) and settlement ([`settlement::settle`]) are pure
//! functions usable on their own.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default().with_seats(2), 42);
//! game.place_bet(10).unwrap();
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! game.play_out();
//! assert_eq!(game.state(), GameState::GameOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advice;
pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod settlement;
pub mod strategy;
pub mod view;

// Re-export main types
pub use advice::{AdviceProvider, AdviceRequest, AdviceResponse, FALLBACK_ADVICE};
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, MIN_BUFFER};
pub use error::{ActionError, AdviceError, BetError, DealError};
pub use game::{Game, GameState, HUMAN_SEAT, Seat, TableEvent, TurnPosition};
pub use hand::{DealerHand, Hand, HandStatus, HandValue};
pub use options::{DoubleOption, GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult, SeatResult};
pub use strategy::Move;
pub use view::{DealerView, HandView, SeatView};
