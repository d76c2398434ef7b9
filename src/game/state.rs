//! Game state types.

use crate::card::Card;
use crate::hand::HandValue;
use crate::result::RoundResult;
use crate::strategy::Move;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for a round to start (tables without betting).
    Setup,
    /// Waiting for the opening bet (tables with betting).
    Betting,
    /// The human seat is acting.
    PlayerTurn,
    /// Bot seats are acting, one step at a time.
    BotTurn,
    /// The dealer reveals and draws, one step at a time.
    DealerTurn,
    /// The round is settled.
    GameOver,
}

impl GameState {
    /// Returns whether a new round may start from this state.
    #[must_use]
    pub const fn accepts_new_round(self) -> bool {
        matches!(self, Self::Setup | Self::Betting | Self::GameOver)
    }

    /// Returns whether a round is being played.
    #[must_use]
    pub const fn in_round(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::BotTurn | Self::DealerTurn)
    }
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnPosition {
    /// Index into the table's seats.
    pub seat_index: usize,
    /// Index into the seat's hands.
    pub hand_index: usize,
}

/// One automatic transition of the round, as returned by [`Game::step`].
///
/// A presentation layer may pause between events; the engine itself never
/// waits.
///
/// [`Game::step`]: super::Game::step
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// A bot drew a card. The value shows whether it busted.
    BotHit {
        /// The bot's seat.
        seat: usize,
        /// The card drawn.
        card: Card,
        /// The hand's value after the draw.
        value: HandValue,
    },
    /// A bot stopped drawing.
    BotStand {
        /// The bot's seat.
        seat: usize,
        /// The strategy move that ended the turn.
        decision: Move,
        /// The hand's final value.
        value: HandValue,
    },
    /// The dealer turned over the hole card.
    HoleRevealed {
        /// The dealer's full value.
        value: HandValue,
    },
    /// The dealer drew a card.
    DealerHit {
        /// The card drawn.
        card: Card,
        /// The dealer's value after the draw.
        value: HandValue,
    },
    /// The dealer stood and every seat was settled.
    RoundSettled(RoundResult),
}
