//! Error types for table operations.
//!
//! Every rejected operation leaves the table exactly as it was; the error's
//! display text is suitable for showing to the player.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("bets can only be placed between rounds")]
    InvalidState,
    /// The table is not playing for stakes.
    #[error("betting is disabled at this table")]
    BettingDisabled,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient balance for this bet")]
    InsufficientFunds,
    /// No bet has been placed this session to repeat.
    #[error("no previous bet to repeat")]
    NoPreviousBet,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// The table plays for stakes; rounds start by placing a bet.
    #[error("place a bet to start the round")]
    BetRequired,
}

/// Errors that can occur during the human seat's actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the human seat's turn.
    #[error("it is not your turn")]
    InvalidState,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The hand is not a pair.
    #[error("only a pair can be split")]
    CannotSplit,
    /// Splitting is recognized but not played at this table.
    #[error("splitting is not supported yet")]
    SplitUnsupported,
    /// Insufficient funds for this action.
    #[error("insufficient balance to double down")]
    InsufficientFunds,
}

/// Errors reported by an advice provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// The provider did not answer in time.
    #[error("advice request timed out")]
    Timeout,
    /// The provider could not be reached or failed internally.
    #[error("advice service unavailable")]
    Unavailable,
    /// The provider answered without any advice.
    #[error("advice service returned an empty answer")]
    EmptyResponse,
}
