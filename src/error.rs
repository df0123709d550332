//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// More cards were requested than remain in the deck.
    #[error("requested {requested} card(s) but only {remaining} remain")]
    OutOfCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during hit and stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game is already over.
    #[error("game is already over")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    OutOfCards,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::OutOfCards { .. } => Self::OutOfCards,
        }
    }
}

/// Errors that can occur when asking for the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    /// The game is still in progress.
    #[error("game is not resolved yet")]
    NotResolved,
    /// The deck ran out before the dealer finished.
    #[error("game was aborted: the deck ran out")]
    Aborted,
}

/// Errors that can occur when parsing a player's input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The token is not a known action.
    #[error("unrecognized action: {0:?}")]
    Unrecognized(String),
}
