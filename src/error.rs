//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("deck is exhausted")]
    Exhausted,
}

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not valid in the current game state.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out of cards mid-round.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
