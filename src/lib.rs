//! A single-player blackjack rules engine.
//!
//! The crate provides a [`Game`] type that walks one round of casino
//! blackjack against the house dealer: deal, player hits or stands,
//! dealer draws to 17, showdown. The engine performs no I/O; the
//! companion binary supplies the console session loop.
//!
//! # Example
//!
//! ```
//! use blackjack::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! let state = game.start().expect("fresh round");
//! assert!(matches!(state, GameState::InProgress | GameState::PlayerBlackjack));
//!
//! // Stand straight away; a blackjack hand stands automatically.
//! game.stand().expect("player may stand");
//! game.dealer_play().expect("dealer draws to 17");
//! let outcome = game.outcome().expect("round is over");
//! let _ = outcome;
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, GameError};
pub use game::{DEALER_STANDS_AT, Game, GameState, Outcome};
pub use hand::{BLACKJACK, Hand, HandValue};
