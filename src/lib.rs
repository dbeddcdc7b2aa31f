//! A simulation engine for the card game War.
//!
//! The crate provides a [`Game`] type that plays a full two-player game of
//! War to completion, resolving each round (including nested war
//! escalations and their low-card edge cases) and reporting round and final
//! summaries through a [`GameLog`] sink.
//!
//! # Example
//!
//! ```no_run
//! use warrs::{FileLog, Game, GameError};
//!
//! fn main() -> Result<(), GameError> {
//!     let mut game = Game::new(42);
//!     let mut log = FileLog::create("game_of_war_results.txt")?;
//!
//!     let status = game.run(&mut log)?;
//!     println!("{status:?}");
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod logger;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, GameError, LogError};
pub use game::{Game, GameRound, GameState, Player, VictoryStatus};
pub use logger::{FileLog, GameLog};
