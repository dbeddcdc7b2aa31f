//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors that can occur when constructing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank symbol is not one of the thirteen recognized symbols.
    #[error("invalid card rank symbol")]
    InvalidRank,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Attempted to draw a card from an empty deck.
    #[error("attempted to draw a card from an empty deck")]
    Empty,
}

/// Errors that can occur while writing game output.
#[derive(Debug, Error)]
pub enum LogError {
    /// The output file could not be opened.
    #[error("failed to open the game output file: {0}")]
    Open(#[source] io::Error),
    /// The output file rejected a write.
    #[error("the game output file could not be written to: {0}")]
    Write(#[source] io::Error),
}

/// Errors that can abort a running game.
#[derive(Debug, Error)]
pub enum GameError {
    /// A deck operation failed mid-round.
    ///
    /// Reaching this from [`crate::Game::run`] indicates a bug in the war
    /// edge-case handling; it is not recoverable.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The output sink rejected a write.
    #[error(transparent)]
    Log(#[from] LogError),
}
