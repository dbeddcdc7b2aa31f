//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GameError;
use crate::logger::GameLog;

mod round;
pub mod state;

pub use round::GameRound;
pub use state::{GameState, Player, VictoryStatus};

/// A game of War, played to completion round by round.
///
/// The game owns the two player decks (through its [`GameState`]) and the
/// random number generator used for shuffling. Given the same seed a game
/// plays out identically every time.
#[derive(Debug)]
pub struct Game {
    /// The shared game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed, shuffling and dealing the
    /// deck.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, Player};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state().deck_size(Player::One), 26);
    /// assert_eq!(game.state().deck_size(Player::Two), 26);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(&mut rng);

        Self { state, rng }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays the game to completion, handing each round summary and the
    /// final summary to the given log.
    ///
    /// Returns the terminal victory status.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Log`] if the log rejects a write, or
    /// [`GameError::Deck`] if round resolution draws from an empty deck;
    /// both abort the game.
    pub fn run(&mut self, log: &mut dyn GameLog) -> Result<VictoryStatus, GameError> {
        while self.state.verify_continue() {
            let mut round = GameRound::new(&mut self.state);
            round.play(&mut self.rng)?;
            log.append_round(&round.to_string())?;
        }

        log.append_final(&self.state.to_string())?;

        Ok(self.state.victory_status())
    }
}
