//! Player identity, victory status, and the overall game state.

use core::fmt;

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;

/// One of the two players.
///
/// Used as an index into fixed two-element structures throughout, so an
/// invalid player identity is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player 1.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Both players, in dealing order.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// Returns the index of this player into per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// Returns the 1-based player number used in summaries.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// The terminal or non-terminal classification of the game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictoryStatus {
    /// The game is still ongoing.
    Playing,
    /// The game was won by the given player.
    Won(Player),
    /// The game ended in a draw (mutual exhaustion during a war).
    Draw,
}

/// The full state of a game of War: one deck per player plus the victory
/// status.
///
/// Cards are created once at construction and from then on only migrate
/// between the two player decks.
#[derive(Debug)]
pub struct GameState {
    /// The player decks, indexed by [`Player::index`].
    decks: [Deck; 2],
    /// The current victory status.
    victory: VictoryStatus,
}

impl GameState {
    /// Shuffles a fresh 52-card deck and deals it out alternately, one card
    /// at a time, giving each player 26 cards.
    #[must_use]
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut stock = Deck::new_shuffled(rng);
        let mut one = Deck::new_empty();
        let mut two = Deck::new_empty();

        while let (Ok(first), Ok(second)) = (stock.draw_top(), stock.draw_top()) {
            one.add_bottom(first);
            two.add_bottom(second);
        }

        // An odd stock would strand its last card above.
        debug_assert!(stock.is_empty());

        Self::with_decks(one, two)
    }

    /// Creates a game state from explicit player decks.
    ///
    /// Useful for driving specific scenarios in tests.
    #[must_use]
    pub const fn with_decks(one: Deck, two: Deck) -> Self {
        Self {
            decks: [one, two],
            victory: VictoryStatus::Playing,
        }
    }

    /// Checks whether the game should continue, settling the victory status
    /// if it should not.
    ///
    /// Returns `false` immediately if a draw has been declared. Otherwise an
    /// empty deck loses the game for its owner. Player 1's deck is checked
    /// before Player 2's, so if both decks are empty the game resolves to a
    /// Player 2 win; this asymmetry is preserved from the original rules for
    /// behavioral compatibility.
    pub fn verify_continue(&mut self) -> bool {
        if self.victory == VictoryStatus::Draw {
            return false;
        }

        if self.decks[Player::One.index()].is_empty() {
            self.victory = VictoryStatus::Won(Player::Two);
            return false;
        }

        if self.decks[Player::Two.index()].is_empty() {
            self.victory = VictoryStatus::Won(Player::One);
            return false;
        }

        true
    }

    /// Returns the current victory status.
    #[must_use]
    pub const fn victory_status(&self) -> VictoryStatus {
        self.victory
    }

    /// Sets the victory status.
    pub const fn set_victory_status(&mut self, status: VictoryStatus) {
        self.victory = status;
    }

    /// Draws the top card of the given player's deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the player has no cards left.
    pub fn draw_card(&mut self, player: Player) -> Result<Card, DeckError> {
        self.decks[player.index()].draw_top()
    }

    /// Appends a card to the bottom of the given player's deck.
    pub fn add_card(&mut self, player: Player, card: Card) {
        self.decks[player.index()].add_bottom(card);
    }

    /// Returns the number of cards in the given player's deck.
    #[must_use]
    pub fn deck_size(&self, player: Player) -> usize {
        self.decks[player.index()].size()
    }

    /// Returns a read-only view of the given player's deck.
    #[must_use]
    pub const fn deck(&self, player: Player) -> &Deck {
        &self.decks[player.index()]
    }
}

impl fmt::Display for GameState {
    /// Renders the final game summary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;

        match self.victory {
            VictoryStatus::Playing => {
                let one = self.deck_size(Player::One);
                let two = self.deck_size(Player::Two);
                write!(
                    f,
                    "\nThe game is still ongoing. Player 1 has {one} cards.  Player 2 has {two} cards.\n"
                )
            }
            VictoryStatus::Draw => {
                f.write_str("\nThe game has ended.  The game ended in a rare draw.\n")
            }
            VictoryStatus::Won(player) => {
                write!(
                    f,
                    "\nThe game has ended.  The game was won by Player {}.\n",
                    player.number()
                )
            }
        }
    }
}
