//! One round of play, including the war tie-break escalation.

use core::cmp::Ordering;
use core::fmt;
use core::fmt::Write as _;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DeckError;
use crate::game::state::{GameState, Player, VictoryStatus};

/// Outcome of one war escalation step.
enum Escalation {
    /// More cards were drawn; the newest pair must be compared again.
    Rematch(Card, Card),
    /// One player could not continue the war and the other wins outright.
    Decided(Player),
    /// Both players ran out of cards mid-war.
    Stalemate,
}

/// A single round of play against a borrowed [`GameState`].
///
/// A round covers the initial simultaneous draw and any number of nested
/// wars until a winner or a draw is determined. The round records every card
/// played so the winner can collect them and so the round can be logged; it
/// is discarded after logging.
#[derive(Debug)]
pub struct GameRound<'a> {
    /// The game state this round plays against.
    state: &'a mut GameState,
    /// Cards played this round, per player, in draw order.
    played: [Vec<Card>; 2],
    /// Set once both players run out of cards during a war.
    draw_reached: bool,
    /// The round winner, if the round was decisive.
    winner: Option<Player>,
}

impl<'a> GameRound<'a> {
    /// Creates a fresh round bound to the given game state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self {
            state,
            played: [Vec::new(), Vec::new()],
            draw_reached: false,
            winner: None,
        }
    }

    /// Plays the round to completion.
    ///
    /// Each player draws one card; the higher card wins outright and equal
    /// cards trigger a war. Wars are resolved iteratively: each pass either
    /// draws more cards and compares the newest pair again, or ends the
    /// round. On a decisive win all cards played this round by both players
    /// are shuffled and appended to the winner's deck bottom; on mutual
    /// exhaustion during a war the game's victory status is set to
    /// [`VictoryStatus::Draw`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if a draw from an empty deck escapes the
    /// war edge-case handling. This indicates a bug in round resolution and
    /// is fatal to the game.
    pub fn play(&mut self, rng: &mut ChaCha8Rng) -> Result<(), DeckError> {
        let mut contest = (
            self.draw_played(Player::One)?,
            self.draw_played(Player::Two)?,
        );

        loop {
            match contest.0.value().cmp(&contest.1.value()) {
                Ordering::Greater => {
                    self.finish(Player::One, rng);
                    return Ok(());
                }
                Ordering::Less => {
                    self.finish(Player::Two, rng);
                    return Ok(());
                }
                Ordering::Equal => {
                    if self.draw_reached {
                        // A repeat tie after mutual exhaustion ends the game.
                        // Cannot fire today since a stalemate returns below
                        // before any rematch; kept so a repeat tie can never
                        // loop forever.
                        self.state.set_victory_status(VictoryStatus::Draw);
                        return Ok(());
                    }

                    match self.escalate()? {
                        Escalation::Rematch(one, two) => contest = (one, two),
                        Escalation::Decided(winner) => {
                            self.finish(winner, rng);
                            return Ok(());
                        }
                        Escalation::Stalemate => {
                            self.state.set_victory_status(VictoryStatus::Draw);
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    /// Returns the round winner, or `None` if the round ended in a draw.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns whether mutual exhaustion was reached during this round.
    #[must_use]
    pub const fn draw_reached(&self) -> bool {
        self.draw_reached
    }

    /// Returns the cards the given player has played this round, in draw
    /// order.
    #[must_use]
    pub fn played_cards(&self, player: Player) -> &[Card] {
        &self.played[player.index()]
    }

    /// Draws one card for the player and records it as played.
    fn draw_played(&mut self, player: Player) -> Result<Card, DeckError> {
        let card = self.state.draw_card(player)?;
        self.played[player.index()].push(card);
        Ok(card)
    }

    /// Runs one war escalation step.
    ///
    /// The branch taken depends on how many cards each player has left after
    /// the draws already made this round:
    ///
    /// - both hold more than two: a full war, two more cards each;
    /// - at least one player is out of cards: the round is decided for the
    ///   remaining player (who commits one more card), or reaches a
    ///   stalemate if both are out;
    /// - otherwise both can still fight but at least one cannot afford a
    ///   full war: a player holding more than one card commits a buffer card
    ///   first, then each commits one comparison card.
    fn escalate(&mut self) -> Result<Escalation, DeckError> {
        let size_one = self.state.deck_size(Player::One);
        let size_two = self.state.deck_size(Player::Two);

        if size_one > 2 && size_two > 2 {
            self.draw_played(Player::One)?;
            self.draw_played(Player::Two)?;
            let one = self.draw_played(Player::One)?;
            let two = self.draw_played(Player::Two)?;
            Ok(Escalation::Rematch(one, two))
        } else if size_one < 1 || size_two < 1 {
            if size_one == 0 && size_two == 0 {
                self.draw_reached = true;
                Ok(Escalation::Stalemate)
            } else if size_one > 0 {
                self.draw_played(Player::One)?;
                Ok(Escalation::Decided(Player::One))
            } else {
                self.draw_played(Player::Two)?;
                Ok(Escalation::Decided(Player::Two))
            }
        } else {
            if size_one > 1 {
                self.draw_played(Player::One)?;
            }
            let one = self.draw_played(Player::One)?;

            if size_two > 1 {
                self.draw_played(Player::Two)?;
            }
            let two = self.draw_played(Player::Two)?;

            Ok(Escalation::Rematch(one, two))
        }
    }

    /// Records the winner and moves every card played this round, in random
    /// order, to the bottom of the winner's deck.
    fn finish(&mut self, winner: Player, rng: &mut ChaCha8Rng) {
        self.winner = Some(winner);

        let mut pot: Vec<Card> = Vec::with_capacity(self.played[0].len() + self.played[1].len());
        for player in Player::BOTH {
            pot.extend_from_slice(&self.played[player.index()]);
        }

        pot.shuffle(rng);

        for card in pot {
            self.state.add_card(winner, card);
        }
    }
}

impl fmt::Display for GameRound<'_> {
    /// Renders the round summary: both players' played cards, the draw or
    /// winner line, and both remaining deck counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;

        for player in Player::BOTH {
            write!(
                f,
                "\nPlayer {} played the following cards this round:{}",
                player.number(),
                join_cards(self.played_cards(player))
            )?;
        }

        if self.draw_reached {
            f.write_str("\nA draw was declared this round")?;
        } else if let Some(winner) = self.winner {
            write!(f, "\nPlayer {} won this round.", winner.number())?;
        }

        for player in Player::BOTH {
            write!(
                f,
                "\nPlayer {} deck count:{}",
                player.number(),
                self.state.deck_size(player)
            )?;
        }

        Ok(())
    }
}

/// Joins rendered cards with `", "`.
fn join_cards(cards: &[Card]) -> String {
    let mut out = String::new();

    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{card}");
    }

    out
}
