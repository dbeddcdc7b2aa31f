//! An ordered deck of cards.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of cards.
///
/// The front of the deck is the top (next card to draw); returned cards land
/// at the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, front = top.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Creates a full 52-card deck in uniformly random order.
    ///
    /// Every suit and rank combination appears exactly once.
    #[must_use]
    pub fn new_shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// Creates a deck holding the given cards, first card on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck holds no cards.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Appends a card to the bottom of the deck.
    pub fn add_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Iterates over the cards from top to bottom without removing them.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
