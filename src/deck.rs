//! The deck: construction, shuffling, and dealing from the front.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// An ordered sequence of cards, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck.
    ///
    /// Cards are ordered suit-major (♠, ♥, ♦, ♣) and rank-minor (ace to king).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// No uniqueness check is made, which makes this useful for scripting
    /// specific deals.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::from_cards(vec![Card::new(Suit::Hearts, 1)]);
    /// assert_eq!(deck.deal(1).unwrap(), vec![Card::new(Suit::Hearts, 1)]);
    /// assert!(deck.is_empty());
    /// ```
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Walks the deck front to back, swapping each position `i` with a
    /// uniformly chosen position in `0..=i`. Every call draws fresh values
    /// from `rng`, so shuffling twice gives two independent permutations.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in 0..self.cards.len() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        log::debug!("shuffled {} cards", self.cards.len());
    }

    /// Removes the first `n` cards and returns them in deal order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfCards`] if fewer than `n` cards remain. The
    /// deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DealError::OutOfCards {
                requested: n,
                remaining,
            });
        }

        let dealt: Vec<Card> = self.cards.drain(..n).collect();
        log::trace!("dealt {n} card(s), {} remaining", self.cards.len());
        Ok(dealt)
    }

    /// Returns the remaining cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
