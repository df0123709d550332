//! Hands and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        11..=13 => 10,
        _ => rank,
    }
}

/// Scores a sequence of cards, returning `(total, soft)`.
///
/// Every ace counts 11 at first. If that busts the hand, one ace is demoted
/// to 1. Only one demotion is ever made, so `[A, A]` scores a hard 12 and
/// `[A, A, 9]` a hard 21.
///
/// # Example
///
/// ```
/// use bjcore::{Card, Suit, hand::score};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)];
/// assert_eq!(score(&cards), (21, true));
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut soft = false;

    for card in cards {
        if card.is_ace() {
            soft = true;
        }
        total = total.saturating_add(card_value(card.rank));
    }

    if total > BLACKJACK && soft {
        total -= 10;
        soft = false;
    }

    (total, soft)
}

/// Cards held by one party, with a score kept in step with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    soft: bool,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft: false,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        (self.total, self.soft) = score(&self.cards);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
        (self.total, self.soft) = score(&self.cards);
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        hand.extend(iter);
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
