//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::{GameState, Seat};

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck and both hands. The player draws with
/// [`Game::hit`] until they [`Game::stand`], at which point the dealer
/// plays out their hand and [`Game::result`] becomes available.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: GameState,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Game;
    ///
    /// let mut game = Game::new(42);
    /// game.deal_opening().unwrap();
    /// assert_eq!(game.player().len(), 2);
    /// assert_eq!(game.cards_remaining(), 48);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game with a fresh deck shuffled by `rng`.
    #[must_use]
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(deck)
    }

    /// Creates a new game that deals from `deck` as is, without shuffling.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::Active,
        }
    }

    /// Draws the top card and adds it to the seat's hand.
    fn deal_to(&mut self, seat: Seat) -> Result<Card, ActionError> {
        let card = self
            .deck
            .deal(1)?
            .first()
            .copied()
            .ok_or(ActionError::OutOfCards)?;

        let hand = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };
        hand.push(card);
        log::trace!("{seat:?} drew {card}, total {}", hand.total());

        Ok(card)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game is over, resolved or aborted.
    #[must_use]
    pub const fn done(&self) -> bool {
        matches!(self.state, GameState::Resolved | GameState::Aborted)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the hand at the given seat.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
