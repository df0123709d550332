use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, ResultError};
use crate::result::Outcome;

use super::{Game, GameState, Seat};

/// Total the dealer stands on, unless it is soft.
const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Returns whether the dealer has to draw another card.
    ///
    /// The dealer hits every total below 17 and a soft 17.
    fn dealer_must_hit(&self) -> bool {
        let total = self.dealer.total();
        total < DEALER_STANDS_ON || (total == DEALER_STANDS_ON && self.dealer.is_soft())
    }

    /// Player action: Stand.
    ///
    /// Resolves the game, then the dealer draws until the dealer policy says
    /// stop. Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the game is already resolved.
    /// Returns [`ActionError::OutOfCards`] if the deck runs dry while the
    /// dealer must draw. The game is then [`GameState::Aborted`] and has no
    /// outcome.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != GameState::Active {
            return Err(ActionError::InvalidState);
        }

        self.state = GameState::Resolved;

        let mut drawn = Vec::new();
        while self.dealer_must_hit() {
            match self.deal_to(Seat::Dealer) {
                Ok(card) => drawn.push(card),
                Err(err) => {
                    log::debug!("deck ran out with the dealer on {}", self.dealer.total());
                    self.state = GameState::Aborted;
                    return Err(err);
                }
            }
        }

        log::debug!(
            "dealer finishes on {} after drawing {} card(s)",
            self.dealer.total(),
            drawn.len()
        );

        Ok(drawn)
    }

    /// Returns the outcome of a resolved game.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::NotResolved`] while the game is still active
    /// and [`ResultError::Aborted`] if the dealer could not finish drawing.
    pub const fn result(&self) -> Result<Outcome, ResultError> {
        match self.state {
            GameState::Active => Err(ResultError::NotResolved),
            GameState::Aborted => Err(ResultError::Aborted),
            GameState::Resolved => Ok(Outcome::decide(&self.player, &self.dealer)),
        }
    }
}
