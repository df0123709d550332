use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState, Seat};

impl Game {
    /// Deals one card to the given seat.
    ///
    /// This is also how the opening deal is made. If the card takes the
    /// player over 21 the game is resolved on the spot and the dealer does
    /// not play.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] once the game is over and
    /// [`ActionError::OutOfCards`] if the deck is empty. Neither hand
    /// changes on error.
    pub fn hit(&mut self, seat: Seat) -> Result<Card, ActionError> {
        if self.state != GameState::Active {
            return Err(ActionError::InvalidState);
        }

        let card = self.deal_to(seat)?;

        if seat == Seat::Player && self.player.is_bust() {
            log::debug!("player bust on {}", self.player.total());
            self.state = GameState::Resolved;
        }

        Ok(card)
    }

    /// Makes the opening deal: player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Same as [`Game::hit`].
    pub fn deal_opening(&mut self) -> Result<(), ActionError> {
        for seat in [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer] {
            self.hit(seat)?;
        }
        Ok(())
    }
}
