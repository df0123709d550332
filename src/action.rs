//! Player decisions as typed at the table.

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::InputError;

/// A decision the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// End the turn and let the dealer play.
    Stand,
}

impl FromStr for PlayerAction {
    type Err = InputError;

    /// Parses `h`/`hit` or `s`/`stand`, ignoring case and surrounding spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("h") || token.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(InputError::Unrecognized(token.to_string()))
        }
    }
}
