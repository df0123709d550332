//! Outcome of a resolved game.

use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// Who came out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player wins.
    Player,
    /// The dealer wins.
    Dealer,
    /// Neither side wins.
    Nobody,
}

/// Final classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dealer went over 21.
    DealerBust,
    /// Both sides finished on exactly 21.
    BlackjackPush,
    /// Player went over 21.
    PlayerBust,
    /// Dealer finished with the higher total.
    DealerHigher,
    /// Player finished with the higher total.
    PlayerHigher,
    /// Equal totals below 21.
    Push,
}

impl Outcome {
    /// Classifies the final hands.
    ///
    /// A dealer bust is checked first, so it wins for the player whatever
    /// the player's own total is.
    #[must_use]
    pub const fn decide(player: &Hand, dealer: &Hand) -> Self {
        let player = player.total();
        let dealer = dealer.total();

        if dealer > BLACKJACK {
            Self::DealerBust
        } else if player == BLACKJACK && dealer == BLACKJACK {
            Self::BlackjackPush
        } else if player > BLACKJACK {
            Self::PlayerBust
        } else if dealer > player {
            Self::DealerHigher
        } else if dealer < player {
            Self::PlayerHigher
        } else {
            Self::Push
        }
    }

    /// Returns who won.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::DealerBust | Self::PlayerHigher => Winner::Player,
            Self::PlayerBust | Self::DealerHigher => Winner::Dealer,
            Self::BlackjackPush | Self::Push => Winner::Nobody,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DealerBust => "You win! Dealer bust.",
            Self::BlackjackPush => "You both hit blackjack! You Tie.",
            Self::PlayerBust => "You lose! You bust.",
            Self::DealerHigher => "You lose! Dealer has a higher score.",
            Self::PlayerHigher => "You win! You have a higher score.",
            Self::Push => "Push. You have the same score as the dealer.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
