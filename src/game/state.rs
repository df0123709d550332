//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// The player may still hit or stand.
    #[default]
    Active,
    /// The round is over and the outcome can be read.
    Resolved,
    /// The deck ran out before the dealer finished. There is no outcome.
    Aborted,
}

/// Which side of the table a card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}
