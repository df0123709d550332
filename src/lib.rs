//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round against a dealer
//! who hits soft 17: the opening deal, player hits, dealer play on stand,
//! and the final [`Outcome`].
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, Seat};
//!
//! let mut game = Game::new(42);
//! game.deal_opening().unwrap();
//!
//! while !game.done() && game.player().total() < 17 {
//!     game.hit(Seat::Player).unwrap();
//! }
//! if !game.done() {
//!     game.stand().unwrap();
//! }
//!
//! println!("{}", game.result().unwrap());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use action::PlayerAction;
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, InputError, ResultError};
pub use game::{Game, GameState, Seat};
pub use hand::Hand;
pub use result::{Outcome, Winner};
