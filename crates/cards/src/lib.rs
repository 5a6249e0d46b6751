//! Playing card representation and the 52-card catalog.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Rank`] — Two through Ace
//! - [`Suit`] — Clubs, diamonds, hearts, spades
//! - [`Catalog`] — The fixed universe of valid cards, and name resolution
//!
//! Card tokens are the rank character followed by the suit letter: `AS`,
//! `KD`, `TC`. Parsing is case-insensitive and accepts `10` for `T`.
mod card;
mod catalog;
mod rank;
mod suit;

pub use card::*;
pub use catalog::*;
pub use rank::*;
pub use suit::*;
