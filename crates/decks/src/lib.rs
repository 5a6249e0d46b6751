//! Deck storage and card dealing engine.
//!
//! ## Core Types
//!
//! - [`Deck`] — An ordered stack of cards; the end of the sequence is the top
//! - [`Repository`] — Registry of live decks with per-deck locking
//! - [`Mint`] — Source of candidate deck identifiers
//! - [`DeckError`] — Every way an operation can be refused
//!
//! ## Concurrency
//!
//! The identifier map sits behind one `RwLock`; identifier allocation and
//! insertion share a single write guard. Each deck sits behind its own
//! `Mutex`, so shuffles and draws on one deck never interleave while other
//! decks stay available.
mod deck;
mod error;
mod mint;
mod repository;

pub use deck::*;
pub use error::*;
pub use mint::*;
pub use repository::*;
