//! # cardlib
//!
//! A compact playing-card representation and deck/container library.
//!
//! Cards are encoded as single small integers, human-readable notation is
//! parsed into that encoding, and ordered collections of cards live in
//! fixed-capacity lists seeded from a registry of named deck layouts.
//!
//! ## Design Principles
//!
//! 1. **Fixed-Capacity Containers**: A `CardList` is bound to its backing
//!    buffer at construction. Exceeding capacity is a reported error,
//!    never a reallocation.
//!
//! 2. **Errors Over Silence**: Every bounds, capacity, duplicate, or
//!    lookup violation surfaces a `CardListError`. Nothing is swallowed.
//!
//! 3. **Deterministic Randomness**: Shuffling goes through the
//!    `Randomizer` capability, so any shuffle is reproducible under a
//!    fixed seed and testable with a scripted substitute.
//!
//! ## Modules
//!
//! - `cards`: Card codes, ranks, suits, names, and text notation parsing
//! - `list`: The fixed-capacity ordered card container
//! - `decks`: Named deck layouts and the canonical deck registry
//! - `rng`: Random-source capability and the default deterministic RNG

pub mod cards;
pub mod decks;
pub mod list;
pub mod rng;

// Re-export commonly used types
pub use crate::cards::{parse_all, parse_one, Card, CardReader, ParseCardError, Rank, Suit};

pub use crate::decks::{deck_size, DeckType};

pub use crate::list::{CardList, CardListError};

pub use crate::rng::{DeckRng, Randomizer};
