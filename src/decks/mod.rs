//! Named deck layouts and the canonical deck registry.
//!
//! Seven layouts are defined, each with a stable small integer id kept
//! in sync with other language bindings of the card encoding:
//!
//! | id | layout | size |
//! |----|--------|------|
//! | 0 | `Standard` | 52 |
//! | 1 | `OneJoker` | 53 |
//! | 2 | `TwoJokers` | 54 |
//! | 3 | `Stripped32` | 32 |
//! | 4 | `Stripped40` | 40 |
//! | 5 | `Stripped40WithJoker` | 41 |
//! | 6 | `Pinochle` | 24 |
//!
//! Each layout owns one canonical read-only `CardList`, built once
//! before first use and shared for reads. Callers wanting a mutable
//! deck `fill` their own list from a layout rather than touching the
//! canonical instance.
//!
//! ```
//! use cardlib::{Card, DeckType};
//!
//! assert_eq!(DeckType::Standard.size(), 52);
//! assert_eq!(DeckType::Pinochle.size(), 24);
//!
//! let deck = DeckType::OneJoker.deck();
//! assert_eq!(deck.len(), 53);
//! assert_eq!(deck.get(52).unwrap(), Card::JOKER);
//! ```

pub mod layout;
pub mod registry;

pub use layout::DeckType;
pub use registry::deck_size;
