//! Fixed-capacity ordered card containers.
//!
//! ## Key Types
//!
//! - `CardList`: The container — append, insert, remove, search, sort,
//!   shuffle, and bulk fill from a deck layout
//! - `CardListError`: The shared error taxonomy for every fallible
//!   operation
//!
//! A list is single-owner mutable state: nothing here synchronizes, so
//! callers sharing one list across tasks serialize access themselves.

pub mod cardlist;
pub mod error;

pub use cardlist::CardList;
pub use error::CardListError;
