//! Shared error taxonomy for card-list operations.

use thiserror::Error;

/// Every fallible `CardList` operation reports one of these.
///
/// All failures are deterministic functions of the inputs and the list
/// state; there is no transient or retryable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardListError {
    /// The list is flagged read-only.
    #[error("list is read-only")]
    ReadOnly,

    /// The list is at capacity; it never reallocates.
    #[error("list is full")]
    Full,

    /// The card is already present in a unique-flagged list.
    #[error("duplicate card")]
    DuplicateCard,

    /// Index outside the live range. Also covers popping an empty list.
    #[error("index out of range")]
    IndexOutOfRange,

    /// The card is not in the list.
    #[error("card not found")]
    CardNotFound,
}
