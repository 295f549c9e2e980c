//! The fixed-capacity ordered card container.
//!
//! A `CardList` is bound to a backing buffer sized at construction.
//! Growing operations fail with [`CardListError::Full`] at capacity —
//! the buffer never reallocates, preserving the original interop
//! contract of a pre-sized native store.
//!
//! Two persistent flags shape the mutation contract:
//!
//! - **read-only** — every mutating operation fails with `ReadOnly`
//! - **unique** — appends and writes reject cards already present
//!   (`DuplicateCard`), tracked by a 64-bit presence mask so the check
//!   is O(1)
//!
//! ## Usage
//!
//! ```
//! use cardlib::{CardList, DeckType, DeckRng};
//!
//! let mut deck = CardList::new(52);
//! deck.fill(52, DeckType::Standard).unwrap();
//!
//! let mut rng = DeckRng::new(42);
//! deck.shuffle(&mut rng).unwrap();
//!
//! let top = deck.pop().unwrap();
//! assert_eq!(deck.len(), 51);
//! assert!(!deck.contains(top));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardReader};
use crate::decks::DeckType;
use crate::rng::Randomizer;

use super::error::CardListError;

const fn bit(card: Card) -> u64 {
    1u64 << card.code()
}

/// Fixed-capacity ordered sequence of cards.
///
/// Positions `0..len()` hold cards; capacity is immutable after
/// construction. Equality is order-sensitive elementwise comparison —
/// never a set comparison, even for unique lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardList {
    cards: Vec<Card>,
    capacity: usize,
    read_only: bool,
    unique: bool,
    mask: u64,
}

impl CardList {
    /// Create an empty list with the given fixed capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
            read_only: false,
            unique: false,
            mask: 0,
        }
    }

    /// Create a list and append every card the notation grammar finds in
    /// `text`.
    pub fn from_text(capacity: usize, text: &str) -> Result<Self, CardListError> {
        let mut list = Self::new(capacity);
        for card in CardReader::new(text) {
            list.append(card)?;
        }
        Ok(list)
    }

    /// Create a list and append the given cards in order.
    pub fn from_cards(capacity: usize, cards: &[Card]) -> Result<Self, CardListError> {
        let mut list = Self::new(capacity);
        for &card in cards {
            list.append(card)?;
        }
        Ok(list)
    }

    /// Current number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the list holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The fixed capacity set at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True if the read-only flag is set.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// True if the duplicate-rejection flag is set.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Set or clear the read-only flag.
    pub fn set_read_only(&mut self, on: bool) {
        self.read_only = on;
    }

    /// Set or clear the duplicate-rejection flag.
    ///
    /// Enabling it on a list that already contains duplicates fails with
    /// `DuplicateCard` and leaves the flag off.
    pub fn set_unique(&mut self, on: bool) -> Result<(), CardListError> {
        self.writable()?;
        if on {
            self.mask = build_mask(&self.cards)?;
        } else {
            self.mask = 0;
        }
        self.unique = on;
        Ok(())
    }

    /// The live cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    fn writable(&self) -> Result<(), CardListError> {
        if self.read_only {
            Err(CardListError::ReadOnly)
        } else {
            Ok(())
        }
    }

    fn check_duplicate(&self, card: Card) -> Result<(), CardListError> {
        if self.unique && self.mask & bit(card) != 0 {
            Err(CardListError::DuplicateCard)
        } else {
            Ok(())
        }
    }

    /// Append a card at the end.
    pub fn append(&mut self, card: Card) -> Result<(), CardListError> {
        self.writable()?;
        if self.cards.len() == self.capacity {
            return Err(CardListError::Full);
        }
        self.check_duplicate(card)?;
        self.set_mask_bit(card);
        self.cards.push(card);
        Ok(())
    }

    /// Insert a card at `index`, shifting later cards right.
    ///
    /// `index` may equal `len()`, which appends.
    pub fn insert(&mut self, index: usize, card: Card) -> Result<(), CardListError> {
        self.writable()?;
        if self.cards.len() == self.capacity {
            return Err(CardListError::Full);
        }
        if index > self.cards.len() {
            return Err(CardListError::IndexOutOfRange);
        }
        self.check_duplicate(card)?;
        self.set_mask_bit(card);
        self.cards.insert(index, card);
        Ok(())
    }

    /// Append up to `count` cards copied from the front of `other`
    /// (`count == 0` means all of it).
    ///
    /// Stops early at capacity; the number actually appended is returned
    /// and nothing is rolled back. A duplicate under the unique flag is
    /// an error, with earlier appends kept.
    pub fn extend_from(
        &mut self,
        other: &CardList,
        count: usize,
    ) -> Result<usize, CardListError> {
        self.writable()?;
        let take = if count == 0 {
            other.len()
        } else {
            count.min(other.len())
        };

        let mut appended = 0;
        for &card in &other.cards[..take] {
            if self.cards.len() == self.capacity {
                break;
            }
            self.check_duplicate(card)?;
            self.set_mask_bit(card);
            self.cards.push(card);
            appended += 1;
        }
        Ok(appended)
    }

    /// The card at `index`.
    pub fn get(&self, index: usize) -> Result<Card, CardListError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(CardListError::IndexOutOfRange)
    }

    /// Replace the card at `index`, returning the one overwritten.
    pub fn set(&mut self, index: usize, card: Card) -> Result<Card, CardListError> {
        self.writable()?;
        if index >= self.cards.len() {
            return Err(CardListError::IndexOutOfRange);
        }
        let old = self.cards[index];
        if old == card {
            return Ok(old);
        }
        self.check_duplicate(card)?;
        self.clear_mask_bit(old);
        self.set_mask_bit(card);
        self.cards[index] = card;
        Ok(old)
    }

    /// Remove and return the card at `index`, shifting later cards left.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, CardListError> {
        self.writable()?;
        if index >= self.cards.len() {
            return Err(CardListError::IndexOutOfRange);
        }
        let card = self.cards.remove(index);
        self.clear_mask_bit(card);
        Ok(card)
    }

    /// Remove the first occurrence of `card`.
    pub fn remove_card(&mut self, card: Card) -> Result<Card, CardListError> {
        self.writable()?;
        let index = self.index_of(card).ok_or(CardListError::CardNotFound)?;
        self.remove_at(index)
    }

    /// Remove and return the last card. Empty lists surface the uniform
    /// bad-index error.
    pub fn pop(&mut self) -> Result<Card, CardListError> {
        self.writable()?;
        let card = self.cards.pop().ok_or(CardListError::IndexOutOfRange)?;
        self.clear_mask_bit(card);
        Ok(card)
    }

    /// Index of the first occurrence of `card`, if present. Absence is
    /// not an error.
    #[must_use]
    pub fn index_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// True if `card` is present.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        if self.unique {
            self.mask & bit(card) != 0
        } else {
            self.index_of(card).is_some()
        }
    }

    /// Remove all cards. Capacity is unchanged.
    pub fn clear(&mut self) -> Result<(), CardListError> {
        self.writable()?;
        self.cards.clear();
        self.mask = 0;
        Ok(())
    }

    /// Keep only the first `new_len` cards.
    pub fn truncate(&mut self, new_len: usize) -> Result<(), CardListError> {
        self.writable()?;
        if new_len > self.cards.len() {
            return Err(CardListError::IndexOutOfRange);
        }
        if new_len == self.cards.len() {
            return Ok(());
        }
        self.cards.truncate(new_len);
        if self.unique {
            self.mask = build_mask(&self.cards)?;
        }
        Ok(())
    }

    /// Reverse the order of the cards in place.
    pub fn reverse(&mut self) -> Result<(), CardListError> {
        self.writable()?;
        self.cards.reverse();
        Ok(())
    }

    /// Sort the cards in place, ascending by code.
    pub fn sort(&mut self) -> Result<(), CardListError> {
        self.writable()?;
        self.cards.sort_unstable();
        Ok(())
    }

    /// Shuffle in place with an unbiased Fisher-Yates permutation drawn
    /// from the external random source.
    pub fn shuffle<R: Randomizer + ?Sized>(&mut self, rng: &mut R) -> Result<(), CardListError> {
        self.writable()?;
        for i in (1..self.cards.len()).rev() {
            let j = rng.below(i + 1);
            self.cards.swap(i, j);
        }
        Ok(())
    }

    /// Replace the contents with the first `count` cards of a layout's
    /// canonical ordering, cycling the layout when `count` exceeds its
    /// size (multi-deck shoes). Returns the number of cards dealt.
    pub fn fill(&mut self, count: usize, deck: DeckType) -> Result<usize, CardListError> {
        self.writable()?;
        if count > self.capacity {
            return Err(CardListError::IndexOutOfRange);
        }
        let source = deck.cards();
        if self.unique && count > source.len() {
            return Err(CardListError::DuplicateCard);
        }

        self.cards.clear();
        self.mask = 0;
        let mut remaining = count;
        while remaining > 0 {
            let take = remaining.min(source.len());
            self.cards.extend_from_slice(&source[..take]);
            remaining -= take;
        }
        if self.unique {
            self.mask = build_mask(&self.cards)?;
        }
        Ok(self.cards.len())
    }

    /// Overwrite this list's contents with a copy of `other`'s.
    pub fn copy_from(&mut self, other: &CardList) -> Result<(), CardListError> {
        self.writable()?;
        if other.len() > self.capacity {
            return Err(CardListError::Full);
        }
        if self.unique {
            // Validate before touching our contents
            let mask = build_mask(&other.cards)?;
            self.mask = mask;
        }
        self.cards.clear();
        self.cards.extend_from_slice(&other.cards);
        Ok(())
    }

    /// FNV-1a hash of the codes in order. Lists equal under `==` hash
    /// equal.
    #[must_use]
    pub fn hash32(&self) -> u32 {
        let mut hash: u32 = 2_166_136_261;
        for &card in &self.cards {
            hash ^= u32::from(card.code());
            hash = hash.wrapping_mul(16_777_619);
        }
        hash
    }

    fn set_mask_bit(&mut self, card: Card) {
        if self.unique {
            self.mask |= bit(card);
        }
    }

    fn clear_mask_bit(&mut self, card: Card) {
        // Sound because unique lists never hold two copies
        if self.unique {
            self.mask &= !bit(card);
        }
    }
}

fn build_mask(cards: &[Card]) -> Result<u64, CardListError> {
    let mut mask = 0u64;
    for &card in cards {
        if mask & bit(card) != 0 {
            return Err(CardListError::DuplicateCard);
        }
        mask |= bit(card);
    }
    Ok(mask)
}

impl PartialEq for CardList {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for CardList {}

impl std::hash::Hash for CardList {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cards.hash(state);
    }
}

impl std::fmt::Display for CardList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(card.name())?;
        }
        f.write_str(")")
    }
}
