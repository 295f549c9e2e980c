//! The deck layout enumeration.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::list::CardList;

use super::registry;

/// A named deck layout with a fixed canonical card set.
///
/// Discriminants are the stable layout ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeckType {
    /// Normal 52-card deck.
    Standard = 0,
    /// 52 cards plus the standard joker.
    OneJoker = 1,
    /// 52 cards plus both jokers.
    TwoJokers = 2,
    /// Sevens and up, as in Skat or Manila poker.
    Stripped32 = 3,
    /// Eights, nines, and tens removed, as in Panguingue.
    Stripped40 = 4,
    /// The stripped-40 deck with a joker added, as in Mexican poker.
    Stripped40WithJoker = 5,
    /// Nines and up, single copy per card.
    Pinochle = 6,
}

impl DeckType {
    /// All layouts in id order.
    pub const ALL: [DeckType; 7] = [
        DeckType::Standard,
        DeckType::OneJoker,
        DeckType::TwoJokers,
        DeckType::Stripped32,
        DeckType::Stripped40,
        DeckType::Stripped40WithJoker,
        DeckType::Pinochle,
    ];

    /// Layout from its stable id, `None` outside `0..=6`.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < Self::ALL.len() {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// The stable layout id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Symbolic layout name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckType::Standard => "standard",
            DeckType::OneJoker => "one-joker",
            DeckType::TwoJokers => "two-jokers",
            DeckType::Stripped32 => "stripped-32",
            DeckType::Stripped40 => "stripped-40",
            DeckType::Stripped40WithJoker => "stripped-40-joker",
            DeckType::Pinochle => "pinochle",
        }
    }

    /// Number of cards in the canonical deck.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            DeckType::Standard => 52,
            DeckType::OneJoker => 53,
            DeckType::TwoJokers => 54,
            DeckType::Stripped32 => 32,
            DeckType::Stripped40 => 40,
            DeckType::Stripped40WithJoker => 41,
            DeckType::Pinochle => 24,
        }
    }

    /// The canonical card ordering: ranks ascending, suits in
    /// club/diamond/heart/spade order within each rank, jokers last.
    #[must_use]
    pub fn cards(self) -> &'static [Card] {
        registry::canonical_cards(self)
    }

    /// The canonical read-only deck for this layout.
    #[must_use]
    pub fn deck(self) -> &'static CardList {
        registry::canonical_deck(self)
    }
}

impl std::fmt::Display for DeckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
