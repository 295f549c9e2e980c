//! The process-wide registry of canonical decks.
//!
//! Both tables are built exactly once, before first use, and never
//! mutated afterward, so concurrent readers need no locking.

use once_cell::sync::Lazy;

use crate::cards::{Card, Rank, Suit};
use crate::list::CardList;

use super::layout::DeckType;

/// Canonical orderings for all seven layouts, indexed by layout id.
static CANONICAL_CARDS: Lazy<[Vec<Card>; 7]> = Lazy::new(|| DeckType::ALL.map(build_layout));

/// Canonical read-only decks, one per layout, indexed by layout id.
static CANONICAL_DECKS: Lazy<[CardList; 7]> = Lazy::new(|| {
    DeckType::ALL.map(|deck| {
        let cards = canonical_cards(deck);
        let mut list = CardList::from_cards(cards.len(), cards)
            .expect("canonical layout fits its own size");
        list.set_read_only(true);
        list
    })
});

fn build_layout(deck: DeckType) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck.size());
    match deck {
        DeckType::Standard => push_ranks(&mut cards, &Rank::ALL),
        DeckType::OneJoker => {
            push_ranks(&mut cards, &Rank::ALL);
            cards.push(Card::JOKER);
        }
        DeckType::TwoJokers => {
            push_ranks(&mut cards, &Rank::ALL);
            cards.push(Card::JOKER);
            cards.push(Card::RED_JOKER);
        }
        DeckType::Stripped32 => push_ranks(&mut cards, &Rank::ALL[5..]),
        DeckType::Stripped40 => {
            push_ranks(&mut cards, &Rank::ALL[..6]);
            push_ranks(&mut cards, &Rank::ALL[9..]);
        }
        DeckType::Stripped40WithJoker => {
            push_ranks(&mut cards, &Rank::ALL[..6]);
            push_ranks(&mut cards, &Rank::ALL[9..]);
            cards.push(Card::JOKER);
        }
        DeckType::Pinochle => push_ranks(&mut cards, &Rank::ALL[7..]),
    }
    cards
}

fn push_ranks(cards: &mut Vec<Card>, ranks: &[Rank]) {
    for &rank in ranks {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
}

pub(crate) fn canonical_cards(deck: DeckType) -> &'static [Card] {
    &CANONICAL_CARDS[deck.id() as usize]
}

pub(crate) fn canonical_deck(deck: DeckType) -> &'static CardList {
    &CANONICAL_DECKS[deck.id() as usize]
}

/// Number of cards in a layout's canonical deck.
#[must_use]
pub fn deck_size(deck: DeckType) -> usize {
    deck.size()
}
