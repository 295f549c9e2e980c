//! Deck registry and shuffle tests.
//!
//! Shuffle tests use two random sources: a scripted substitute that pins
//! the exact permutation, and the default generator under fixed seeds
//! for determinism and a frequency check over all permutations of a
//! small list.

use std::collections::HashMap;

use cardlib::{deck_size, Card, CardList, DeckRng, DeckType, Randomizer};

/// Scripted random source: replays a fixed list of draws.
struct ScriptedRng {
    draws: Vec<usize>,
    pos: usize,
}

impl ScriptedRng {
    fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            pos: 0,
        }
    }
}

impl Randomizer for ScriptedRng {
    fn reseed(&mut self, _seed: u64) {
        self.pos = 0;
    }

    fn below(&mut self, limit: usize) -> usize {
        let draw = self.draws[self.pos];
        self.pos += 1;
        assert!(draw < limit, "scripted draw {} out of range {}", draw, limit);
        draw
    }
}

#[test]
fn test_deck_sizes() {
    assert_eq!(deck_size(DeckType::Standard), 52);
    assert_eq!(deck_size(DeckType::TwoJokers), 54);
    assert_eq!(deck_size(DeckType::Stripped40), 40);
}

#[test]
fn test_one_joker_deck_ends_with_joker() {
    let deck = DeckType::OneJoker.deck();
    assert_eq!(deck.len(), 53);
    assert_eq!(deck.get(52).unwrap(), Card::JOKER);
}

#[test]
fn test_registry_is_stable_across_lookups() {
    let first = DeckType::Pinochle.deck();
    let second = DeckType::Pinochle.deck();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}

/// A scripted source pins the exact Fisher-Yates permutation.
#[test]
fn test_shuffle_with_scripted_source() {
    let mut list = CardList::from_text(4, "2c 3c 4c 5c").unwrap();

    // Draws for i = 3, 2, 1: always index 0
    let mut rng = ScriptedRng::new(&[0, 0, 0]);
    list.shuffle(&mut rng).unwrap();
    assert_eq!(format!("{}", list), "(3c 4c 5c 2c)");
}

/// Drawing each index onto itself leaves the list unchanged.
#[test]
fn test_shuffle_identity_script() {
    let mut list = CardList::from_text(4, "2c 3c 4c 5c").unwrap();
    let mut rng = ScriptedRng::new(&[3, 2, 1]);
    list.shuffle(&mut rng).unwrap();
    assert_eq!(format!("{}", list), "(2c 3c 4c 5c)");
}

/// The same seed reproduces the same shuffle; different seeds diverge.
#[test]
fn test_shuffle_determinism() {
    let mut a = CardList::new(52);
    let mut b = CardList::new(52);
    a.fill(52, DeckType::Standard).unwrap();
    b.fill(52, DeckType::Standard).unwrap();

    a.shuffle(&mut DeckRng::new(99)).unwrap();
    b.shuffle(&mut DeckRng::new(99)).unwrap();
    assert_eq!(a, b);

    b.fill(52, DeckType::Standard).unwrap();
    b.shuffle(&mut DeckRng::new(100)).unwrap();
    assert_ne!(a, b);
}

/// Reseeding mid-stream restarts the draw sequence.
#[test]
fn test_shuffle_after_reseed_matches_fresh_rng() {
    let mut rng = DeckRng::new(5);
    let mut warmup = CardList::new(52);
    warmup.fill(52, DeckType::Standard).unwrap();
    warmup.shuffle(&mut rng).unwrap();

    rng.reseed(5);
    let mut a = CardList::new(52);
    a.fill(52, DeckType::Standard).unwrap();
    a.shuffle(&mut rng).unwrap();

    assert_eq!(a, warmup);
}

/// Every permutation of a 3-card list turns up with roughly equal
/// frequency under a fixed-seed generator.
#[test]
fn test_shuffle_uniformity() {
    const TRIALS: usize = 6000;

    let mut rng = DeckRng::new(12345);
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut list = CardList::from_text(3, "2c 3c 4c").unwrap();
        list.shuffle(&mut rng).unwrap();
        *counts.entry(format!("{}", list)).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "all 6 permutations should occur");

    // Expected 1000 per permutation; allow generous slack
    for (permutation, count) in &counts {
        assert!(
            (800..=1200).contains(count),
            "permutation {} occurred {} times",
            permutation,
            count
        );
    }
}

/// Shuffling one- and zero-card lists is a no-op, not an error.
#[test]
fn test_shuffle_degenerate_sizes() {
    let mut rng = DeckRng::new(1);

    let mut empty = CardList::new(4);
    empty.shuffle(&mut rng).unwrap();
    assert!(empty.is_empty());

    let mut single = CardList::from_text(4, "Ah").unwrap();
    single.shuffle(&mut rng).unwrap();
    assert_eq!(format!("{}", single), "(Ah)");
}

/// Filling from each layout and sorting reproduces the canonical deck.
#[test]
fn test_shuffled_deck_sorts_back_to_canonical() {
    for deck_type in DeckType::ALL {
        let mut deck = CardList::new(deck_type.size());
        deck.fill(deck_type.size(), deck_type).unwrap();
        deck.shuffle(&mut DeckRng::new(7)).unwrap();
        deck.sort().unwrap();
        assert_eq!(&deck, deck_type.deck(), "layout {}", deck_type);
    }
}
