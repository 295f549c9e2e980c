//! Card codes, ranks, and suits.
//!
//! ## Encoding
//!
//! A card is a single integer in `1..=54`:
//!
//! - `code = ((rank << 2) | suit) + 1` for the 52 plain cards, with
//!   `rank` in `0..=12` (deuce through ace) and `suit` in `0..=3`
//!   (club, diamond, heart, spade)
//! - `53` is the standard joker, `54` the second ("red") joker
//!
//! The mapping is a bijection: decoding recovers `rank = (code-1) >> 2`
//! and `suit = (code-1) & 3` for non-joker codes. Code `0` is never a
//! valid card.
//!
//! ## Usage
//!
//! ```
//! use cardlib::{Card, Rank, Suit};
//!
//! let card = Card::new(Rank::Five, Suit::Club);
//! assert_eq!(card.code(), 13);
//! assert_eq!(card.name(), "5c");
//! assert_eq!(card.rank(), Some(Rank::Five));
//!
//! assert!(Card::RED_JOKER.is_joker());
//! assert_eq!(Card::RED_JOKER.rank(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Card rank, deuce low through ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank from its zero-based index, `None` outside `0..=12`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index <= 12 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Zero-based index of this rank.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One-letter notation: `2`..`9`, `T`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Full lowercase name, e.g. `"queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "deuce",
            Rank::Three => "trey",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }
}

/// Card suit in canonical order: club, diamond, heart, spade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Club = 0,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Suit from its zero-based index, `None` outside `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index <= 3 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Zero-based index of this suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// One-letter notation: `c`, `d`, `h`, or `s`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }

    /// Full singular name, e.g. `"spade"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Club => "club",
            Suit::Diamond => "diamond",
            Suit::Heart => "heart",
            Suit::Spade => "spade",
        }
    }
}

/// Canonical two-character display names, indexed by card code.
/// Index 0 is a placeholder and never names a valid card.
static CARD_NAMES: [&str; 55] = [
    "XX", "2c", "2d", "2h", "2s", "3c", "3d", "3h", "3s", "4c", "4d", "4h", "4s", "5c", "5d",
    "5h", "5s", "6c", "6d", "6h", "6s", "7c", "7d", "7h", "7s", "8c", "8d", "8h", "8s", "9c",
    "9d", "9h", "9s", "Tc", "Td", "Th", "Ts", "Jc", "Jd", "Jh", "Js", "Qc", "Qd", "Qh", "Qs",
    "Kc", "Kd", "Kh", "Ks", "Ac", "Ad", "Ah", "As", "JK", "JR",
];

/// A single card, encoded as an integer code in `1..=54`.
///
/// Codes `1..=52` are the rank/suit lattice; `53` and `54` are the two
/// jokers, outside it. Every public constructor upholds the range, so a
/// `Card` in hand is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// The standard ("black") joker, code 53.
    pub const JOKER: Card = Card(53);

    /// The second ("red") joker, code 54.
    pub const RED_JOKER: Card = Card(54);

    /// Lowest valid card code.
    pub const MIN_CODE: u8 = 1;

    /// Highest valid card code.
    pub const MAX_CODE: u8 = 54;

    /// Build a card from rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self((((rank as u8) << 2) | suit as u8) + 1)
    }

    /// Checked construction from a raw code. `None` outside `1..=54`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code >= Self::MIN_CODE && code <= Self::MAX_CODE {
            Some(Self(code))
        } else {
            None
        }
    }

    /// The raw integer code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// True for either joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 > 52
    }

    /// Rank of a plain card; `None` for jokers, which have none.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Rank::from_index((self.0 - 1) >> 2)
        }
    }

    /// Suit of a plain card; `None` for jokers, which have none.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        if self.is_joker() {
            None
        } else {
            Suit::from_index((self.0 - 1) & 3)
        }
    }

    /// Canonical two-character name, e.g. `"Qh"`, `"JK"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        CARD_NAMES[self.0 as usize]
    }

    /// Full English name, e.g. `"ten of clubs"`, `"red joker"`.
    #[must_use]
    pub fn full_name(self) -> String {
        match (self.rank(), self.suit()) {
            (Some(rank), Some(suit)) => format!("{} of {}s", rank.name(), suit.name()),
            _ => {
                if self == Self::RED_JOKER {
                    "red joker".to_string()
                } else {
                    "joker".to_string()
                }
            }
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(Card::new(Rank::Two, Suit::Club).code(), 1);
        assert_eq!(Card::new(Rank::Five, Suit::Club).code(), 13);
        assert_eq!(Card::new(Rank::Nine, Suit::Diamond).code(), 30);
        assert_eq!(Card::new(Rank::Queen, Suit::Heart).code(), 43);
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).code(), 52);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), Some(rank));
                assert_eq!(card.suit(), Some(suit));
            }
        }
    }

    #[test]
    fn test_codes_are_a_bijection() {
        let mut seen = [false; 55];
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let code = Card::new(rank, suit).code();
                assert!((1..=52).contains(&code));
                assert!(!seen[code as usize], "code {} produced twice", code);
                seen[code as usize] = true;
            }
        }
        assert!(seen[1..=52].iter().all(|&s| s));
    }

    #[test]
    fn test_jokers() {
        assert_eq!(Card::JOKER.code(), 53);
        assert_eq!(Card::RED_JOKER.code(), 54);
        assert!(Card::JOKER.is_joker());
        assert!(Card::RED_JOKER.is_joker());
        assert!(!Card::new(Rank::Ace, Suit::Spade).is_joker());

        assert_eq!(Card::JOKER.rank(), None);
        assert_eq!(Card::JOKER.suit(), None);
        assert_eq!(Card::RED_JOKER.rank(), None);
    }

    #[test]
    fn test_from_code_bounds() {
        assert_eq!(Card::from_code(0), None);
        assert_eq!(Card::from_code(1), Some(Card::new(Rank::Two, Suit::Club)));
        assert_eq!(Card::from_code(54), Some(Card::RED_JOKER));
        assert_eq!(Card::from_code(55), None);
        assert_eq!(Card::from_code(255), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Card::new(Rank::Two, Suit::Club).name(), "2c");
        assert_eq!(Card::new(Rank::Ten, Suit::Spade).name(), "Ts");
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).name(), "As");
        assert_eq!(Card::JOKER.name(), "JK");
        assert_eq!(Card::RED_JOKER.name(), "JR");
    }

    #[test]
    fn test_name_table_matches_encoding() {
        for code in 1..=52u8 {
            let card = Card::from_code(code).unwrap();
            let expected = format!(
                "{}{}",
                card.rank().unwrap().letter(),
                card.suit().unwrap().letter()
            );
            assert_eq!(card.name(), expected);
        }
    }

    #[test]
    fn test_full_names() {
        assert_eq!(Card::new(Rank::Ten, Suit::Club).full_name(), "ten of clubs");
        assert_eq!(
            Card::new(Rank::Two, Suit::Spade).full_name(),
            "deuce of spades"
        );
        assert_eq!(Card::JOKER.full_name(), "joker");
        assert_eq!(Card::RED_JOKER.full_name(), "red joker");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Card::new(Rank::Queen, Suit::Heart)), "Qh");
        assert_eq!(format!("{}", Card::JOKER), "JK");
    }

    #[test]
    fn test_ordering_follows_codes() {
        let five_c = Card::new(Rank::Five, Suit::Club);
        let five_d = Card::new(Rank::Five, Suit::Diamond);
        let six_c = Card::new(Rank::Six, Suit::Club);

        assert!(five_c < five_d);
        assert!(five_d < six_c);
        assert!(six_c < Card::JOKER);
        assert!(Card::JOKER < Card::RED_JOKER);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Queen, Suit::Heart);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
