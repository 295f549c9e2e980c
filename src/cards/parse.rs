//! Text notation parsing.
//!
//! Card notation is scanned case-insensitively: a rank token
//! (`2`..`9`, `10`, `t`, `j`, `q`, `k`, `a`), optional whitespace, then a
//! suit token (`c`, `d`, `h`, `s`); or a joker literal (`jk`, `joker`,
//! `jr`). Runs of characters that are neither letters nor digits are
//! skipped before each match attempt, and anything that fails to match is
//! stepped over, so noise between cards is never an error.
//!
//! Which joker a token names is decided purely by which literal matched:
//! `jr` is the red joker, `jk` and `joker` the standard one.
//!
//! ```
//! use cardlib::{parse_all, parse_one};
//!
//! assert_eq!(parse_one("5c").unwrap().code(), 13);
//! assert_eq!(parse_one("** [Qh] **").unwrap().code(), 43);
//!
//! let hand = parse_all("Ah Kd 10s 5c 9d");
//! assert_eq!(hand.len(), 5);
//! assert_eq!(parse_all("no cards here!"), vec![]);
//! ```

use thiserror::Error;

use super::card::{Card, Rank, Suit};

/// No card notation was found anywhere in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed card text")]
pub struct ParseCardError;

/// Attempt one grammar match starting exactly at `start` (which must sit
/// on an alphanumeric byte). Returns the card and the position just past
/// the matched token.
fn match_at(bytes: &[u8], start: usize) -> Option<(Card, usize)> {
    let first = bytes[start].to_ascii_lowercase();
    let mut pos = start + 1;

    let rank = match first {
        b'2'..=b'9' => Rank::from_index(first - b'2')?,
        b'1' => {
            // "10" is the only rank starting with '1'
            if bytes.get(pos).copied() == Some(b'0') {
                pos += 1;
                Rank::Ten
            } else {
                return None;
            }
        }
        b't' => Rank::Ten,
        b'q' => Rank::Queen,
        b'k' => Rank::King,
        b'a' => Rank::Ace,
        b'j' => match bytes.get(pos).map(u8::to_ascii_lowercase) {
            Some(b'k') => return Some((Card::JOKER, pos + 1)),
            Some(b'r') => return Some((Card::RED_JOKER, pos + 1)),
            Some(b'o') if matches_literal(bytes, pos + 1, b"ker") => {
                return Some((Card::JOKER, pos + 4));
            }
            _ => Rank::Jack,
        },
        _ => return None,
    };

    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }

    let suit = match bytes.get(pos).map(u8::to_ascii_lowercase)? {
        b'c' => Suit::Club,
        b'd' => Suit::Diamond,
        b'h' => Suit::Heart,
        b's' => Suit::Spade,
        _ => return None,
    };

    Some((Card::new(rank, suit), pos + 1))
}

fn matches_literal(bytes: &[u8], start: usize, literal: &[u8]) -> bool {
    bytes.len() >= start + literal.len()
        && bytes[start..start + literal.len()]
            .iter()
            .zip(literal)
            .all(|(b, l)| b.to_ascii_lowercase() == *l)
}

/// Find the first match at or after `from`, stepping over characters
/// that start no token.
fn scan(bytes: &[u8], mut from: usize) -> Option<(Card, usize)> {
    while from < bytes.len() {
        if !bytes[from].is_ascii_alphanumeric() {
            from += 1;
            continue;
        }
        if let Some(found) = match_at(bytes, from) {
            return Some(found);
        }
        from += 1;
    }
    None
}

/// Parse the first card found anywhere in `text`.
///
/// Fails only if no token in the whole string matches the grammar.
pub fn parse_one(text: &str) -> Result<Card, ParseCardError> {
    scan(text.as_bytes(), 0)
        .map(|(card, _)| card)
        .ok_or(ParseCardError)
}

impl std::str::FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_one(s)
    }
}

/// Iterator over every card named in a piece of text, left to right.
///
/// Each call to [`CardReader::new`] starts a fresh scan; the iterator is
/// finite and not restartable.
#[derive(Clone, Debug)]
pub struct CardReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CardReader<'a> {
    /// Start scanning `text` from the beginning.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for CardReader<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let (card, next_pos) = scan(self.bytes, self.pos)?;
        self.pos = next_pos;
        Some(card)
    }
}

/// Collect every card named in `text`. An empty result is valid, not an
/// error.
#[must_use]
pub fn parse_all(text: &str) -> Vec<Card> {
    CardReader::new(text).collect()
}
