//! Playing cards: ranks, suits and the card itself.
//!
//! Ranks are totally ordered with ace high (2 < 3 < ... < K < A).
//! Suits are opaque tags; the rules never compare them.
//!
//! Cards parse from short notation, rank first:
//!
//! ```
//! use rust_dealer::cards::{Card, Rank, Suit};
//!
//! let card: Card = "7C".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::new(7), Suit::Club));
//!
//! let ten: Card = "10♦".parse().unwrap();
//! assert_eq!(ten.to_string(), "10♦");
//! ```

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// ♠
    Spade,
    /// ♣
    Club,
    /// ♥
    Heart,
    /// ♦
    Diamond,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    #[must_use]
    pub fn to_symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(val: char) -> Result<Suit, CardError> {
        match val {
            's' | 'S' | '♠' => Ok(Suit::Spade),
            'c' | 'C' | '♣' => Ok(Suit::Club),
            'h' | 'H' | '♥' => Ok(Suit::Heart),
            'd' | 'D' | '♦' => Ok(Suit::Diamond),
            _ => Err(CardError::InvalidSuitChar(val)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}

/// Card rank, 2 through 14 (ace high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: Rank = Rank(2);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// Create a rank from its numeric value.
    ///
    /// Panics if `value` is outside 2..=14; use `Rank::try_from` for
    /// untrusted input.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 2 && value <= 14, "Rank must be 2-14");
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ranks, lowest first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (2..=14u8).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(val: u8) -> Result<Rank, CardError> {
        if (2..=14).contains(&val) {
            Ok(Rank(val))
        } else {
            Err(CardError::InvalidRankNumber(val))
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(val: char) -> Result<Rank, CardError> {
        match val {
            '2'..='9' => Ok(Rank(val as u8 - b'0')),
            't' | 'T' => Ok(Rank(10)),
            'j' | 'J' => Ok(Rank::JACK),
            'q' | 'Q' => Ok(Rank::QUEEN),
            'k' | 'K' => Ok(Rank::KING),
            'a' | 'A' => Ok(Rank::ACE),
            _ => Err(CardError::InvalidRankChar(val)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            14 => write!(f, "A"),
            n => write!(f, "{}", n),
        }
    }
}

/// A playing card. Immutable once drawn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// rank first, suit last: "7C", "10h", "T♦", "A♠"
    fn from_str(s: &str) -> Result<Card, CardError> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| CardError::InvalidNotation(s.to_string()))?;
        let suit = Suit::try_from(suit_char)?;

        let rank = match chars.as_str() {
            "10" => Rank(10),
            r => {
                let mut rc = r.chars();
                match (rc.next(), rc.next()) {
                    (Some(c), None) => Rank::try_from(c)?,
                    _ => return Err(CardError::InvalidNotation(s.to_string())),
                }
            }
        };

        Ok(Card { rank, suit })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parse a whitespace-separated list of cards, e.g. `"7C 7D 9S"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split_whitespace().map(Card::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::new(9) > Rank::new(7));
        assert!(Rank::ACE > Rank::KING);
        assert!(Rank::MIN < Rank::new(3));
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_rank_try_from() {
        assert_eq!(Rank::try_from(10u8).unwrap(), Rank::new(10));
        assert!(Rank::try_from(1u8).is_err());
        assert!(Rank::try_from(15u8).is_err());
        assert_eq!(Rank::try_from('A').unwrap(), Rank::ACE);
        assert_eq!(Rank::try_from('t').unwrap(), Rank::new(10));
        assert_eq!(Rank::try_from('x'), Err(CardError::InvalidRankChar('x')));
    }

    #[test]
    fn test_suit_try_from() {
        assert_eq!(Suit::try_from('♥').unwrap(), Suit::Heart);
        assert_eq!(Suit::try_from('d').unwrap(), Suit::Diamond);
        assert!(Suit::try_from('x').is_err());
    }

    #[test]
    fn test_card_parse() {
        assert_eq!("9D".parse::<Card>().unwrap(), Card::new(Rank::new(9), Suit::Diamond));
        assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::new(10), Suit::Heart));
        assert_eq!("A♠".parse::<Card>().unwrap(), Card::new(Rank::ACE, Suit::Spade));
        assert!("".parse::<Card>().is_err());
        assert!("11C".parse::<Card>().is_err());
        assert!("7X".parse::<Card>().is_err());
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Rank::new(7), Suit::Club);
        assert_eq!(card.to_string(), "7♣");
        assert_eq!(format!("{:?}", Card::new(Rank::QUEEN, Suit::Heart)), "Q♥");
    }

    #[test]
    fn test_parse_cards() {
        let cards = parse_cards("7C 7D  9S").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::new(Rank::new(9), Suit::Spade));
        assert!(parse_cards("7C ZZ").is_err());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::KING, Suit::Diamond);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
