use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported suit {0:?}")]
pub struct InvalidSuit(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rank {0} outside 1..=13")]
pub struct InvalidRank(pub i64);

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, InvalidSuit> {
        match letter.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(InvalidSuit(letter.to_string())),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Suit {
    type Err = InvalidSuit;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Suit::from_letter(letter);
        }
        match value.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(InvalidSuit(value.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
        }
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    pub fn new(value: i64) -> Result<Self, InvalidRank> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Rank(value as u8))
        } else {
            Err(InvalidRank(value))
        }
    }

    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_face(self) -> bool {
        self.0 >= Self::JACK.0
    }

    pub fn symbol(self) -> &'static str {
        const SYMBOLS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        SYMBOLS[self.index()]
    }

    pub(crate) fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<i64> for Rank {
    type Error = InvalidRank;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_suits_are_diamonds_and_hearts() {
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Color::Red.name(), "Red");
    }

    #[test]
    fn suit_parses_letters_and_names() {
        assert_eq!("h".parse::<Suit>(), Ok(Suit::Hearts));
        assert_eq!("Spades".parse::<Suit>(), Ok(Suit::Spades));
        assert_eq!(Suit::from_letter('x'), Err(InvalidSuit("x".to_string())));
        assert!("".parse::<Suit>().is_err());
    }

    #[test]
    fn rank_bounds() {
        assert!(Rank::new(0).is_err());
        assert!(Rank::new(14).is_err());
        assert!(Rank::new(-1).is_err());
        assert_eq!(Rank::new(13).map(Rank::value), Ok(13));
        assert_eq!(Rank::all().count(), 13);
        assert!(Rank::JACK.is_face());
        assert!(!Rank::new(10).unwrap().is_face());
        assert_eq!(Rank::QUEEN.symbol(), "Q");
    }

    #[test]
    fn rank_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Rank>("5").ok(), Rank::new(5).ok());
        assert!(serde_json::from_str::<Rank>("14").is_err());
    }
}
