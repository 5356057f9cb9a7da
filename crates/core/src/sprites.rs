use crate::{Rank, Suit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sprite keys available to the rendering layer. Composition only checks
/// face art against it; every other key is referenced as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteCatalog {
    back: String,
    suits: [String; 4],
    ranks: [String; 13],
    faces: BTreeSet<String>,
}

impl SpriteCatalog {
    /// `suits` follows `Suit::ALL` order; `ranks` runs Ace to King.
    pub fn new(back: impl Into<String>, suits: [String; 4], ranks: [String; 13]) -> Self {
        Self {
            back: back.into(),
            suits,
            ranks,
            faces: BTreeSet::new(),
        }
    }

    pub fn with_faces<I, S>(mut self, faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faces.extend(faces.into_iter().map(Into::into));
        self
    }

    pub fn back_key(&self) -> &str {
        &self.back
    }

    pub fn suit_key(&self, suit: Suit) -> &str {
        &self.suits[suit.index()]
    }

    pub fn rank_key(&self, rank: Rank) -> &str {
        &self.ranks[rank.index()]
    }

    pub fn has_face(&self, key: &str) -> bool {
        self.faces.contains(key)
    }
}

impl Default for SpriteCatalog {
    /// Suit letters, rank symbols and a `Card_Back` key, with no face art.
    fn default() -> Self {
        let suits = Suit::ALL.map(|suit| suit.letter().to_string());
        let mut ranks: [String; 13] = Default::default();
        for rank in Rank::all() {
            ranks[rank.index()] = rank.symbol().to_string();
        }
        Self::new("Card_Back", suits, ranks)
    }
}
