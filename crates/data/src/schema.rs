use cardface_core::{
    CardDefinition, CardDefinitionTable, LayoutError, PipKind, PipPlacement, Position, Rank,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsonPipType {
    #[default]
    Pip,
    Suit,
    #[serde(alias = "letter")]
    Rank,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JsonLoc {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPip {
    #[serde(rename = "type", default)]
    pub kind: JsonPipType,
    pub loc: JsonLoc,
    #[serde(default)]
    pub flip: bool,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCard {
    pub rank: Rank,
    #[serde(default)]
    pub pips: Vec<JsonPip>,
    #[serde(default)]
    pub face: String,
}

/// Contents of `deck.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckLayout {
    pub decorators: Vec<JsonPip>,
    pub cards: Vec<JsonCard>,
}

/// Contents of `sprites.json`. Suits are keyed by letter, ranks run Ace to King.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub back: String,
    pub suits: BTreeMap<String, String>,
    pub ranks: Vec<String>,
    #[serde(default)]
    pub faces: Vec<String>,
}

impl JsonPip {
    pub fn to_placement(&self) -> PipPlacement {
        let kind = match self.kind {
            JsonPipType::Pip => PipKind::Pip,
            JsonPipType::Suit => PipKind::SuitDecorator,
            JsonPipType::Rank => PipKind::RankDecorator,
        };
        PipPlacement {
            kind,
            position: Position::new(self.loc.x, self.loc.y),
            flip: self.flip,
            scale: self.scale,
        }
    }
}

impl JsonCard {
    pub fn to_definition(&self) -> CardDefinition {
        let pips = self.pips.iter().map(JsonPip::to_placement).collect();
        let def = CardDefinition::new(self.rank, pips);
        if self.face.is_empty() {
            def
        } else {
            def.with_face(self.face.clone())
        }
    }
}

impl DeckLayout {
    pub fn into_table(self) -> Result<CardDefinitionTable, LayoutError> {
        let decorators = self.decorators.iter().map(JsonPip::to_placement).collect();
        let definitions = self.cards.iter().map(JsonCard::to_definition).collect();
        CardDefinitionTable::new(decorators, definitions)
    }
}
