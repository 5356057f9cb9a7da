use crate::schema::{DeckLayout, SpriteSheet};
use cardface_core::{CardDefinitionTable, InvalidSuit, LayoutError, Rank, SpriteCatalog, Suit};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DECK_FILE: &str = "deck.json";
pub const SPRITES_FILE: &str = "sprites.json";

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid layout in {}: {source}", path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: LayoutError,
    },
    #[error("invalid sprite catalog in {}: {reason}", path.display())]
    Sprites { path: PathBuf, reason: String },
}

/// Everything a composer needs, loaded from one asset directory.
#[derive(Debug, Clone)]
pub struct DeckAssets {
    pub table: CardDefinitionTable,
    pub sprites: SpriteCatalog,
    pub warnings: Vec<String>,
}

pub fn load_assets(dir: &Path) -> Result<DeckAssets, DataLoadError> {
    let table = load_deck_layout(&dir.join(DECK_FILE))?;
    let sprites = load_sprite_catalog(&dir.join(SPRITES_FILE))?;
    let warnings = missing_face_art(&table, &sprites)
        .into_iter()
        .map(|key| format!("face sprite {key} not found"))
        .collect::<Vec<_>>();
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    tracing::debug!(dir = %dir.display(), "loaded deck assets");
    Ok(DeckAssets {
        table,
        sprites,
        warnings,
    })
}

pub fn load_deck_layout(path: &Path) -> Result<CardDefinitionTable, DataLoadError> {
    let layout: DeckLayout = load_json(path)?;
    layout.into_table().map_err(|source| DataLoadError::Layout {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_sprite_catalog(path: &Path) -> Result<SpriteCatalog, DataLoadError> {
    let sheet: SpriteSheet = load_json(path)?;
    sprite_catalog_from_sheet(sheet).map_err(|reason| DataLoadError::Sprites {
        path: path.to_path_buf(),
        reason,
    })
}

/// Face-art keys the layout names for some suit that the catalog lacks.
pub fn missing_face_art(table: &CardDefinitionTable, sprites: &SpriteCatalog) -> Vec<String> {
    let mut missing = Vec::new();
    for rank in Rank::all() {
        let Some(face) = table.definition_for(rank).face_name() else {
            continue;
        };
        for suit in Suit::ALL {
            let key = format!("{face}{}", suit.letter());
            if !sprites.has_face(&key) {
                missing.push(key);
            }
        }
    }
    missing
}

fn sprite_catalog_from_sheet(sheet: SpriteSheet) -> Result<SpriteCatalog, String> {
    if sheet.back.is_empty() {
        return Err("empty back key".to_string());
    }

    let mut suits = BTreeMap::new();
    for (name, key) in sheet.suits {
        let suit: Suit = name.parse().map_err(|err: InvalidSuit| err.to_string())?;
        if suits.insert(suit, key).is_some() {
            return Err(format!("duplicate sprite for suit {suit}"));
        }
    }
    let mut suit_keys: [String; 4] = Default::default();
    for (slot, suit) in suit_keys.iter_mut().zip(Suit::ALL) {
        *slot = suits
            .remove(&suit)
            .ok_or_else(|| format!("missing sprite for suit {suit}"))?;
    }

    let rank_count = sheet.ranks.len();
    let ranks: [String; 13] = sheet
        .ranks
        .try_into()
        .map_err(|_| format!("expected 13 rank sprites, found {rank_count}"))?;

    Ok(SpriteCatalog::new(sheet.back, suit_keys, ranks).with_faces(sheet.faces))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DataLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
