use crate::Rank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PipKind {
    SuitDecorator,
    RankDecorator,
    Pip,
}

impl PipKind {
    pub fn is_decorator(self) -> bool {
        matches!(self, PipKind::SuitDecorator | PipKind::RankDecorator)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PipPlacement {
    pub kind: PipKind,
    pub position: Position,
    #[serde(default)]
    pub flip: bool,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl PipPlacement {
    pub fn pip(x: f32, y: f32) -> Self {
        Self {
            kind: PipKind::Pip,
            position: Position::new(x, y),
            flip: false,
            scale: 1.0,
        }
    }

    pub fn decorator(kind: PipKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            ..Self::pip(x, y)
        }
    }

    pub fn flipped(mut self) -> Self {
        self.flip = true;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Layout of one rank, shared by all four suits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardDefinition {
    pub rank: Rank,
    pub pips: Vec<PipPlacement>,
    #[serde(default)]
    pub face: Option<String>,
}

impl CardDefinition {
    pub fn new(rank: Rank, pips: Vec<PipPlacement>) -> Self {
        Self {
            rank,
            pips,
            face: None,
        }
    }

    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = Some(face.into());
        self
    }

    /// Face-art name, treating an empty name as absent.
    pub fn face_name(&self) -> Option<&str> {
        self.face.as_deref().filter(|name| !name.is_empty())
    }
}
