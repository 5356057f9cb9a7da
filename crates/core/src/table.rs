use crate::{CardDefinition, PipKind, PipPlacement, Rank};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("rank {0} outside 1..=13")]
    RankOutOfRange(i64),
    #[error("card definition table not loaded")]
    NotLoaded,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("missing definition for rank {0}")]
    MissingRank(u8),
    #[error("duplicate definition for rank {0}")]
    DuplicateRank(u8),
    #[error("decorator {0} is not tagged suit or rank")]
    NotADecorator(usize),
    #[error("rank {rank} pip {index} is tagged as a decorator")]
    DecoratorInPips { rank: u8, index: usize },
    #[error("rank {0} is not a face rank but names face art")]
    FaceOnNumberRank(u8),
    #[error("invalid scale {scale} on {what}")]
    InvalidScale { what: String, scale: f32 },
}

/// Read-only access to card layouts, keyed by rank.
pub trait CardLayout {
    fn definition(&self, rank: i64) -> Result<&CardDefinition, LookupError>;

    fn decorators(&self) -> Result<&[PipPlacement], LookupError>;
}

/// One definition per rank plus the corner decorators shared by every card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDefinitionTable {
    decorators: Vec<PipPlacement>,
    definitions: Vec<CardDefinition>,
}

impl CardDefinitionTable {
    pub fn new(
        decorators: Vec<PipPlacement>,
        definitions: Vec<CardDefinition>,
    ) -> Result<Self, LayoutError> {
        for (index, decorator) in decorators.iter().enumerate() {
            if !decorator.kind.is_decorator() {
                return Err(LayoutError::NotADecorator(index));
            }
            check_scale(decorator, || format!("decorator {index}"))?;
        }

        let mut slots: Vec<Option<CardDefinition>> = vec![None; Rank::MAX as usize];
        for def in definitions {
            let rank = def.rank.value();
            for (index, pip) in def.pips.iter().enumerate() {
                if pip.kind != PipKind::Pip {
                    return Err(LayoutError::DecoratorInPips { rank, index });
                }
                check_scale(pip, || format!("rank {rank} pip {index}"))?;
            }
            if def.face_name().is_some() && !def.rank.is_face() {
                return Err(LayoutError::FaceOnNumberRank(rank));
            }
            let slot = &mut slots[def.rank.index()];
            if slot.is_some() {
                return Err(LayoutError::DuplicateRank(rank));
            }
            *slot = Some(def);
        }

        let definitions = slots
            .into_iter()
            .zip(Rank::all())
            .map(|(slot, rank)| slot.ok_or(LayoutError::MissingRank(rank.value())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            decorators,
            definitions,
        })
    }

    pub fn get(&self, rank: i64) -> Result<&CardDefinition, LookupError> {
        let rank = Rank::new(rank).map_err(|_| LookupError::RankOutOfRange(rank))?;
        Ok(self.definition_for(rank))
    }

    pub fn definition_for(&self, rank: Rank) -> &CardDefinition {
        &self.definitions[rank.index()]
    }

    pub fn decorator_placements(&self) -> &[PipPlacement] {
        &self.decorators
    }
}

fn check_scale(
    placement: &PipPlacement,
    what: impl FnOnce() -> String,
) -> Result<(), LayoutError> {
    if placement.scale.is_finite() && placement.scale > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidScale {
            what: what(),
            scale: placement.scale,
        })
    }
}

impl CardLayout for CardDefinitionTable {
    fn definition(&self, rank: i64) -> Result<&CardDefinition, LookupError> {
        self.get(rank)
    }

    fn decorators(&self) -> Result<&[PipPlacement], LookupError> {
        Ok(self.decorator_placements())
    }
}

static GLOBAL_TABLE: OnceLock<CardDefinitionTable> = OnceLock::new();

/// Installs the process-wide table. Only the first call wins; later calls
/// hand their table back.
pub fn install(table: CardDefinitionTable) -> Result<(), CardDefinitionTable> {
    GLOBAL_TABLE.set(table)
}

pub fn global() -> Result<&'static CardDefinitionTable, LookupError> {
    GLOBAL_TABLE.get().ok_or(LookupError::NotLoaded)
}

/// Handle to the process-wide table for callers that compose against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalTable;

impl CardLayout for GlobalTable {
    fn definition(&self, rank: i64) -> Result<&CardDefinition, LookupError> {
        global()?.get(rank)
    }

    fn decorators(&self) -> Result<&[PipPlacement], LookupError> {
        Ok(global()?.decorator_placements())
    }
}
