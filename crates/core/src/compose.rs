use crate::{
    CardLayout, Color, InvalidSuit, LookupError, PipKind, PipPlacement, Position, Rank,
    SpriteCatalog, Suit,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sorting order for everything drawn on the card front.
pub const FRONT_DRAW_ORDER: i32 = 1;
/// Sorting order for the back, above the whole front.
pub const BACK_DRAW_ORDER: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    InvalidSuit(#[from] InvalidSuit),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("decorator {0} is not tagged suit or rank")]
    NotADecorator(usize),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    SuitDecorator,
    RankDecorator,
    Pip,
    Face,
    Back,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Upright,
    Flipped,
}

impl Rotation {
    pub fn degrees(self) -> f32 {
        match self {
            Rotation::Upright => 0.0,
            Rotation::Flipped => 180.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisualElement {
    pub role: Role,
    pub position: Position,
    pub rotation: Rotation,
    pub scale: f32,
    pub sprite_key: String,
    pub draw_order: i32,
    pub label: String,
    /// Set only on rank decorators, which take the suit color.
    #[serde(default)]
    pub tint: Option<Color>,
}

impl VisualElement {
    fn centered(role: Role, sprite_key: String, draw_order: i32, label: String) -> Self {
        Self {
            role,
            position: Position::ORIGIN,
            rotation: Rotation::Upright,
            scale: 1.0,
            sprite_key,
            draw_order,
            label,
            tint: None,
        }
    }

    fn placed(role: Role, placement: &PipPlacement, sprite_key: &str, label: String) -> Self {
        Self {
            role,
            position: placement.position,
            rotation: if placement.flip {
                Rotation::Flipped
            } else {
                Rotation::Upright
            },
            scale: placement.scale,
            sprite_key: sprite_key.to_string(),
            draw_order: FRONT_DRAW_ORDER,
            label,
            tint: None,
        }
    }
}

/// A composed card. Only `face_up` changes after composition.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    color: Color,
    face_up: bool,
    elements: Vec<VisualElement>,
}

impl Card {
    /// Suit letter followed by rank value, e.g. `C5` or `H12`.
    pub fn name(&self) -> String {
        format!("{}{}", self.suit.letter(), self.rank.value())
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    pub fn face_up(&self) -> bool {
        self.face_up
    }

    /// Flips visibility only; the element list is left alone.
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    pub fn back_visible(&self) -> bool {
        !self.face_up
    }

    pub fn is_visible(&self, element: &VisualElement) -> bool {
        match element.role {
            Role::Back => !self.face_up,
            _ => self.face_up,
        }
    }

    pub fn visible_elements(&self) -> impl Iterator<Item = &VisualElement> {
        self.elements
            .iter()
            .filter(move |element| self.is_visible(element))
    }

    pub fn elements_with_role(&self, role: Role) -> impl Iterator<Item = &VisualElement> {
        self.elements
            .iter()
            .filter(move |element| element.role == role)
    }
}

/// Builds cards against a sprite catalog.
#[derive(Debug, Clone, Copy)]
pub struct CardComposer<'a> {
    sprites: &'a SpriteCatalog,
    face_up: bool,
}

impl<'a> CardComposer<'a> {
    pub fn new(sprites: &'a SpriteCatalog) -> Self {
        Self {
            sprites,
            face_up: true,
        }
    }

    pub fn face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    pub fn compose<L>(&self, suit: Suit, rank: i64, table: &L) -> Result<Card, ComposeError>
    where
        L: CardLayout + ?Sized,
    {
        let rank =
            Rank::new(rank).map_err(|err| ComposeError::InvalidArgument(err.to_string()))?;
        let color = suit.color();
        let def = table.definition(i64::from(rank.value()))?;
        let decorators = table.decorators()?;

        let mut elements = Vec::with_capacity(decorators.len() + def.pips.len() + 2);
        for (idx, deco) in decorators.iter().enumerate() {
            elements.push(self.decorator(idx, deco, suit, rank, color)?);
        }

        let suit_key = self.sprites.suit_key(suit);
        for (idx, pip) in def.pips.iter().enumerate() {
            elements.push(VisualElement::placed(
                Role::Pip,
                pip,
                suit_key,
                format!("pip_{idx}"),
            ));
        }

        if let Some(face) = def.face_name() {
            let key = format!("{face}{}", suit.letter());
            if self.sprites.has_face(&key) {
                elements.push(VisualElement::centered(
                    Role::Face,
                    key.clone(),
                    FRONT_DRAW_ORDER,
                    key,
                ));
            } else {
                tracing::error!(sprite = %key, "face sprite not found");
            }
        }

        elements.push(VisualElement::centered(
            Role::Back,
            self.sprites.back_key().to_string(),
            BACK_DRAW_ORDER,
            "back".to_string(),
        ));

        tracing::debug!(
            suit = %suit,
            rank = rank.value(),
            elements = elements.len(),
            "composed card"
        );

        Ok(Card {
            suit,
            rank,
            color,
            face_up: self.face_up,
            elements,
        })
    }

    fn decorator(
        &self,
        idx: usize,
        deco: &PipPlacement,
        suit: Suit,
        rank: Rank,
        color: Color,
    ) -> Result<VisualElement, ComposeError> {
        match deco.kind {
            PipKind::RankDecorator => {
                let mut element = VisualElement::placed(
                    Role::RankDecorator,
                    deco,
                    self.sprites.rank_key(rank),
                    "rank".to_string(),
                );
                element.tint = Some(color);
                Ok(element)
            }
            PipKind::SuitDecorator => Ok(VisualElement::placed(
                Role::SuitDecorator,
                deco,
                self.sprites.suit_key(suit),
                "suit".to_string(),
            )),
            PipKind::Pip => Err(ComposeError::NotADecorator(idx)),
        }
    }
}

/// Composes a face-up card.
pub fn compose<L>(
    suit: Suit,
    rank: i64,
    table: &L,
    sprites: &SpriteCatalog,
) -> Result<Card, ComposeError>
where
    L: CardLayout + ?Sized,
{
    CardComposer::new(sprites).compose(suit, rank, table)
}

/// All 52 cards, suits in `Suit::ALL` order and ranks Ace to King.
pub fn compose_deck<L>(
    composer: &CardComposer<'_>,
    table: &L,
) -> Result<Vec<Card>, ComposeError>
where
    L: CardLayout + ?Sized,
{
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            cards.push(composer.compose(suit, i64::from(rank.value()), table)?);
        }
    }
    Ok(cards)
}

/// Parses `<suit letter><rank>` such as `H12` or `c5`.
pub fn parse_card_name(name: &str) -> Result<(Suit, i64), ComposeError> {
    let mut chars = name.chars();
    let letter = chars
        .next()
        .ok_or_else(|| ComposeError::InvalidArgument("empty card name".to_string()))?;
    let suit = Suit::from_letter(letter)?;
    let rank = chars
        .as_str()
        .parse::<i64>()
        .map_err(|_| ComposeError::InvalidArgument(format!("bad rank in card name {name:?}")))?;
    Ok((suit, rank))
}
