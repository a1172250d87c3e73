use crate::state::{Item, ItemId, ItemKind, Position};

/// Item catalogue. Each archetype fixes kind, name, glyph and power.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ItemArchetype {
    Sword,
    Helmet,
}

impl ItemArchetype {
    pub const fn kind(self) -> ItemKind {
        match self {
            ItemArchetype::Sword => ItemKind::Weapon,
            ItemArchetype::Helmet => ItemKind::Helmet,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ItemArchetype::Sword => "Sword",
            ItemArchetype::Helmet => "Helmet",
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            ItemArchetype::Sword => 's',
            ItemArchetype::Helmet => 'h',
        }
    }

    pub const fn power(self) -> f64 {
        match self {
            ItemArchetype::Sword => 2.0,
            ItemArchetype::Helmet => 0.5,
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            's' => Some(ItemArchetype::Sword),
            'h' => Some(ItemArchetype::Helmet),
            _ => None,
        }
    }

    pub fn create(self, id: ItemId, position: Position) -> Item {
        Item::new(
            id,
            self.kind(),
            self.name(),
            self.glyph(),
            position,
            self.power(),
        )
    }
}
