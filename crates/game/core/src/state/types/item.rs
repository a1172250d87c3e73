//! Item state.
//!
//! An item is owned by exactly one place at a time: a level's ground pile, a
//! character's carried list, or one of a character's two equipment slots.
//! Every transfer moves the `Item` value, so ownership is enforced by the type
//! system rather than by bookkeeping.

use super::{ItemId, Position};

/// Equipment class of an item; decides which slot it can be equipped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Helmet,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub name: String,
    pub glyph: char,
    /// Last ground position. Only meaningful while the item lies on the ground.
    pub position: Position,
    /// Combat multiplier. Weapons scale outgoing damage by `power`, helmets
    /// scale incoming damage by `1 - power`.
    pub power: f64,
}

impl Item {
    pub fn new(
        id: ItemId,
        kind: ItemKind,
        name: impl Into<String>,
        glyph: char,
        position: Position,
        power: f64,
    ) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            glyph,
            position,
            power,
        }
    }
}
