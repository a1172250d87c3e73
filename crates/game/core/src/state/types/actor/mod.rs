//! Characters: the shared shape of the player and monsters.
//!
//! [`Player`] and [`Monster`] both embed a [`Character`]; code that only
//! cares about the shared attributes (combat, movement) takes
//! `&mut Character` directly.

mod equipment;
mod inventory;

pub use equipment::Equipment;
pub use inventory::InventoryState;

use crate::env::MonsterKind;

use super::{Item, MonsterId, Position};

/// Attributes shared by every character on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub position: Position,
    pub glyph: char,
    pub name: String,
    /// Dead at zero or below.
    pub hitpoints: i32,
    pub strength: i32,
    /// Action points granted per tick.
    pub speed: f64,
    /// Accumulated action points; spent in whole-unit steps.
    pub action_points: f64,
    pub sight_range: i32,
    pub inventory: InventoryState,
    pub equipment: Equipment,
}

impl Character {
    pub fn new(name: impl Into<String>, glyph: char, position: Position) -> Self {
        Self {
            position,
            glyph,
            name: name.into(),
            hitpoints: 1,
            strength: 0,
            speed: 1.0,
            action_points: 0.0,
            sight_range: 0,
            inventory: InventoryState::empty(),
            equipment: Equipment::empty(),
        }
    }

    pub fn with_hitpoints(mut self, hitpoints: i32) -> Self {
        self.hitpoints = hitpoints;
        self
    }

    pub fn with_strength(mut self, strength: i32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_sight_range(mut self, sight_range: i32) -> Self {
        self.sight_range = sight_range;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hitpoints > 0
    }

    /// Removes every carried and equipped item.
    pub fn strip_belongings(&mut self) -> Vec<Item> {
        let mut items: Vec<Item> = self.inventory.drain().collect();
        items.extend(self.equipment.take_all());
        items
    }
}

/// The single player character, shared by every level of the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub character: Character,
}

impl Player {
    pub fn new(character: Character) -> Self {
        Self { character }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub character: Character,
}

impl Monster {
    pub fn new(id: MonsterId, kind: MonsterKind, character: Character) -> Self {
        Self {
            id,
            kind,
            character,
        }
    }
}
