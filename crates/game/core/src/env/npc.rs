//! Monster templates.

use crate::state::{Character, Monster, MonsterId, Position};

/// Stats a monster spawns with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub hitpoints: i32,
    pub strength: i32,
    pub speed: f64,
    pub sight_range: i32,
}

impl MonsterTemplate {
    pub fn to_character(&self, position: Position) -> Character {
        Character::new(self.name, self.glyph, position)
            .with_hitpoints(self.hitpoints)
            .with_strength(self.strength)
            .with_speed(self.speed)
            .with_sight_range(self.sight_range)
    }
}

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
pub enum MonsterKind {
    Bat,
    Spider,
    Dragon,
}

impl MonsterKind {
    pub const fn template(self) -> MonsterTemplate {
        match self {
            MonsterKind::Bat => MonsterTemplate {
                name: "Bat",
                glyph: 'B',
                hitpoints: 50,
                strength: 1,
                speed: 1.5,
                sight_range: 10,
            },
            MonsterKind::Spider => MonsterTemplate {
                name: "Spider",
                glyph: 'S',
                hitpoints: 100,
                strength: 5,
                speed: 1.1,
                sight_range: 10,
            },
            MonsterKind::Dragon => MonsterTemplate {
                name: "Dragon",
                glyph: 'D',
                hitpoints: 300,
                strength: 100,
                speed: 0.8,
                sight_range: 5,
            },
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'B' => Some(MonsterKind::Bat),
            'S' => Some(MonsterKind::Spider),
            'D' => Some(MonsterKind::Dragon),
            _ => None,
        }
    }

    pub fn spawn(self, id: MonsterId, position: Position) -> Monster {
        Monster::new(id, self, self.template().to_character(position))
    }
}
