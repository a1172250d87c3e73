//! Authoritative world state.
//!
//! This module owns the data structures that describe levels, characters and
//! items, plus the [`World`] aggregate that ties the levels to the single
//! player. Runtime layers read snapshots of this state but mutate it
//! exclusively through [`GameEngine`](crate::engine::GameEngine).
pub mod snapshot;
pub mod types;

pub use snapshot::{GameStatus, Snapshot};
pub use types::{
    Character, Equipment, EventKind, EventLog, InventoryState, Item, ItemId, ItemKind,
    Level, Monster, MonsterId, ObserverId, OverlayKind, Player, Portal, Position, TerrainKind,
    Tile, TileFlags, TileGrid,
};

use crate::error::{InvariantViolation, WorldError};

/// Every loaded level, the active one, and the player that moves between them.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    levels: Vec<Level>,
    current: usize,
    player: Player,
    turn: u64,
}

impl World {
    /// Assembles a world from fully initialised levels.
    ///
    /// Fails when the initial level or any portal target is missing, a portal
    /// points off its target grid, a level still holds `Pending` terrain, or
    /// the player does not fit on the initial level. On success the initial
    /// level's visibility is computed from the player's position.
    pub fn new(
        levels: impl IntoIterator<Item = Level>,
        initial_level: &str,
        player: Player,
    ) -> Result<Self, WorldError> {
        let mut collected: Vec<Level> = Vec::new();
        for level in levels {
            if collected.iter().any(|known| known.name == level.name) {
                return Err(WorldError::DuplicateLevel { name: level.name });
            }
            collected.push(level);
        }

        let current = collected
            .iter()
            .position(|level| level.name == initial_level)
            .ok_or_else(|| WorldError::UnknownLevel {
                name: initial_level.to_string(),
            })?;

        for level in &collected {
            if let Some(position) = level.pending_tiles().next() {
                return Err(WorldError::UnresolvedTerrain {
                    level: level.name.clone(),
                    position,
                });
            }

            for (position, portal) in &level.portals {
                let target = collected
                    .iter()
                    .find(|candidate| candidate.name == portal.level)
                    .ok_or_else(|| WorldError::UnknownPortalTarget {
                        level: level.name.clone(),
                        position: *position,
                        target: portal.level.clone(),
                    })?;
                if !target.grid.contains(portal.position) {
                    return Err(WorldError::PortalOutOfGrid {
                        level: level.name.clone(),
                        position: *position,
                        target: portal.level.clone(),
                        destination: portal.position,
                    });
                }
            }
        }

        let start = &collected[current];
        let position = player.character.position;
        if !start.grid.contains(position) {
            return Err(WorldError::PlayerOutOfGrid {
                level: start.name.clone(),
                position,
            });
        }
        if let Some(monster) = start.monster_at(position) {
            return Err(WorldError::PlayerBlocked {
                level: start.name.clone(),
                position,
                occupant: monster.id,
            });
        }

        let mut world = Self {
            levels: collected,
            current,
            player,
            turn: 0,
        };
        world.refresh_visibility();
        Ok(world)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn current_level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current]
    }

    pub fn current_level_name(&self) -> &str {
        &self.levels[self.current].name
    }

    pub fn level(&self, name: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.name == name)
    }

    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Number of turns resolved so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Recomputes the active level's visibility from the player's position.
    pub fn refresh_visibility(&mut self) {
        let origin = self.player.character.position;
        let sight = self.player.character.sight_range;
        self.levels[self.current].recompute_visibility(origin, sight);
    }

    /// Immutable copy of what observers need after a turn.
    pub fn snapshot(&self, status: GameStatus) -> Snapshot {
        Snapshot {
            turn: self.turn,
            level_name: self.current_level_name().to_string(),
            level: self.current_level().clone(),
            player: self.player.clone(),
            status,
        }
    }

    /// Splits the borrow so the active level and the player can be mutated together.
    pub(crate) fn active_mut(&mut self) -> (&mut Level, &mut Player) {
        (&mut self.levels[self.current], &mut self.player)
    }

    /// Switches the active level and places the player on the portal's destination.
    pub(crate) fn travel(&mut self, portal: &Portal) -> Result<(), InvariantViolation> {
        let index = self
            .levels
            .iter()
            .position(|level| level.name == portal.level)
            .ok_or_else(|| InvariantViolation::UnknownLevel {
                name: portal.level.clone(),
            })?;

        self.current = index;
        self.player.character.position = portal.position;
        self.levels[index].last_event = Some(EventKind::Portal);
        Ok(())
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }
}
