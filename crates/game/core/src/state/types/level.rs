use std::collections::HashMap;

use crate::config::GameConfig;
use crate::error::InvariantViolation;
use crate::pathfinding::bfs_floor;

use super::{EventLog, Item, ItemId, Monster, Position, TerrainKind, TileGrid};

/// Link from a tile on one level to a position on another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Portal {
    pub level: String,
    pub position: Position,
}

impl Portal {
    pub fn new(level: impl Into<String>, position: Position) -> Self {
        Self {
            level: level.into(),
            position,
        }
    }
}

/// Kind of the last significant thing that happened on a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Move,
    DoorOpen,
    Attack,
    Portal,
    Pickup,
    Drop,
}

/// One map of the world together with everything on it except the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: String,
    pub grid: TileGrid,
    /// At most one monster per position.
    pub monsters: HashMap<Position, Monster>,
    /// Ground piles; several items may share a position.
    pub items: HashMap<Position, Vec<Item>>,
    pub portals: HashMap<Position, Portal>,
    pub events: EventLog,
    pub last_event: Option<EventKind>,
}

impl Level {
    pub fn new(name: impl Into<String>, grid: TileGrid, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            grid,
            monsters: HashMap::new(),
            items: HashMap::new(),
            portals: HashMap::new(),
            events: EventLog::with_capacity(config.event_log_capacity),
            last_event: None,
        }
    }

    pub fn monster_at(&self, position: Position) -> Option<&Monster> {
        self.monsters.get(&position)
    }

    /// Places a monster on its own position.
    pub fn spawn_monster(&mut self, monster: Monster) -> Result<(), InvariantViolation> {
        let position = monster.character.position;
        if let Some(occupant) = self.monsters.get(&position) {
            return Err(InvariantViolation::TileOccupied {
                position,
                occupant: occupant.id,
            });
        }
        self.monsters.insert(position, monster);
        Ok(())
    }

    pub fn items_at(&self, position: Position) -> &[Item] {
        self.items.get(&position).map_or(&[], Vec::as_slice)
    }

    /// Drops `item` on the ground at `position`.
    pub fn place_item(&mut self, position: Position, mut item: Item) {
        item.position = position;
        self.items.entry(position).or_default().push(item);
    }

    /// Lifts the item with `id` off the ground pile at `position`.
    pub fn take_item(&mut self, position: Position, id: ItemId) -> Option<Item> {
        let pile = self.items.get_mut(&position)?;
        let index = pile.iter().position(|item| item.id == id)?;
        let item = pile.remove(index);
        if pile.is_empty() {
            self.items.remove(&position);
        }
        Some(item)
    }

    pub fn add_portal(&mut self, position: Position, portal: Portal) {
        self.portals.insert(position, portal);
    }

    /// Flips a closed door at `position`. False when there is none.
    pub fn open_door(&mut self, position: Position) -> bool {
        self.grid
            .get_mut(position)
            .is_some_and(|tile| tile.open_door())
    }

    pub fn pending_tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid
            .iter()
            .filter(|(_, tile)| tile.terrain() == TerrainKind::Pending)
            .map(|(position, _)| position)
    }

    /// Fills every `Pending` cell with the terrain of the nearest reachable
    /// floor tile.
    ///
    /// Cells are resolved in row-major order, so later searches can pass over
    /// cells resolved earlier.
    pub fn resolve_pending_terrain(&mut self) -> Result<(), InvariantViolation> {
        let pending: Vec<Position> = self.pending_tiles().collect();
        for position in pending {
            let terrain = bfs_floor(self, position);
            self.grid.resolve_terrain(position, terrain)?;
        }
        Ok(())
    }
}
