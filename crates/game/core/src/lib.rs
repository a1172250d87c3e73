//! Deterministic simulation core for a turn-based tile-grid RPG.
//!
//! `rpg-core` owns the world data model (levels, tiles, characters, items),
//! the spatial queries, pathfinding and field of view built on it, and the
//! turn resolver. It performs no I/O. All state mutation after construction
//! flows through [`engine::GameEngine`]; the runtime and content crates depend
//! on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod pathfinding;
pub mod spatial;
pub mod state;
pub mod visibility;

pub use action::{CardinalDirection, Input};
pub use combat::{AttackReport, attack, compute_damage};
pub use config::GameConfig;
pub use engine::{ActionOutcome, GameEngine, TurnOutcome};
pub use env::{ItemArchetype, MonsterKind, MonsterTemplate, PlayerTemplate};
pub use error::{ErrorSeverity, GameError, InvariantViolation, WorldError};
pub use pathfinding::{bfs_floor, find_path};
pub use state::{
    Character, Equipment, EventKind, EventLog, GameStatus, InventoryState, Item, ItemId,
    ItemKind, Level, Monster, MonsterId, ObserverId, OverlayKind, Player, Portal, Position,
    Snapshot, TerrainKind, Tile, TileFlags, TileGrid, World,
};
pub use visibility::Line;
