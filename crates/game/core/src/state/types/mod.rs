pub mod actor;
pub mod common;
pub mod grid;
pub mod item;
pub mod level;
pub mod log;
pub mod tile;

pub use actor::{Character, Equipment, InventoryState, Monster, Player};
pub use common::{ItemId, MonsterId, ObserverId, Position};
pub use grid::TileGrid;
pub use item::{Item, ItemKind};
pub use level::{EventKind, Level, Portal};
pub use log::EventLog;
pub use tile::{OverlayKind, TerrainKind, Tile, TileFlags};
