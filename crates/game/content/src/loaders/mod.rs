//! Loaders turning content files into core types.

pub mod factory;
pub mod map;
pub mod world;

pub use factory::ContentFactory;
pub use map::{MapLoader, ParsedLevel};
pub use world::{PortalLink, WorldLinks, WorldLoader};

use std::path::Path;

use rpg_core::{ItemId, MonsterId};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Id counters shared by every level loaded into one world.
#[derive(Clone, Debug, Default)]
pub struct ContentIds {
    next_item: u32,
    next_monster: u32,
}

impl ContentIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_item(&mut self) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        id
    }

    pub fn next_monster(&mut self) -> MonsterId {
        let id = MonsterId(self.next_monster);
        self.next_monster += 1;
        id
    }
}
