//! Content factory building a playable world from a content directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow, bail};
use rpg_core::{GameConfig, Level, Player, PlayerTemplate, Portal, Position, World, WorldError};

use crate::loaders::{ContentIds, LoadResult, MapLoader, WorldLinks, WorldLoader};

/// Loads every level and the world linkage from one directory.
///
/// # Directory Structure
///
/// ```text
/// content_dir/
/// ├── world.txt
/// ├── level1.map
/// └── level2.map
/// ```
pub struct ContentFactory {
    content_dir: PathBuf,
    player: PlayerTemplate,
}

impl ContentFactory {
    pub const WORLD_FILE: &'static str = "world.txt";
    pub const MAP_EXTENSION: &'static str = "map";

    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            player: PlayerTemplate::default(),
        }
    }

    /// Overrides the starting stats of the player.
    pub fn with_player(mut self, player: PlayerTemplate) -> Self {
        self.player = player;
        self
    }

    /// Loads all `.map` files, sorted by path so ids are stable between runs.
    pub fn load_levels(&self, config: &GameConfig) -> LoadResult<Vec<(Level, Option<Position>)>> {
        let entries = std::fs::read_dir(&self.content_dir).with_context(|| {
            format!(
                "Failed to read content directory {}",
                self.content_dir.display()
            )
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == Self::MAP_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut ids = ContentIds::new();
        let mut levels = Vec::with_capacity(paths.len());
        for path in paths {
            tracing::debug!(target: "content::loader", path = %path.display(), "loading level");
            let parsed = MapLoader::load(&path, &mut ids, config)?;
            levels.push((parsed.level, parsed.player_start));
        }
        Ok(levels)
    }

    /// Loads `world.txt`.
    pub fn load_links(&self) -> LoadResult<WorldLinks> {
        WorldLoader::load(&self.content_dir.join(Self::WORLD_FILE))
    }

    /// Loads every level, links portals and places the player.
    ///
    /// The player starts on the `@` of the initial level; `@` markers on
    /// other levels are ignored.
    pub fn load_world(&self, config: &GameConfig) -> LoadResult<World> {
        let links = self.load_links()?;
        let loaded = self.load_levels(config)?;
        if loaded.is_empty() {
            bail!(
                "Content directory {} holds no .{} files",
                self.content_dir.display(),
                Self::MAP_EXTENSION
            );
        }

        let mut start = None;
        let mut levels: Vec<Level> = Vec::with_capacity(loaded.len());
        for (level, player_start) in loaded {
            if level.name == links.initial_level {
                start = Some(player_start);
            }
            levels.push(level);
        }
        let Some(start) = start else {
            return Err(WorldError::UnknownLevel {
                name: links.initial_level,
            })
            .context("World linkage is inconsistent");
        };

        for link in &links.portals {
            let level = levels
                .iter_mut()
                .find(|level| level.name == link.from)
                .ok_or_else(|| anyhow!("Portal source level '{}' was not loaded", link.from))?;
            level.add_portal(link.at, Portal::new(link.to.clone(), link.destination));
        }

        let start = start.ok_or_else(|| {
            anyhow!(
                "Initial level '{}' has no player start marker '@'",
                links.initial_level
            )
        })?;
        let player: Player = self.player.to_player(start);

        let world = World::new(levels, &links.initial_level, player)
            .context("World linkage is inconsistent")?;
        tracing::info!(
            target: "content::loader",
            levels = world.levels().count(),
            initial = %links.initial_level,
            portals = links.portals.len(),
            "world loaded"
        );
        Ok(world)
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}
