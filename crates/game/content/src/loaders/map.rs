//! ASCII level loader.
//!
//! Each line of a `.map` file is one row of tiles. Rows shorter than the
//! longest one are padded with blank cells. Glyphs for characters, items and
//! overlays sit on `Pending` terrain, which is filled in from the nearest
//! floor once the whole level is parsed.

use std::path::Path;

use anyhow::{Context, anyhow, bail};
use rpg_core::{
    GameConfig, Item, ItemArchetype, Level, Monster, MonsterKind, OverlayKind, Position,
    TerrainKind, Tile, TileGrid,
};

use crate::loaders::{ContentIds, LoadResult, read_file};

/// A parsed level and the player start marker found on it, if any.
#[derive(Clone, Debug)]
pub struct ParsedLevel {
    pub level: Level,
    pub player_start: Option<Position>,
}

/// Loader for `.map` level files.
pub struct MapLoader;

impl MapLoader {
    /// Loads a level from `path`, naming it after the file stem.
    pub fn load(path: &Path, ids: &mut ContentIds, config: &GameConfig) -> LoadResult<ParsedLevel> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| anyhow!("Map file {} has no usable name", path.display()))?;
        let content = read_file(path)?;

        Self::parse(name, &content, ids, config)
            .with_context(|| format!("Failed to load map {}", path.display()))
    }

    /// Parses map text into a level called `name`.
    pub fn parse(
        name: &str,
        content: &str,
        ids: &mut ContentIds,
        config: &GameConfig,
    ) -> LoadResult<ParsedLevel> {
        let lines: Vec<&str> = content.lines().collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        if width == 0 {
            bail!("Map '{name}' is empty");
        }

        let mut rows = vec![vec![Tile::new(TerrainKind::Blank); width]; lines.len()];
        let mut monsters: Vec<Monster> = Vec::new();
        let mut items: Vec<Item> = Vec::new();
        let mut player_start = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                rows[y][x] = match glyph {
                    ' ' | '\t' | '\r' => Tile::new(TerrainKind::Blank),
                    '#' => Tile::new(TerrainKind::Wall),
                    '.' => Tile::new(TerrainKind::Floor),
                    '|' => Tile::with_overlay(TerrainKind::Pending, OverlayKind::ClosedDoor),
                    '/' => Tile::with_overlay(TerrainKind::Pending, OverlayKind::OpenDoor),
                    'u' => Tile::with_overlay(TerrainKind::Pending, OverlayKind::UpStair),
                    'd' => Tile::with_overlay(TerrainKind::Pending, OverlayKind::DownStair),
                    '@' => {
                        player_start = Some(position);
                        Tile::new(TerrainKind::Pending)
                    }
                    other => {
                        if let Some(kind) = MonsterKind::from_glyph(other) {
                            monsters.push(kind.spawn(ids.next_monster(), position));
                        } else if let Some(archetype) = ItemArchetype::from_glyph(other) {
                            items.push(archetype.create(ids.next_item(), position));
                        } else {
                            bail!(
                                "Unrecognised glyph '{other}' in map '{name}' at row {}, column {}",
                                y + 1,
                                x + 1
                            );
                        }
                        Tile::new(TerrainKind::Pending)
                    }
                };
            }
        }

        let mut level = Level::new(name, TileGrid::new(rows), config);
        for monster in monsters {
            level.spawn_monster(monster)?;
        }
        for item in items {
            level.place_item(item.position, item);
        }
        level.resolve_pending_terrain()?;

        Ok(ParsedLevel {
            level,
            player_start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str, content: &str) -> ParsedLevel {
        MapLoader::parse(name, content, &mut ContentIds::new(), &GameConfig::default()).unwrap()
    }

    #[test]
    fn parses_terrain_overlays_and_entities() {
        let parsed = parse(
            "crypt",
            "#####\n\
             #@.S#\n\
             #|s.#\n\
             #####",
        );
        let level = &parsed.level;

        assert_eq!(level.name, "crypt");
        assert_eq!(parsed.player_start, Some(Position::new(1, 1)));
        assert_eq!(level.grid.width(), 5);
        assert_eq!(level.grid.height(), 4);

        let door = level.grid.get(Position::new(1, 2)).unwrap();
        assert!(door.is_closed_door());
        assert_eq!(door.terrain(), TerrainKind::Floor);

        let spider = level.monster_at(Position::new(3, 1)).unwrap();
        assert_eq!(spider.kind, MonsterKind::Spider);

        let pile = level.items_at(Position::new(2, 2));
        assert_eq!(pile.len(), 1);
        assert_eq!(pile[0].name, "Sword");
        assert_eq!(pile[0].power, 2.0);
    }

    #[test]
    fn no_pending_terrain_survives_loading() {
        let parsed = parse("pending", "#####\n#@BD#\n#hud#\n#####");

        assert_eq!(parsed.level.pending_tiles().count(), 0);
        assert_eq!(
            parsed.level.grid.get(Position::new(1, 1)).unwrap().terrain(),
            TerrainKind::Floor
        );
    }

    #[test]
    fn short_rows_are_padded_with_blank_cells() {
        let parsed = parse("ragged", "#####\n#..#\n###");
        let grid = &parsed.level.grid;

        assert!(grid.rows().iter().all(|row| row.len() == 5));
        assert_eq!(
            grid.get(Position::new(4, 1)).unwrap().terrain(),
            TerrainKind::Blank
        );
        assert_eq!(
            grid.get(Position::new(3, 2)).unwrap().terrain(),
            TerrainKind::Blank
        );
    }

    #[test]
    fn unknown_glyph_reports_its_location() {
        let error = MapLoader::parse(
            "broken",
            "###\n#?#\n###",
            &mut ContentIds::new(),
            &GameConfig::default(),
        )
        .unwrap_err();

        let message = error.to_string();
        assert!(message.contains("'?'"), "{message}");
        assert!(message.contains("row 2, column 2"), "{message}");
    }

    #[test]
    fn ids_are_unique_across_levels_sharing_counters() {
        let mut ids = ContentIds::new();
        let config = GameConfig::default();
        let first = MapLoader::parse("a", "#s.B#", &mut ids, &config).unwrap();
        let second = MapLoader::parse("b", "#h.B#", &mut ids, &config).unwrap();

        let sword = first.level.items_at(Position::new(1, 0))[0].id;
        let helmet = second.level.items_at(Position::new(1, 0))[0].id;
        assert_ne!(sword, helmet);

        let bat_a = first.level.monster_at(Position::new(3, 0)).unwrap().id;
        let bat_b = second.level.monster_at(Position::new(3, 0)).unwrap().id;
        assert_ne!(bat_a, bat_b);
    }

    #[test]
    fn empty_map_is_rejected() {
        let result = MapLoader::parse("void", "", &mut ContentIds::new(), &GameConfig::default());

        assert!(result.is_err());
    }
}
