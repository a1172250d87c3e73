//! World linkage loader.
//!
//! `world.txt` is a small comma-separated file. The first record names the
//! starting level; every following record is a portal:
//!
//! ```text
//! level1
//! level1, 10, 3, level2, 4, 5
//! level2, 4, 4, level1, 10, 4
//! ```

use std::path::Path;

use anyhow::{Context, anyhow, bail};
use rpg_core::Position;

use crate::loaders::{LoadResult, read_file};

/// One portal: stepping onto `at` on level `from` lands on `destination` on level `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalLink {
    pub from: String,
    pub at: Position,
    pub to: String,
    pub destination: Position,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldLinks {
    pub initial_level: String,
    pub portals: Vec<PortalLink>,
}

/// Loader for the world linkage file.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<WorldLinks> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load world file {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<WorldLinks> {
        let mut records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| (index + 1, split_record(line)));

        let (_, first) = records
            .next()
            .ok_or_else(|| anyhow!("World file names no starting level"))?;
        let initial_level = first
            .first()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow!("World file names no starting level"))?
            .to_string();

        let mut portals = Vec::new();
        for (line, fields) in records {
            let [from, x, y, to, dest_x, dest_y] = fields.as_slice() else {
                bail!(
                    "Line {line}: expected 6 fields (from, x, y, to, x, y), found {}",
                    fields.len()
                );
            };
            portals.push(PortalLink {
                from: from.to_string(),
                at: Position::new(parse_coordinate(line, x)?, parse_coordinate(line, y)?),
                to: to.to_string(),
                destination: Position::new(
                    parse_coordinate(line, dest_x)?,
                    parse_coordinate(line, dest_y)?,
                ),
            });
        }

        Ok(WorldLinks {
            initial_level,
            portals,
        })
    }
}

fn split_record(line: &str) -> Vec<&str> {
    line.split(',').map(|field| field.trim()).collect()
}

fn parse_coordinate(line: usize, field: &str) -> LoadResult<i32> {
    field
        .parse()
        .with_context(|| format!("Line {line}: '{field}' is not a coordinate"))
}
