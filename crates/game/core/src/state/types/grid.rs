use crate::error::InvariantViolation;

use super::{Position, TerrainKind, Tile};

/// Row-major grid of tiles.
///
/// Bounds follow the first row: a position is in range when
/// `0 <= x < rows[0].len()` and `0 <= y < rows.len()`. Loaders pad every row
/// to the same width.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TileGrid {
    rows: Vec<Vec<Tile>>,
}

impl TileGrid {
    pub fn new(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            rows: vec![vec![tile; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height()
    }

    pub fn get(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }
        self.rows
            .get(position.y as usize)?
            .get(position.x as usize)
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if !self.contains(position) {
            return None;
        }
        self.rows
            .get_mut(position.y as usize)?
            .get_mut(position.x as usize)
    }

    /// Checked lookup for callers that require the position to be on the grid.
    pub fn tile(&self, position: Position) -> Result<&Tile, InvariantViolation> {
        self.get(position)
            .ok_or(InvariantViolation::OutOfGrid { position })
    }

    pub fn tile_mut(&mut self, position: Position) -> Result<&mut Tile, InvariantViolation> {
        self.get_mut(position)
            .ok_or(InvariantViolation::OutOfGrid { position })
    }

    /// Overwrites the tile at `position`. Used while building levels.
    pub fn set(&mut self, position: Position, tile: Tile) -> Result<(), InvariantViolation> {
        *self.tile_mut(position)? = tile;
        Ok(())
    }

    /// Replaces `Pending` terrain at `position`.
    pub fn resolve_terrain(
        &mut self,
        position: Position,
        terrain: TerrainKind,
    ) -> Result<(), InvariantViolation> {
        let tile = self.tile_mut(position)?;
        let previous = tile.terrain();
        if tile.resolve_terrain(terrain) {
            Ok(())
        } else {
            Err(InvariantViolation::TerrainResolution {
                position,
                from: previous,
                to: terrain,
            })
        }
    }

    /// Iterates every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Position::new(x as i32, y as i32), tile))
        })
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> + '_ {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_first_row() {
        let grid = TileGrid::filled(3, 2, Tile::new(TerrainKind::Floor));

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 0)));
        assert!(!grid.contains(Position::new(0, 2)));
        assert!(!grid.contains(Position::new(-1, 0)));
    }

    #[test]
    fn checked_lookup_reports_position() {
        let grid = TileGrid::filled(1, 1, Tile::default());

        let err = grid.tile(Position::new(5, 5)).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::OutOfGrid {
                position: Position::new(5, 5)
            }
        );
    }

    #[test]
    fn resolving_twice_is_rejected() {
        let mut grid = TileGrid::filled(1, 1, Tile::new(TerrainKind::Pending));
        let origin = Position::ORIGIN;

        grid.resolve_terrain(origin, TerrainKind::Floor).unwrap();
        assert!(matches!(
            grid.resolve_terrain(origin, TerrainKind::Wall),
            Err(InvariantViolation::TerrainResolution { .. })
        ));
    }
}
