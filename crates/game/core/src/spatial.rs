//! Spatial predicates over a level.

use arrayvec::ArrayVec;

use crate::action::CardinalDirection;
use crate::state::{Level, Position};

impl Level {
    /// Bounds are taken from the first row; every row has the same width.
    pub fn in_range(&self, position: Position) -> bool {
        self.grid.contains(position)
    }

    /// Whether a character could step onto `position`.
    ///
    /// Blocked by walls, blank cells, closed doors and monsters. The player's
    /// own position is not checked; callers resolve that separately.
    pub fn can_walk(&self, position: Position) -> bool {
        self.grid.get(position).is_some_and(|tile| tile.is_open())
            && !self.monsters.contains_key(&position)
    }

    /// Whether light passes through `position`. Characters never block sight.
    pub fn can_see_through(&self, position: Position) -> bool {
        self.grid.get(position).is_some_and(|tile| tile.is_open())
    }

    /// Walkable 4-neighbours of `position`, ordered right, left, up, down.
    pub fn walkable_neighbors(&self, position: Position) -> ArrayVec<Position, 4> {
        CardinalDirection::ALL
            .into_iter()
            .map(|direction| position.step(direction))
            .filter(|&neighbor| self.can_walk(neighbor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::MonsterKind;
    use crate::state::{MonsterId, OverlayKind, TerrainKind, Tile, TileGrid};

    fn sample_level() -> Level {
        // #....
        // #.|.
        // ##/..
        let mut grid = TileGrid::filled(5, 3, Tile::new(TerrainKind::Floor));
        for position in [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
        ] {
            grid.set(position, Tile::new(TerrainKind::Wall)).unwrap();
        }
        grid.set(Position::new(4, 1), Tile::new(TerrainKind::Blank))
            .unwrap();
        grid.set(
            Position::new(2, 1),
            Tile::with_overlay(TerrainKind::Floor, OverlayKind::ClosedDoor),
        )
        .unwrap();
        grid.set(
            Position::new(2, 2),
            Tile::with_overlay(TerrainKind::Floor, OverlayKind::OpenDoor),
        )
        .unwrap();

        let mut level = Level::new("sample", grid, &GameConfig::default());
        level
            .spawn_monster(MonsterKind::Bat.spawn(MonsterId(0), Position::new(3, 2)))
            .unwrap();
        level
    }

    #[test]
    fn can_walk_predicate_table() {
        let level = sample_level();
        let cases = [
            (Position::new(-1, 0), false, "out of range left"),
            (Position::new(5, 0), false, "out of range right"),
            (Position::new(1, 3), false, "out of range below"),
            (Position::new(0, 0), false, "wall"),
            (Position::new(4, 1), false, "blank"),
            (Position::new(2, 1), false, "closed door"),
            (Position::new(3, 2), false, "monster"),
            (Position::new(2, 2), true, "open door"),
            (Position::new(1, 1), true, "floor"),
        ];

        for (position, expected, label) in cases {
            assert_eq!(level.can_walk(position), expected, "{label}");
        }
    }

    #[test]
    fn monsters_do_not_block_sight() {
        let level = sample_level();

        assert!(level.can_see_through(Position::new(3, 2)));
        assert!(!level.can_see_through(Position::new(2, 1)));
        assert!(!level.can_see_through(Position::new(4, 1)));
        assert!(level.can_see_through(Position::new(2, 2)));
    }

    #[test]
    fn neighbors_are_filtered_and_ordered() {
        let level = sample_level();

        let neighbors = level.walkable_neighbors(Position::new(2, 0));
        assert_eq!(
            neighbors.as_slice(),
            &[Position::new(3, 0), Position::new(1, 0)]
        );

        let neighbors = level.walkable_neighbors(Position::new(3, 1));
        assert_eq!(neighbors.as_slice(), &[Position::new(3, 0)]);
    }
}
