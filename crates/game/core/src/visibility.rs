//! Field of view.
//!
//! Sight is cast as Bresenham rays from the viewer to every cell inside the
//! sight circle. A ray marks each tile it crosses and stops after the first
//! tile that blocks sight, so walls and closed doors are themselves visible.

use crate::state::{Level, Position};

/// Bresenham line from `start` to `end`, both endpoints included.
#[derive(Clone, Debug)]
pub struct Line {
    steep: bool,
    x: i32,
    y: i32,
    end_x: i32,
    x_step: i32,
    y_step: i32,
    delta_x: i32,
    delta_y: i32,
    error: i32,
    done: bool,
}

impl Line {
    pub fn new(start: Position, end: Position) -> Self {
        let steep = (end.y - start.y).abs() > (end.x - start.x).abs();
        let (start, end) = if steep {
            (Position::new(start.y, start.x), Position::new(end.y, end.x))
        } else {
            (start, end)
        };

        Self {
            steep,
            x: start.x,
            y: start.y,
            end_x: end.x,
            x_step: if start.x > end.x { -1 } else { 1 },
            y_step: if start.y >= end.y { -1 } else { 1 },
            delta_x: (end.x - start.x).abs(),
            delta_y: (end.y - start.y).abs(),
            error: 0,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let position = if self.steep {
            Position::new(self.y, self.x)
        } else {
            Position::new(self.x, self.y)
        };

        if self.x == self.end_x {
            self.done = true;
        } else {
            self.x += self.x_step;
            self.error += self.delta_y;
            if 2 * self.error >= self.delta_x {
                self.y += self.y_step;
                self.error -= self.delta_x;
            }
        }

        Some(position)
    }
}

impl Level {
    /// Rebuilds the `VISIBLE` flags for a viewer at `origin`.
    ///
    /// Every `VISIBLE` flag is cleared first; `SEEN` flags are only ever added.
    pub fn recompute_visibility(&mut self, origin: Position, sight_range: i32) {
        for tile in self.grid.tiles_mut() {
            tile.clear_visible();
        }

        let radius_squared = sight_range * sight_range;
        for y in origin.y - sight_range..=origin.y + sight_range {
            for x in origin.x - sight_range..=origin.x + sight_range {
                let target = Position::new(x, y);
                if origin.distance_squared(target) <= radius_squared {
                    self.cast_ray(origin, target);
                }
            }
        }
    }

    fn cast_ray(&mut self, origin: Position, target: Position) {
        for position in Line::new(origin, target) {
            let blocks_sight = !self.can_see_through(position);
            match self.grid.get_mut(position) {
                Some(tile) => tile.mark_visible(),
                None => return,
            }
            if blocks_sight {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{OverlayKind, TerrainKind, Tile, TileGrid};

    fn line(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
        Line::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
            .map(|position| (position.x, position.y))
            .collect()
    }

    #[test]
    fn line_includes_both_endpoints() {
        assert_eq!(line((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(line((2, 2), (2, 2)), vec![(2, 2)]);
    }

    #[test]
    fn line_handles_steep_and_reversed_directions() {
        assert_eq!(line((0, 0), (1, 3)), vec![(0, 0), (0, 1), (1, 2), (1, 3)]);
        assert_eq!(line((3, 1), (0, 0)), vec![(3, 1), (2, 1), (1, 0), (0, 0)]);
        assert_eq!(line((0, 3), (0, 0)), vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
    }

    fn room() -> Level {
        // .......
        // ...#...
        // .......
        // ...|...
        let mut grid = TileGrid::filled(7, 4, Tile::new(TerrainKind::Floor));
        grid.set(Position::new(3, 1), Tile::new(TerrainKind::Wall))
            .unwrap();
        grid.set(
            Position::new(3, 3),
            Tile::with_overlay(TerrainKind::Floor, OverlayKind::ClosedDoor),
        )
        .unwrap();
        Level::new("room", grid, &GameConfig::default())
    }

    fn visible(level: &Level) -> Vec<Position> {
        level
            .grid
            .iter()
            .filter(|(_, tile)| tile.is_visible())
            .map(|(position, _)| position)
            .collect()
    }

    #[test]
    fn walls_are_visible_but_hide_what_lies_behind() {
        let mut level = room();
        level.recompute_visibility(Position::new(3, 0), 3);

        let wall = level.grid.get(Position::new(3, 1)).unwrap();
        assert!(wall.is_visible());
        assert!(!level.grid.get(Position::new(3, 2)).unwrap().is_visible());
        assert!(level.grid.get(Position::new(2, 0)).unwrap().is_visible());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut level = room();
        level.recompute_visibility(Position::new(1, 2), 4);
        let first = visible(&level);

        level.recompute_visibility(Position::new(1, 2), 4);

        assert_eq!(visible(&level), first);
        assert!(!first.is_empty());
    }

    #[test]
    fn seen_flags_are_monotonic_and_visible_flags_reset() {
        let mut level = room();
        level.recompute_visibility(Position::new(0, 0), 1);
        let seen_before: Vec<Position> = level
            .grid
            .iter()
            .filter(|(_, tile)| tile.is_seen())
            .map(|(position, _)| position)
            .collect();

        level.recompute_visibility(Position::new(6, 3), 1);

        for position in seen_before {
            let tile = level.grid.get(position).unwrap();
            assert!(tile.is_seen(), "{position} lost its seen flag");
            assert!(!tile.is_visible(), "{position} is still visible");
        }
    }

    #[test]
    fn rays_are_clipped_at_the_border() {
        let mut level = room();
        level.recompute_visibility(Position::new(0, 0), 10);

        assert!(level.grid.get(Position::new(0, 3)).unwrap().is_visible());
    }

    #[test]
    fn zero_sight_range_sees_only_the_origin() {
        let mut level = room();
        level.recompute_visibility(Position::new(5, 2), 0);

        assert_eq!(visible(&level), vec![Position::new(5, 2)]);
    }
}
