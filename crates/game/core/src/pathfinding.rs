//! Grid searches used by monster AI and level loading.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::state::{Level, Position, TerrainKind};

/// Shortest 4-connected path from `start` to `goal` with unit step cost.
///
/// The path includes both endpoints. Intermediate tiles and the goal must pass
/// [`Level::can_walk`]; the start tile is never checked, so a monster can plan
/// from its own cell. Returns `None` when the goal cannot be reached.
pub fn find_path(level: &Level, start: Position, goal: Position) -> Option<Vec<Position>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut frontier = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut cost_so_far: HashMap<Position, i32> = HashMap::new();

    frontier.push(Reverse((start.manhattan_distance(goal), start)));
    cost_so_far.insert(start, 0);

    while let Some(Reverse((_, current))) = frontier.pop() {
        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }

        let current_cost = cost_so_far.get(&current).copied().unwrap_or_default();
        for next in level.walkable_neighbors(current) {
            let new_cost = current_cost + 1;
            let improved = cost_so_far.get(&next).is_none_or(|&known| new_cost < known);
            if improved {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, current);
                frontier.push(Reverse((new_cost + next.manhattan_distance(goal), next)));
            }
        }
    }

    None
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Terrain of the nearest `Floor` tile reachable from `start`.
///
/// Expands breadth-first through walkable neighbours. Falls back to `Floor`
/// when the search is exhausted without finding one.
pub fn bfs_floor(level: &Level, start: Position) -> TerrainKind {
    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);

    while let Some(current) = frontier.pop_front() {
        if let Some(tile) = level.grid.get(current)
            && tile.terrain() == TerrainKind::Floor
        {
            return tile.terrain();
        }

        for next in level.walkable_neighbors(current) {
            if visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    TerrainKind::Floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Tile, TileGrid};

    fn level_from(rows: &[&str]) -> Level {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|glyph| match glyph {
                        '#' => Tile::new(TerrainKind::Wall),
                        '?' => Tile::new(TerrainKind::Pending),
                        _ => Tile::new(TerrainKind::Floor),
                    })
                    .collect()
            })
            .collect();
        Level::new("test", TileGrid::new(rows), &GameConfig::default())
    }

    fn assert_connected(level: &Level, path: &[Position]) {
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
            assert!(level.can_walk(pair[1]));
        }
    }

    #[test]
    fn open_room_path_has_manhattan_length() {
        let level = level_from(&["......", "......", "......", "......"]);
        let start = Position::new(0, 0);
        let goal = Position::new(5, 3);

        let path = find_path(&level, start, goal).unwrap();

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_eq!(path.len() as i32 - 1, start.manhattan_distance(goal));
        assert_connected(&level, &path);
    }

    #[test]
    fn path_routes_around_walls_with_shortest_length() {
        let level = level_from(&[
            ".....", //
            ".###.", //
            "...#.", //
            "####.", //
        ]);
        let start = Position::new(0, 2);
        let goal = Position::new(4, 3);

        let path = find_path(&level, start, goal).unwrap();

        // Up two, right four, down three.
        assert_eq!(path.len() - 1, 9);
        assert_connected(&level, &path);
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let level = level_from(&[
            ".....", //
            "..###", //
            "..#.#", //
            "..###", //
        ]);

        assert_eq!(
            find_path(&level, Position::new(0, 0), Position::new(3, 2)),
            None
        );
    }

    #[test]
    fn start_equal_to_goal_is_a_single_step_path() {
        let level = level_from(&["..."]);
        let start = Position::new(1, 0);

        assert_eq!(find_path(&level, start, start), Some(vec![start]));
    }

    #[test]
    fn bfs_finds_nearest_floor_through_pending_cells() {
        let level = level_from(&["#???.", "#####"]);

        assert_eq!(bfs_floor(&level, Position::new(1, 0)), TerrainKind::Floor);
    }

    #[test]
    fn bfs_defaults_to_floor_when_enclosed() {
        let level = level_from(&["###", "#?#", "###"]);

        assert_eq!(bfs_floor(&level, Position::new(1, 1)), TerrainKind::Floor);
    }
}
