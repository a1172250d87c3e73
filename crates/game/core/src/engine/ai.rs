//! Monster AI: chase the player along the shortest path and strike on contact.

use crate::combat;
use crate::pathfinding::find_path;
use crate::state::{Level, Monster, MonsterId, Player, Position, World};

/// Gives every monster on the active level one update.
///
/// Monsters are visited in id order. Each is lifted out of the position map
/// while it acts and reinserted under its new position, so a monster that
/// moves is never picked up a second time. Stops early once the player dies.
pub(super) fn update_monsters(world: &mut World) -> usize {
    let (level, player) = world.active_mut();

    let mut roster: Vec<(MonsterId, Position)> = level
        .monsters
        .iter()
        .map(|(position, monster)| (monster.id, *position))
        .collect();
    roster.sort_unstable();

    let mut updated = 0;
    for (id, position) in roster {
        let Some(mut monster) = level.monsters.remove(&position) else {
            continue;
        };
        if monster.id != id {
            level.monsters.insert(position, monster);
            continue;
        }

        update(level, player, &mut monster);
        level.monsters.insert(monster.character.position, monster);
        updated += 1;

        if !player.character.is_alive() {
            break;
        }
    }
    updated
}

fn update(level: &mut Level, player: &mut Player, monster: &mut Monster) {
    let character = &mut monster.character;
    character.action_points += character.speed;

    let Some(path) = find_path(level, character.position, player.character.position) else {
        character.action_points -= character.speed;
        return;
    };
    follow_path(level, player, monster, &path);
}

/// Walks `path` (starting at the monster's own tile) one whole action point
/// per step. Reaching the player's tile attacks and ends the walk; a tile held
/// by another monster costs the step and ends the walk in place.
fn follow_path(level: &mut Level, player: &mut Player, monster: &mut Monster, path: &[Position]) {
    let character = &mut monster.character;
    let goal = player.character.position;

    // Whole action points only, sampled once before acting.
    let steps = character.action_points.trunc().max(0.0) as usize;
    for &next in path.iter().skip(1).take(steps) {
        character.action_points -= 1.0;

        if next == goal {
            level
                .events
                .push(format!("{} attacks {}", character.name, player.character.name));
            combat::attack(&mut level.events, character, &mut player.character);
            break;
        }
        if level.monsters.contains_key(&next) {
            break;
        }
        character.position = next;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::follow_path;
    use crate::action::Input;
    use crate::env::MonsterKind;
    use crate::state::{GameStatus, MonsterId, Position};

    #[test]
    fn monsters_spend_whole_action_points_walking_the_path() {
        let mut level = level("hall", &["#.......#"]);
        spawn(&mut level, MonsterKind::Bat, 0, 7, 0);
        let mut world = world(vec![level], player_at(1, 0));

        world.resolve(&Input::Search).unwrap();
        let bat = world.current_level().monster_at(Position::new(6, 0)).unwrap();
        assert!((bat.character.action_points - 0.5).abs() < 1e-9);

        world.resolve(&Input::Search).unwrap();
        let bat = world.current_level().monster_at(Position::new(4, 0)).unwrap();
        assert!(bat.character.action_points.abs() < 1e-9);
        assert_eq!(world.current_level().monsters.len(), 1);
    }

    #[test]
    fn monster_attack_hurts_only_the_player() {
        let mut level = level("hall", &["#...#"]);
        spawn(&mut level, MonsterKind::Spider, 0, 2, 0);
        let mut world = world(vec![level], player_at(1, 0));

        world.resolve(&Input::Search).unwrap();

        assert_eq!(world.player().character.hitpoints, 15);
        let level = world.current_level();
        let spider = level.monster_at(Position::new(2, 0)).unwrap();
        assert_eq!(spider.character.hitpoints, 100);
        // One point for the step onto the player, one for the blow itself.
        assert!((spider.character.action_points - (1.1 - 2.0)).abs() < 1e-9);
        assert_eq!(
            level.events.iter().collect::<Vec<_>>(),
            vec!["Spider attacks Player", "Spider attacked Player for 5"]
        );
    }

    #[test]
    fn unreachable_player_leaves_action_points_unchanged() {
        let mut level = level("split", &["#.#.#"]);
        spawn(&mut level, MonsterKind::Bat, 0, 3, 0);
        let mut world = world(vec![level], player_at(1, 0));

        world.resolve(&Input::Search).unwrap();

        let bat = world.current_level().monster_at(Position::new(3, 0)).unwrap();
        assert_eq!(bat.character.action_points, 0.0);
    }

    #[test]
    fn lethal_monster_attack_ends_the_game() {
        let mut level = level("lair", &["#...#"]);
        spawn(&mut level, MonsterKind::Dragon, 0, 2, 0);
        level
            .monsters
            .get_mut(&Position::new(2, 0))
            .unwrap()
            .character
            .action_points = 0.5;
        let mut world = world(vec![level], player_at(1, 0));

        let outcome = world.resolve(&Input::Search).unwrap();

        assert_eq!(outcome.status, GameStatus::PlayerDead);
        assert!(!world.player().character.is_alive());
        assert_eq!(world.current_level().events.latest(), Some("Dragon killed Player"));
    }

    #[test]
    fn each_monster_is_updated_exactly_once() {
        let mut level = level(
            "room",
            &[
                "#########", //
                "#.......#", //
                "#.......#", //
                "#########", //
            ],
        );
        spawn(&mut level, MonsterKind::Bat, 0, 5, 1);
        spawn(&mut level, MonsterKind::Bat, 1, 7, 2);
        let mut world = world(vec![level], player_at(1, 1));

        let outcome = world.resolve(&Input::Search).unwrap();

        assert_eq!(outcome.monsters_updated, 2);
        let level = world.current_level();
        assert_eq!(level.monsters.len(), 2);
        for monster in level.monsters.values() {
            assert!((monster.character.action_points - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn monster_walled_in_by_another_monster_stays_put() {
        let mut level = level("corridor", &["#....#"]);
        spawn(&mut level, MonsterKind::Bat, 0, 4, 0);
        spawn(&mut level, MonsterKind::Bat, 1, 3, 0);
        level
            .monsters
            .get_mut(&Position::new(4, 0))
            .unwrap()
            .character
            .action_points = 1.5;
        let mut world = world(vec![level], player_at(1, 0));

        world.resolve(&Input::Search).unwrap();

        let level = world.current_level();
        let far = level.monster_at(Position::new(4, 0)).unwrap();
        assert_eq!(far.id, MonsterId(0));
        // No route past the other bat: the turn passes without spending.
        assert!((far.character.action_points - 1.5).abs() < 1e-9);
        let near = level.monster_at(Position::new(2, 0)).unwrap();
        assert_eq!(near.id, MonsterId(1));
        assert_eq!(level.monsters.len(), 2);
    }

    #[test]
    fn step_onto_an_occupied_tile_costs_a_point_and_ends_the_walk() {
        let mut level = level("corridor", &["#.....#"]);
        spawn(&mut level, MonsterKind::Bat, 1, 3, 0);
        let mut player = player_at(1, 0);
        let mut bat = MonsterKind::Bat.spawn(MonsterId(0), Position::new(5, 0));
        bat.character.action_points = 3.0;
        let path = [
            Position::new(5, 0),
            Position::new(4, 0),
            Position::new(3, 0),
            Position::new(2, 0),
        ];

        follow_path(&mut level, &mut player, &mut bat, &path);

        assert_eq!(bat.character.position, Position::new(4, 0));
        assert!((bat.character.action_points - 1.0).abs() < 1e-9);
        assert_eq!(player.character.hitpoints, 20);
        assert!(level.events.is_empty());
    }
}
