//! Player movement: portals, bump attacks, walking and doors.

use super::ActionOutcome;
use crate::action::CardinalDirection;
use crate::combat;
use crate::error::InvariantViolation;
use crate::state::{EventKind, World};

/// Resolves a directional input.
///
/// Checks, in order: a portal on the target tile, a monster on it, whether
/// it can be walked onto, and whether it holds a closed door. The first match
/// wins; otherwise nothing happens.
pub(super) fn step(
    world: &mut World,
    direction: CardinalDirection,
) -> Result<ActionOutcome, InvariantViolation> {
    let target = world.player().character.position.step(direction);

    if let Some(portal) = world.current_level().portals.get(&target).cloned() {
        world.travel(&portal)?;
        return Ok(ActionOutcome::Traveled {
            level: portal.level,
            position: portal.position,
        });
    }

    let (level, player) = world.active_mut();

    if let Some(mut monster) = level.monsters.remove(&target) {
        let report = combat::attack(
            &mut level.events,
            &mut player.character,
            &mut monster.character,
        );
        level.last_event = Some(EventKind::Attack);

        let id = monster.id;
        if report.killed {
            for item in monster.character.strip_belongings() {
                level.place_item(target, item);
            }
        } else {
            level.monsters.insert(target, monster);
        }
        return Ok(ActionOutcome::Attacked { target: id, report });
    }

    if level.can_walk(target) {
        player.character.position = target;
        level.last_event = Some(EventKind::Move);
        world.refresh_visibility();
        return Ok(ActionOutcome::Moved { to: target });
    }

    if level.open_door(target) {
        level.last_event = Some(EventKind::DoorOpen);
        world.refresh_visibility();
        return Ok(ActionOutcome::DoorOpened { at: target });
    }

    Ok(ActionOutcome::Blocked)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::action::Input;
    use crate::env::{ItemArchetype, MonsterKind};
    use crate::state::{ItemId, MonsterId, Position};

    #[test]
    fn walking_moves_the_player_and_updates_sight() {
        let level = level("hall", &["#.....#"]);
        let mut world = world(vec![level], player_at(1, 0));

        world.resolve(&Input::Right).unwrap();

        assert_eq!(world.player().character.position, Position::new(2, 0));
        let level = world.current_level();
        assert_eq!(level.last_event, Some(EventKind::Move));
        assert!(level.grid.get(Position::new(2, 0)).unwrap().is_visible());
        assert!(level.events.is_empty());
    }

    #[test]
    fn wall_bump_changes_nothing() {
        let level = level("hall", &["#..#"]);
        let mut world = world(vec![level], player_at(1, 0));

        let outcome = world.resolve(&Input::Left).unwrap();

        assert_eq!(outcome.action, ActionOutcome::Blocked);
        assert_eq!(world.player().character.position, Position::new(1, 0));
        assert_eq!(world.current_level().last_event, None);
    }

    #[test]
    fn edge_of_grid_is_a_no_op() {
        let level = level("hall", &[".."]);
        let mut world = world(vec![level], player_at(0, 0));

        let outcome = world.resolve(&Input::Up).unwrap();

        assert_eq!(outcome.action, ActionOutcome::Blocked);
        assert_eq!(world.player().character.position, Position::new(0, 0));
    }

    #[test]
    fn bumping_a_closed_door_opens_it_without_moving() {
        let level = level("hall", &["#.|.#"]);
        let mut world = world(vec![level], player_at(1, 0));
        assert!(!world.current_level().grid.get(Position::new(3, 0)).unwrap().is_visible());

        let outcome = world.resolve(&Input::Right).unwrap();

        assert_eq!(outcome.action, ActionOutcome::DoorOpened { at: Position::new(2, 0) });
        assert_eq!(world.player().character.position, Position::new(1, 0));
        let level = world.current_level();
        assert_eq!(level.last_event, Some(EventKind::DoorOpen));
        assert!(!level.grid.get(Position::new(2, 0)).unwrap().is_closed_door());
        assert!(level.grid.get(Position::new(3, 0)).unwrap().is_visible());
    }

    #[test]
    fn portal_transit_costs_nothing_and_logs_nothing() {
        let mut upper = level("upper", &["#...#"]);
        let lower = level("lower", &["#....#", "#....#"]);
        link(&mut upper, (2, 0), "lower", (3, 1));
        let mut world = world(vec![upper, lower], player_at(1, 0));
        let action_points = world.player().character.action_points;

        let outcome = world.resolve(&Input::Right).unwrap();

        assert_eq!(
            outcome.action,
            ActionOutcome::Traveled {
                level: "lower".to_string(),
                position: Position::new(3, 1),
            }
        );
        assert_eq!(world.current_level_name(), "lower");
        assert_eq!(world.player().character.position, Position::new(3, 1));
        assert_eq!(world.player().character.action_points, action_points);
        let lower = world.current_level();
        assert_eq!(lower.last_event, Some(EventKind::Portal));
        assert!(lower.events.is_empty());
        assert!(world.level("upper").unwrap().events.is_empty());
    }

    #[test]
    fn portal_wins_over_a_monster_on_the_same_tile() {
        let mut upper = level("upper", &["#...#"]);
        let lower = level("lower", &["#..#"]);
        spawn(&mut upper, MonsterKind::Bat, 0, 2, 0);
        link(&mut upper, (2, 0), "lower", (1, 0));
        let mut world = world(vec![upper, lower], player_at(1, 0));

        world.resolve(&Input::Right).unwrap();

        assert_eq!(world.current_level_name(), "lower");
        let bat = world.level("upper").unwrap().monster_at(Position::new(2, 0)).unwrap();
        assert_eq!(bat.character.hitpoints, 50);
    }

    #[test]
    fn bump_attack_damages_without_moving() {
        let mut level = level("hall", &["#....#"]);
        spawn(&mut level, MonsterKind::Spider, 0, 2, 0);
        let mut world = world(vec![level], player_at(1, 0));

        let outcome = world.resolve(&Input::Right).unwrap();

        assert!(matches!(
            outcome.action,
            ActionOutcome::Attacked { target: MonsterId(0), .. }
        ));
        assert_eq!(world.player().character.position, Position::new(1, 0));
        let level = world.current_level();
        let spider = level.monster_at(Position::new(2, 0)).unwrap();
        assert_eq!(spider.character.hitpoints, 95);
        assert_eq!(level.events.iter().next(), Some("Player attacked Spider for 5"));
    }

    #[test]
    fn killed_monster_drops_everything_it_had() {
        let mut level = level("hall", &["#....#"]);
        let mut bat = MonsterKind::Bat.spawn(MonsterId(0), Position::new(2, 0));
        // The helmet halves the blow to 2.
        bat.character.hitpoints = 2;
        bat.character
            .inventory
            .push(ItemArchetype::Sword.create(ItemId(1), Position::ORIGIN));
        bat.character
            .equipment
            .equip(ItemArchetype::Helmet.create(ItemId(2), Position::ORIGIN))
            .unwrap();
        level.spawn_monster(bat).unwrap();
        let mut world = world(vec![level], player_at(1, 0));

        world.resolve(&Input::Right).unwrap();

        let level = world.current_level();
        assert!(level.monsters.is_empty());
        let dropped: Vec<ItemId> = level
            .items_at(Position::new(2, 0))
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(dropped, vec![ItemId(1), ItemId(2)]);
        assert!(level.items_at(Position::new(2, 0))
            .iter()
            .all(|item| item.position == Position::new(2, 0)));
        assert_eq!(level.events.latest(), Some("Player killed Bat"));
        assert_eq!(level.last_event, Some(EventKind::Attack));
    }
}
