//! Picking up, dropping and equipping items.

use super::ActionOutcome;
use crate::error::InvariantViolation;
use crate::state::{EventKind, ItemId, ItemKind, World};

pub(super) fn take_all(world: &mut World) -> ActionOutcome {
    let (level, player) = world.active_mut();
    let position = player.character.position;

    let pile = level.items.remove(&position).unwrap_or_default();
    let mut items = Vec::with_capacity(pile.len());
    for item in pile {
        level
            .events
            .push(format!("{} picked up: {}", player.character.name, item.name));
        items.push(item.id);
        player.character.inventory.push(item);
    }
    level.last_event = Some(EventKind::Pickup);

    ActionOutcome::PickedUp { items }
}

pub(super) fn take_item(world: &mut World, id: ItemId) -> Result<ActionOutcome, InvariantViolation> {
    let (level, player) = world.active_mut();
    let position = player.character.position;

    let item = level
        .take_item(position, id)
        .ok_or(InvariantViolation::ItemNotOnGround { item: id, position })?;
    level
        .events
        .push(format!("{} picked up: {}", player.character.name, item.name));
    player.character.inventory.push(item);
    level.last_event = Some(EventKind::Pickup);

    Ok(ActionOutcome::PickedUp { items: vec![id] })
}

pub(super) fn drop_item(world: &mut World, id: ItemId) -> Result<ActionOutcome, InvariantViolation> {
    let (level, player) = world.active_mut();

    let item = player
        .character
        .inventory
        .remove(id)
        .ok_or(InvariantViolation::ItemNotCarried { item: id })?;
    level
        .events
        .push(format!("{} dropped: {}", player.character.name, item.name));
    level.place_item(player.character.position, item);
    level.last_event = Some(EventKind::Drop);

    Ok(ActionOutcome::Dropped { item: id })
}

/// Moves a carried item into its slot; the slot's previous item goes back to
/// the carried list.
pub(super) fn equip_item(world: &mut World, id: ItemId) -> Result<ActionOutcome, InvariantViolation> {
    let character = &mut world.player_mut().character;

    let kind = character
        .inventory
        .get(id)
        .map(|item| item.kind)
        .ok_or(InvariantViolation::ItemNotCarried { item: id })?;
    if kind == ItemKind::Other {
        return Err(InvariantViolation::ItemNotEquippable { item: id, kind });
    }

    let item = character
        .inventory
        .remove(id)
        .ok_or(InvariantViolation::ItemNotCarried { item: id })?;
    let replaced = match character.equipment.equip(item) {
        Ok(previous) => previous,
        Err(item) => {
            character.inventory.push(item);
            return Err(InvariantViolation::ItemNotEquippable { item: id, kind });
        }
    };

    let replaced_id = replaced.as_ref().map(|previous| previous.id);
    if let Some(previous) = replaced {
        character.inventory.push(previous);
    }

    Ok(ActionOutcome::Equipped {
        item: id,
        replaced: replaced_id,
    })
}
