//! Turn resolution.
//!
//! The [`GameEngine`] is the only code path that mutates a [`World`] once it
//! has been assembled. One call to [`GameEngine::resolve`] consumes exactly one
//! [`Input`], applies the player's action, then gives every monster on the
//! (possibly new) active level one AI update.
//!
//! A failing player action abandons the turn before any monster moves and
//! before the turn counter advances.
mod ai;
mod inventory;
mod movement;

use crate::action::Input;
use crate::combat::AttackReport;
use crate::error::InvariantViolation;
use crate::state::{GameStatus, ItemId, MonsterId, Position, World};

/// What the player's action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Stepped onto a portal and arrived on another level.
    Traveled { level: String, position: Position },
    Attacked {
        target: MonsterId,
        report: AttackReport,
    },
    Moved { to: Position },
    DoorOpened { at: Position },
    /// Wall bump or edge of the grid.
    Blocked,
    PickedUp { items: Vec<ItemId> },
    Dropped { item: ItemId },
    Equipped {
        item: ItemId,
        /// Previous occupant of the slot, now back in the carried list.
        replaced: Option<ItemId>,
    },
    /// The input does not touch the world.
    Idle,
}

/// Result of resolving one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub action: ActionOutcome,
    /// Number of monsters that received an AI update.
    pub monsters_updated: usize,
    pub status: GameStatus,
}

pub struct GameEngine<'a> {
    world: &'a mut World,
}

impl<'a> GameEngine<'a> {
    pub fn new(world: &'a mut World) -> Self {
        Self { world }
    }

    /// Resolves one input and the monster phase that follows it.
    ///
    /// Once the player is dead every further input is ignored and reported
    /// as [`GameStatus::PlayerDead`].
    pub fn resolve(&mut self, input: &Input) -> Result<TurnOutcome, InvariantViolation> {
        if !self.world.player().character.is_alive() {
            return Ok(TurnOutcome {
                action: ActionOutcome::Idle,
                monsters_updated: 0,
                status: GameStatus::PlayerDead,
            });
        }

        let action = match *input {
            Input::Up | Input::Down | Input::Left | Input::Right => match input.direction() {
                Some(direction) => movement::step(self.world, direction)?,
                None => ActionOutcome::Idle,
            },
            Input::TakeAll => inventory::take_all(self.world),
            Input::TakeItem(item) => inventory::take_item(self.world, item)?,
            Input::DropItem(item) => inventory::drop_item(self.world, item)?,
            Input::EquipItem(item) => inventory::equip_item(self.world, item)?,
            Input::QuitGame | Input::CloseWindow(_) | Input::MouseClick | Input::Search => {
                ActionOutcome::Idle
            }
        };

        let monsters_updated = ai::update_monsters(self.world);
        self.world.advance_turn();

        let status = if self.world.player().character.is_alive() {
            GameStatus::Running
        } else {
            GameStatus::PlayerDead
        };

        Ok(TurnOutcome {
            action,
            monsters_updated,
            status,
        })
    }
}

impl World {
    /// Shorthand for `GameEngine::new(self).resolve(input)`.
    pub fn resolve(&mut self, input: &Input) -> Result<TurnOutcome, InvariantViolation> {
        GameEngine::new(self).resolve(input)
    }
}
