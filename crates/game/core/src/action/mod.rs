//! Player intents.
//!
//! An [`Input`] is what a front-end sends into the shared queue. The runtime
//! handles `QuitGame` itself and forwards everything else to
//! [`GameEngine::resolve`](crate::engine::GameEngine::resolve).
mod direction;

pub use direction::CardinalDirection;

use crate::state::{ItemId, ObserverId};

/// One player intent, consumed exactly once by the turn resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    /// Pick up every item on the player's tile.
    TakeAll,
    TakeItem(ItemId),
    DropItem(ItemId),
    EquipItem(ItemId),
    QuitGame,
    /// The observer with this id detaches; its stream closes.
    CloseWindow(ObserverId),
    MouseClick,
    Search,
}

impl Input {
    /// Direction of a movement input, if it is one.
    pub const fn direction(&self) -> Option<CardinalDirection> {
        match self {
            Input::Up => Some(CardinalDirection::North),
            Input::Down => Some(CardinalDirection::South),
            Input::Left => Some(CardinalDirection::West),
            Input::Right => Some(CardinalDirection::East),
            _ => None,
        }
    }

    pub const fn is_quit(&self) -> bool {
        matches!(self, Input::QuitGame)
    }
}
