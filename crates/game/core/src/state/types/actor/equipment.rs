//! Equipment slots for characters.

use crate::state::types::{Item, ItemKind};

/// The two equipment slots a character has: one weapon and one helmet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub helmet: Option<Item>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Puts `item` into the slot matching its kind.
    ///
    /// Returns the item previously occupying that slot, if any. Items of kind
    /// [`ItemKind::Other`] have no slot and are handed back as the error.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, Item> {
        match item.kind {
            ItemKind::Weapon => Ok(self.weapon.replace(item)),
            ItemKind::Helmet => Ok(self.helmet.replace(item)),
            ItemKind::Other => Err(item),
        }
    }

    /// Weapon multiplier applied to outgoing damage.
    pub fn weapon_power(&self) -> Option<f64> {
        self.weapon.as_ref().map(|weapon| weapon.power)
    }

    /// Helmet fraction of incoming damage that is absorbed.
    pub fn helmet_power(&self) -> Option<f64> {
        self.helmet.as_ref().map(|helmet| helmet.power)
    }

    /// Empties both slots.
    pub fn take_all(&mut self) -> impl Iterator<Item = Item> {
        self.weapon.take().into_iter().chain(self.helmet.take())
    }
}
