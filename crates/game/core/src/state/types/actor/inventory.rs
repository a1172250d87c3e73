//! Carried items.

use crate::state::types::{Item, ItemId};

/// Items a character carries but has not equipped, in pickup order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryState {
    pub items: Vec<Item>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Item> + '_ {
        self.items.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
