use serde::{Deserialize, Serialize};

/// The elder's blade, claimed after the third wolf falls.
pub const MAGICAL_SWORD: &str = "Magical Sword";
/// Found on the remains on the lake island.
pub const RUSTED_KEY: &str = "Rusted Key";
/// Kept in the island chest; opens the mountain ark.
pub const MYSTERIOUS_STONE: &str = "Mysterious Stone";

/// Items carried by the player, in pickup order.
///
/// Duplicates are kept: every pickup appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Check whether at least one copy of an item is carried.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// How many copies of an item are carried.
    pub fn count_of(&self, item: &str) -> usize {
        self.items.iter().filter(|i| *i == item).count()
    }

    /// All items in pickup order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items carried.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
