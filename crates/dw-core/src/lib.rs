//! Core types for Darkwood: stat blocks, quest flags, inventory, and the
//! world state.
//!
//! [`WorldState`] is the single mutable record of a playthrough. Every other
//! crate reads and mutates it through the quest operations defined here,
//! which keep the flag invariants intact (the sword is revealed once, the
//! chest cannot be open without its key, and so on).

/// Error types used throughout the crate.
pub mod error;
/// Quest flags and their names.
pub mod flags;
/// The player's ordered item list.
pub mod inventory;
/// Health, attack, and armor profiles for combatants.
pub mod stats;
/// The world state aggregate and its quest operations.
pub mod world;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export flag types.
pub use flags::{Flag, QuestFlags};
/// Re-export the inventory.
pub use inventory::Inventory;
/// Re-export stat block types.
pub use stats::{MAX_ARMOR_CLASS, PLAYER_MAX_HEALTH, StatBlock};
/// Re-export world state types.
pub use world::{ChestOutcome, WolfTally, WorldState};
