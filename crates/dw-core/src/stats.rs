//! Combatant stat blocks.
//!
//! A stat block is the numeric profile shared by the player and every enemy:
//! a health value clamped between zero and a maximum, an attack power, and an
//! armor class capped at [`MAX_ARMOR_CLASS`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Highest armor class any combatant may have.
pub const MAX_ARMOR_CLASS: u32 = 20;

/// The player's fixed maximum health.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Health, attack, and armor for one combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    health: u32,
    max_health: u32,
    attack_power: u32,
    armor_class: u32,
}

impl StatBlock {
    /// Create a stat block, rejecting values that break its invariants.
    pub fn new(
        health: u32,
        max_health: u32,
        attack_power: u32,
        armor_class: u32,
    ) -> CoreResult<Self> {
        if max_health == 0 {
            return Err(CoreError::InvalidStats(
                "max health must be positive".to_string(),
            ));
        }
        if health > max_health {
            return Err(CoreError::InvalidStats(format!(
                "health {health} exceeds max health {max_health}"
            )));
        }
        if armor_class > MAX_ARMOR_CLASS {
            return Err(CoreError::InvalidStats(format!(
                "armor class {armor_class} exceeds {MAX_ARMOR_CLASS}"
            )));
        }
        Ok(Self {
            health,
            max_health,
            attack_power,
            armor_class,
        })
    }

    /// Create a stat block at full health.
    ///
    /// Out-of-range inputs are clamped instead of rejected: a zero max health
    /// becomes 1 and the armor class is capped at [`MAX_ARMOR_CLASS`].
    pub const fn full(max_health: u32, attack_power: u32, armor_class: u32) -> Self {
        let max_health = if max_health == 0 { 1 } else { max_health };
        let armor_class = if armor_class > MAX_ARMOR_CLASS {
            MAX_ARMOR_CLASS
        } else {
            armor_class
        };
        Self {
            health: max_health,
            max_health,
            attack_power,
            armor_class,
        }
    }

    /// Create the player's stat block: 100 health and the chosen attack and
    /// armor, with armor clamped to [`MAX_ARMOR_CLASS`].
    pub const fn player(attack_power: u32, armor_class: u32) -> Self {
        Self::full(PLAYER_MAX_HEALTH, attack_power, armor_class)
    }

    /// Current health.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Damage dealt by an ordinary hit.
    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    /// The roll an attacker needs to meet to land an ordinary hit.
    pub fn armor_class(&self) -> u32 {
        self.armor_class
    }

    /// Returns true once health has reached zero.
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract damage, stopping at zero. Returns the new health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Restore health to its maximum.
    pub fn heal_full(&mut self) {
        self.health = self.max_health;
    }

    /// Increase attack power. Returns the new value.
    pub fn raise_attack(&mut self, bonus: u32) -> u32 {
        self.attack_power = self.attack_power.saturating_add(bonus);
        self.attack_power
    }

    /// Increase armor class, capped at [`MAX_ARMOR_CLASS`]. Returns the new value.
    pub fn raise_armor(&mut self, bonus: u32) -> u32 {
        self.armor_class = self
            .armor_class
            .saturating_add(bonus)
            .min(MAX_ARMOR_CLASS);
        self.armor_class
    }

    /// Returns the fraction of health remaining (0.0 to 1.0).
    pub fn health_fraction(&self) -> f64 {
        f64::from(self.health) / f64::from(self.max_health)
    }
}

impl std::fmt::Display for StatBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HP {}/{}, ATK {}, AC {}",
            self.health, self.max_health, self.attack_power, self.armor_class
        )
    }
}
