//! The fixed roster of enemies.

use serde::{Deserialize, Serialize};

use dw_core::StatBlock;

/// An enemy the player can fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Hunts in the forest; three kills reveal the elder's sword.
    DireWolf,
    /// Guards the deeper forest; fought once.
    GrizzlyBear,
    /// Waits on the summit; killing it ends the game.
    Dragon,
}

impl EnemyKind {
    /// Every enemy kind.
    pub const ALL: [EnemyKind; 3] = [Self::DireWolf, Self::GrizzlyBear, Self::Dragon];

    /// A fresh stat block for this enemy.
    pub const fn stats(self) -> StatBlock {
        match self {
            Self::DireWolf => StatBlock::full(30, 8, 12),
            Self::GrizzlyBear => StatBlock::full(50, 15, 13),
            Self::Dragon => StatBlock::full(100, 18, 15),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DireWolf => "Dire Wolf",
            Self::GrizzlyBear => "Grizzly Bear",
            Self::Dragon => "Dragon",
        }
    }
}

impl std::fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
