//! Configuration for a game session.

use dw_mechanics::CombatMode;

/// Configuration for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for reproducible dice. Seeded from the OS when absent.
    pub seed: Option<u64>,
    /// Preset fight pacing. When set, the automatic/manual question is
    /// never asked.
    pub fight_mode: Option<CombatMode>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the fight mode for every encounter.
    pub fn with_fight_mode(mut self, mode: CombatMode) -> Self {
        self.fight_mode = Some(mode);
        self
    }
}
