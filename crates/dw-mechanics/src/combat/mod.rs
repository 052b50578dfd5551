//! Combat state and outcomes.
//!
//! A [`CombatSession`] lives for exactly one encounter: the enemy's fresh
//! stat block, the two skip-turn markers, the round counter, and a log of
//! every turn. The player's stats are never copied into it; the engine
//! works on the shared [`dw_core::WorldState`] directly.

pub mod engine;
pub mod event;

pub use event::{CombatEvent, EventKind};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use dw_core::StatBlock;

use crate::enemy::EnemyKind;
use crate::error::MechError;

/// How the player's turns are paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CombatMode {
    /// Rolls happen back to back.
    #[default]
    Automatic,
    /// The player confirms each of their own rolls.
    Manual,
}

impl FromStr for CombatMode {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "auto" | "automatic" => Ok(Self::Automatic),
            "m" | "manual" => Ok(Self::Manual),
            _ => Err(MechError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for CombatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Automatic => write!(f, "automatic"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Which combatant is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player.
    Player,
    /// The enemy.
    Enemy,
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// The enemy's health reached zero.
    PlayerWon,
    /// The player's health reached zero.
    PlayerLost,
}

/// The state of one encounter in progress.
#[derive(Debug, Clone)]
pub struct CombatSession {
    /// Which enemy is being fought.
    pub enemy_kind: EnemyKind,
    /// The enemy's current stats.
    pub enemy: StatBlock,
    /// Current round number (1-based, 0 before the first round).
    pub round: u32,
    player_skips: bool,
    enemy_skips: bool,
    /// Every turn taken so far.
    pub log: Vec<CombatEvent>,
}

impl CombatSession {
    /// Start an encounter against a fresh enemy.
    pub fn new(enemy_kind: EnemyKind) -> Self {
        Self {
            enemy_kind,
            enemy: enemy_kind.stats(),
            round: 0,
            player_skips: false,
            enemy_skips: false,
            log: Vec::new(),
        }
    }

    /// Advance to the next round. Returns the new round number.
    pub fn start_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    /// Whether a side will forfeit its next turn.
    pub fn skip_pending(&self, side: Side) -> bool {
        match side {
            Side::Player => self.player_skips,
            Side::Enemy => self.enemy_skips,
        }
    }

    /// Set or clear a side's pending skip.
    pub fn set_skip(&mut self, side: Side, skip: bool) {
        match side {
            Side::Player => self.player_skips = skip,
            Side::Enemy => self.enemy_skips = skip,
        }
    }

    /// Consume a pending skip. Returns true if the side had one.
    pub fn take_skip(&mut self, side: Side) -> bool {
        let pending = self.skip_pending(side);
        self.set_skip(side, false);
        pending
    }

    /// Record a turn in the log.
    pub fn log_event(&mut self, event: CombatEvent) {
        self.log.push(event);
    }
}

/// Summary of a finished encounter.
#[derive(Debug, Clone)]
pub struct CombatReport {
    /// Which enemy was fought.
    pub enemy: EnemyKind,
    /// How it ended.
    pub outcome: CombatOutcome,
    /// Number of rounds started.
    pub rounds: u32,
    /// The enemy's health at the end.
    pub enemy_health: u32,
    /// Every turn taken.
    pub log: Vec<CombatEvent>,
}

impl CombatReport {
    /// True if the player won.
    pub fn player_won(&self) -> bool {
        self.outcome == CombatOutcome::PlayerWon
    }

    /// Number of turns in which the given side actually rolled.
    pub fn attacks_by(&self, side: Side) -> usize {
        self.log
            .iter()
            .filter(|e| e.actor == side && matches!(e.kind, EventKind::Attack { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_lifecycle() {
        let mut session = CombatSession::new(EnemyKind::GrizzlyBear);
        assert_eq!(session.round, 0);
        assert_eq!(session.enemy.health(), 50);
        assert_eq!(session.start_round(), 1);
        assert_eq!(session.start_round(), 2);
    }

    #[test]
    fn skips_are_independent() {
        let mut session = CombatSession::new(EnemyKind::DireWolf);
        session.set_skip(Side::Player, true);
        assert!(session.skip_pending(Side::Player));
        assert!(!session.skip_pending(Side::Enemy));

        assert!(session.take_skip(Side::Player));
        assert!(!session.take_skip(Side::Player));
        assert!(!session.take_skip(Side::Enemy));
    }

    #[test]
    fn parse_mode() {
        assert_eq!("A".parse::<CombatMode>().unwrap(), CombatMode::Automatic);
        assert_eq!("auto".parse::<CombatMode>().unwrap(), CombatMode::Automatic);
        assert_eq!(" m ".parse::<CombatMode>().unwrap(), CombatMode::Manual);
        assert_eq!("Manual".parse::<CombatMode>().unwrap(), CombatMode::Manual);
        assert!("x".parse::<CombatMode>().is_err());
    }

    #[test]
    fn mode_display() {
        assert_eq!(CombatMode::Manual.to_string(), "manual");
        assert_eq!(CombatMode::default(), CombatMode::Automatic);
    }
}
