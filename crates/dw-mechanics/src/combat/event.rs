//! Combat event logging.

use serde::{Deserialize, Serialize};

use super::Side;
use crate::resolve::AttackRoll;

/// What happened on a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// The actor rolled against the opponent.
    Attack {
        /// The resolved roll.
        roll: AttackRoll,
        /// The opponent's health after damage.
        target_health: u32,
    },
    /// The actor lost the turn to an earlier critical miss.
    Skipped,
}

/// A recorded combat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Which round this happened in.
    pub round: u32,
    /// Who acted.
    pub actor: Side,
    /// What happened.
    pub kind: EventKind,
}

impl CombatEvent {
    /// An attack turn.
    pub fn attack(round: u32, actor: Side, roll: AttackRoll, target_health: u32) -> Self {
        Self {
            round,
            actor,
            kind: EventKind::Attack {
                roll,
                target_health,
            },
        }
    }

    /// A forfeited turn.
    pub fn skipped(round: u32, actor: Side) -> Self {
        Self {
            round,
            actor,
            kind: EventKind::Skipped,
        }
    }

    /// Damage dealt on this turn.
    pub fn damage(&self) -> u32 {
        match &self.kind {
            EventKind::Attack { roll, .. } => roll.damage,
            EventKind::Skipped => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_attack;

    #[test]
    fn damage_of_events() {
        let hit = CombatEvent::attack(1, Side::Player, resolve_attack(15, 10, 12), 20);
        assert_eq!(hit.damage(), 10);
        let skip = CombatEvent::skipped(2, Side::Player);
        assert_eq!(skip.damage(), 0);
        assert_eq!(skip.kind, EventKind::Skipped);
    }

    #[test]
    fn round_trip_serde() {
        let event = CombatEvent::attack(3, Side::Enemy, resolve_attack(20, 8, 10), 84);
        let json = serde_json::to_string(&event).unwrap();
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
