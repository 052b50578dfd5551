//! The d20 attack rule.
//!
//! Evaluated in priority order:
//! 1. natural 20: critical hit, double damage;
//! 2. natural 1: critical miss, no damage, the attacker loses their next turn;
//! 3. roll at or above the defender's armor class: hit for the attack power;
//! 4. anything else: miss.

use serde::{Deserialize, Serialize};

use crate::dice::{D20_SIDES, RollSource};

/// How an attack roll landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    /// Natural 20.
    CriticalHit,
    /// Natural 1.
    CriticalMiss,
    /// Met or beat the armor class.
    Hit,
    /// Fell short of the armor class.
    Miss,
}

impl std::fmt::Display for HitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalHit => write!(f, "Critical Hit"),
            Self::CriticalMiss => write!(f, "Critical Miss"),
            Self::Hit => write!(f, "Hit"),
            Self::Miss => write!(f, "Miss"),
        }
    }
}

/// The resolved result of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// The d20 result.
    pub roll: u32,
    /// How the attack landed.
    pub kind: HitKind,
    /// Damage to subtract from the defender.
    pub damage: u32,
    /// Whether the attacker forfeits their next turn.
    pub skip_next_turn: bool,
}

/// Apply the attack rule to a known d20 result.
pub fn resolve_attack(roll: u32, attack_power: u32, armor_class: u32) -> AttackRoll {
    debug_assert!((1..=D20_SIDES).contains(&roll), "d20 rolled {roll}");
    let (kind, damage, skip_next_turn) = if roll == D20_SIDES {
        (HitKind::CriticalHit, attack_power.saturating_mul(2), false)
    } else if roll == 1 {
        (HitKind::CriticalMiss, 0, true)
    } else if roll >= armor_class {
        (HitKind::Hit, attack_power, false)
    } else {
        (HitKind::Miss, 0, false)
    };
    AttackRoll {
        roll,
        kind,
        damage,
        skip_next_turn,
    }
}

/// Rolls a d20 from its source and applies the attack rule.
#[derive(Debug, Clone)]
pub struct DiceResolver<R> {
    source: R,
}

impl<R: RollSource> DiceResolver<R> {
    /// Create a resolver drawing from the given source.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Roll once and resolve an attack against the defender's armor class.
    pub fn resolve(&mut self, attack_power: u32, armor_class: u32) -> AttackRoll {
        let roll = self.source.roll_d20();
        resolve_attack(roll, attack_power, armor_class)
    }

    /// The underlying roll source.
    pub fn source(&self) -> &R {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use proptest::prelude::*;

    #[test]
    fn natural_twenty_doubles() {
        let r = resolve_attack(20, 10, 12);
        assert_eq!(r.kind, HitKind::CriticalHit);
        assert_eq!(r.damage, 20);
        assert!(!r.skip_next_turn);
    }

    #[test]
    fn natural_one_skips() {
        let r = resolve_attack(1, 10, 0);
        assert_eq!(r.kind, HitKind::CriticalMiss);
        assert_eq!(r.damage, 0);
        assert!(r.skip_next_turn);
    }

    #[test]
    fn meeting_armor_class_hits() {
        let r = resolve_attack(12, 8, 12);
        assert_eq!(r.kind, HitKind::Hit);
        assert_eq!(r.damage, 8);
    }

    #[test]
    fn below_armor_class_misses() {
        let r = resolve_attack(11, 8, 12);
        assert_eq!(r.kind, HitKind::Miss);
        assert_eq!(r.damage, 0);
        assert!(!r.skip_next_turn);
    }

    #[test]
    fn twenty_beats_max_armor() {
        assert_eq!(resolve_attack(20, 5, 20).damage, 10);
        assert_eq!(resolve_attack(19, 5, 20).kind, HitKind::Miss);
    }

    #[test]
    fn resolver_uses_its_source() {
        let mut resolver = DiceResolver::new(ScriptedRolls::new([15, 5]).unwrap());
        assert_eq!(resolver.resolve(10, 12).damage, 10);
        assert_eq!(resolver.resolve(10, 12).damage, 0);
        assert_eq!(resolver.source().rolled(), 2);
    }

    #[test]
    fn hit_kind_display() {
        assert_eq!(HitKind::CriticalHit.to_string(), "Critical Hit");
        assert_eq!(HitKind::Miss.to_string(), "Miss");
    }

    proptest! {
        #[test]
        fn attack_rule_holds(attack in 0u32..1000, armor in 0u32..=20, roll in 1u32..=20) {
            let r = resolve_attack(roll, attack, armor);
            prop_assert_eq!(r.roll, roll);
            match roll {
                20 => {
                    prop_assert_eq!(r.damage, attack * 2);
                    prop_assert!(!r.skip_next_turn);
                }
                1 => {
                    prop_assert_eq!(r.damage, 0);
                    prop_assert!(r.skip_next_turn);
                }
                n if n >= armor => {
                    prop_assert_eq!(r.damage, attack);
                    prop_assert!(!r.skip_next_turn);
                }
                _ => {
                    prop_assert_eq!(r.damage, 0);
                    prop_assert!(!r.skip_next_turn);
                    prop_assert_eq!(r.kind, HitKind::Miss);
                }
            }
        }
    }
}
