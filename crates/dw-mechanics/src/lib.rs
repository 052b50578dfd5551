//! Dice resolution and turn-based combat for Darkwood.
//!
//! A single d20 rule decides every attack: natural 20 doubles the damage,
//! natural 1 whiffs and costs the attacker their next turn, anything at or
//! above the defender's armor class hits. The [`CombatEngine`] applies that
//! rule in alternating rounds until the player or the enemy falls.

pub mod combat;
pub mod dice;
pub mod enemy;
pub mod error;
pub mod resolve;

pub use combat::engine::{CombatEngine, CombatObserver, NoopObserver};
pub use combat::event::{CombatEvent, EventKind};
pub use combat::{CombatMode, CombatOutcome, CombatReport, CombatSession, Side};
pub use dice::{RollSource, ScriptedRolls};
pub use enemy::EnemyKind;
pub use error::{MechError, MechResult};
pub use resolve::{AttackRoll, DiceResolver, HitKind, resolve_attack};
