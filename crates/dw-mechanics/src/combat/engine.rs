//! The round loop.

use dw_core::WorldState;

use super::{CombatEvent, CombatMode, CombatOutcome, CombatReport, CombatSession, Side};
use crate::dice::RollSource;
use crate::enemy::EnemyKind;
use crate::resolve::DiceResolver;

/// Hooks called while a fight is resolved.
///
/// Both methods default to doing nothing.
pub trait CombatObserver {
    /// Called after every turn, including skipped ones.
    fn on_event(&mut self, _event: &CombatEvent) {}

    /// Called before each player roll in [`CombatMode::Manual`].
    fn before_player_roll(&mut self) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CombatObserver for NoopObserver {}

/// Runs fights to completion against the player's stats in a [`WorldState`].
#[derive(Debug, Clone)]
pub struct CombatEngine<R> {
    resolver: DiceResolver<R>,
}

impl<R: RollSource> CombatEngine<R> {
    /// Create an engine drawing rolls from the given source.
    pub fn new(source: R) -> Self {
        Self {
            resolver: DiceResolver::new(source),
        }
    }

    /// The underlying roll source.
    pub fn source(&self) -> &R {
        self.resolver.source()
    }

    /// Fight a fresh enemy of the given kind until one side reaches zero
    /// health. The player always acts first in a round.
    pub fn run(
        &mut self,
        world: &mut WorldState,
        enemy: EnemyKind,
        mode: CombatMode,
        observer: &mut dyn CombatObserver,
    ) -> CombatReport {
        let mut session = CombatSession::new(enemy);
        world.begin_combat();
        tracing::info!(%enemy, %mode, player = %world.player(), "combat started");

        let outcome = loop {
            if world.player().is_defeated() {
                break CombatOutcome::PlayerLost;
            }
            let round = session.start_round();

            if self.player_turn(world, &mut session, round, mode, observer) {
                break CombatOutcome::PlayerWon;
            }
            if self.enemy_turn(world, &mut session, round, observer) {
                break CombatOutcome::PlayerLost;
            }
        };

        world.end_combat();
        tracing::info!(
            %enemy,
            ?outcome,
            rounds = session.round,
            player_health = world.player().health(),
            enemy_health = session.enemy.health(),
            "combat ended"
        );

        CombatReport {
            enemy,
            outcome,
            rounds: session.round,
            enemy_health: session.enemy.health(),
            log: session.log,
        }
    }

    /// Returns true if the enemy is dead afterwards.
    fn player_turn(
        &mut self,
        world: &WorldState,
        session: &mut CombatSession,
        round: u32,
        mode: CombatMode,
        observer: &mut dyn CombatObserver,
    ) -> bool {
        if session.take_skip(Side::Player) {
            tracing::debug!(round, "player skips turn");
            record(session, observer, CombatEvent::skipped(round, Side::Player));
            return false;
        }
        if mode == CombatMode::Manual {
            observer.before_player_roll();
        }

        let attack = self
            .resolver
            .resolve(world.player().attack_power(), session.enemy.armor_class());
        let remaining = session.enemy.take_damage(attack.damage);
        session.set_skip(Side::Player, attack.skip_next_turn);
        tracing::debug!(
            round,
            roll = attack.roll,
            kind = %attack.kind,
            damage = attack.damage,
            remaining,
            "player attacks"
        );
        record(
            session,
            observer,
            CombatEvent::attack(round, Side::Player, attack, remaining),
        );
        session.enemy.is_defeated()
    }

    /// Returns true if the player is dead afterwards.
    fn enemy_turn(
        &mut self,
        world: &mut WorldState,
        session: &mut CombatSession,
        round: u32,
        observer: &mut dyn CombatObserver,
    ) -> bool {
        if session.take_skip(Side::Enemy) {
            tracing::debug!(round, "enemy skips turn");
            record(session, observer, CombatEvent::skipped(round, Side::Enemy));
            return false;
        }

        let attack = self
            .resolver
            .resolve(session.enemy.attack_power(), world.player().armor_class());
        let remaining = world.player_mut().take_damage(attack.damage);
        session.set_skip(Side::Enemy, attack.skip_next_turn);
        tracing::debug!(
            round,
            roll = attack.roll,
            kind = %attack.kind,
            damage = attack.damage,
            remaining,
            "enemy attacks"
        );
        record(
            session,
            observer,
            CombatEvent::attack(round, Side::Enemy, attack, remaining),
        );
        world.player().is_defeated()
    }
}

fn record(session: &mut CombatSession, observer: &mut dyn CombatObserver, event: CombatEvent) {
    observer.on_event(&event);
    session.log_event(event);
}
