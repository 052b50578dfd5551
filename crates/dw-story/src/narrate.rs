//! Combat narration through a console.

use dw_mechanics::{CombatEvent, CombatObserver, EnemyKind, EventKind, HitKind, Side};

use crate::console::Console;
use crate::error::{StoryError, StoryResult};

/// Narrates each combat turn and performs the manual-mode pause.
///
/// Observer hooks cannot fail, so the first console error is held until
/// [`Narrator::finish`] and later output is dropped.
pub(crate) struct Narrator<'a, C: Console + ?Sized> {
    console: &'a mut C,
    enemy: EnemyKind,
    error: Option<StoryError>,
    input_closed: bool,
}

impl<'a, C: Console + ?Sized> Narrator<'a, C> {
    pub(crate) fn new(console: &'a mut C, enemy: EnemyKind) -> Self {
        Self {
            console,
            enemy,
            error: None,
            input_closed: false,
        }
    }

    /// Surface a console error raised during the fight.
    pub(crate) fn finish(self) -> StoryResult<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn say(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.console.say(line) {
            self.error = Some(e);
        }
    }

    fn describe(&self, event: &CombatEvent) -> Vec<String> {
        let enemy = self.enemy;
        match (event.actor, &event.kind) {
            (Side::Player, EventKind::Skipped) => vec![
                String::new(),
                "Still off balance from your critical miss, you lose your turn!".to_string(),
            ],
            (Side::Enemy, EventKind::Skipped) => vec![
                String::new(),
                format!("The {enemy} is still recovering from its critical miss and loses its turn!"),
            ],
            (
                actor,
                EventKind::Attack {
                    roll,
                    target_health,
                },
            ) => {
                let header = match actor {
                    Side::Player => format!("Your turn against the {enemy}!"),
                    Side::Enemy => format!("The {enemy}'s turn!"),
                };
                let verdict = match roll.kind {
                    HitKind::CriticalHit => "Natural 20! Critical hit, double damage!",
                    HitKind::CriticalMiss => "Natural 1! Critical miss, the next turn is lost.",
                    HitKind::Hit => "Hit!",
                    HitKind::Miss => "Missed!",
                };
                let health = match actor {
                    Side::Player => format!("{enemy} health: {target_health}"),
                    Side::Enemy => format!("Your health: {target_health}"),
                };
                vec![
                    String::new(),
                    header,
                    format!("Dice roll: {}", roll.roll),
                    verdict.to_string(),
                    health,
                ]
            }
        }
    }
}

impl<C: Console + ?Sized> CombatObserver for Narrator<'_, C> {
    fn on_event(&mut self, event: &CombatEvent) {
        for line in self.describe(event) {
            self.say(&line);
        }
    }

    fn before_player_roll(&mut self) {
        if self.input_closed || self.error.is_some() {
            return;
        }
        match self.console.ask("Press ENTER to roll the dice...") {
            Ok(Some(_)) => {}
            Ok(None) => self.input_closed = true,
            Err(e) => self.error = Some(e),
        }
    }
}
