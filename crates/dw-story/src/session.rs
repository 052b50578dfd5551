//! Interactive game session.
//!
//! `GameSession` owns the world state, the location cursor, and the combat
//! engine, and drives them over a [`Console`] until the dragon is slain or
//! input runs out.

use rand::SeedableRng;
use rand::rngs::StdRng;

use dw_core::WorldState;
use dw_mechanics::{CombatEngine, CombatMode, CombatReport, EnemyKind, RollSource};

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::StoryResult;
use crate::graph::LocationGraph;
use crate::location::{Step, after_combat};
use crate::narrate::Narrator;
use crate::prompt::{Prompt, PromptKind, Token};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The dragon was defeated and the epilogue acknowledged.
    Victory,
    /// Input closed before the game was won.
    Abandoned,
}

/// A playthrough in progress.
pub struct GameSession<R> {
    world: WorldState,
    graph: LocationGraph,
    engine: CombatEngine<R>,
}

impl GameSession<StdRng> {
    /// Create a session with dice from the configured seed, or from the OS
    /// when no seed is set.
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, config)
    }
}

impl<R: RollSource> GameSession<R> {
    /// Create a session drawing dice from the given source.
    pub fn new(source: R, config: &GameConfig) -> Self {
        Self {
            world: WorldState::new(),
            graph: LocationGraph::new(config.fight_mode),
            engine: CombatEngine::new(source),
        }
    }

    /// The world state.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// The location cursor.
    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// Play until victory or until the console runs out of input.
    pub fn run(&mut self, console: &mut dyn Console) -> StoryResult<GameEnd> {
        loop {
            let node = self.graph.current();
            let scene = node.scene(&self.world);
            for line in &scene.lines {
                console.say(line)?;
            }

            let token = match &scene.prompt {
                None => None,
                Some(prompt) => match self.read_token(console, prompt)? {
                    Some(token) => Some(token),
                    None => {
                        tracing::info!(node = %node, "input closed");
                        return Ok(GameEnd::Abandoned);
                    }
                },
            };

            let mut transition = node.transition(token, &mut self.world)?;
            loop {
                for line in &transition.lines {
                    console.say(line)?;
                }
                match transition.step {
                    Step::Goto(next) => {
                        self.graph.advance(next);
                        break;
                    }
                    Step::Fight(enemy, mode) => {
                        let report = self.fight(console, enemy, mode)?;
                        transition = after_combat(&report, &mut self.world);
                    }
                    Step::Restart => {
                        self.world.reset_to_defaults();
                        self.graph.restart();
                        break;
                    }
                    Step::Finish => {
                        tracing::info!(steps = self.graph.steps(), "adventure complete");
                        return Ok(GameEnd::Victory);
                    }
                }
            }
        }
    }

    /// Ask until the answer parses. `None` means input closed.
    fn read_token(
        &self,
        console: &mut dyn Console,
        prompt: &Prompt,
    ) -> StoryResult<Option<Token>> {
        if prompt.kind == PromptKind::FightMode
            && let Some(mode) = self.graph.preset_mode()
        {
            console.say(&format!("(Fighting in {mode} mode.)"))?;
            return Ok(Some(Token::Mode(mode)));
        }
        loop {
            let Some(input) = console.ask(&prompt.text)? else {
                return Ok(None);
            };
            match prompt.parse(&input) {
                Ok(token) => return Ok(Some(token)),
                Err(e) => console.warn(&e.to_string())?,
            }
        }
    }

    fn fight(
        &mut self,
        console: &mut dyn Console,
        enemy: EnemyKind,
        mode: CombatMode,
    ) -> StoryResult<CombatReport> {
        let mut narrator = Narrator::new(console, enemy);
        let report = self
            .engine
            .run(&mut self.world, enemy, mode, &mut narrator);
        narrator.finish()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use dw_core::Flag;
    use dw_core::inventory::{MAGICAL_SWORD, MYSTERIOUS_STONE, RUSTED_KEY};
    use dw_mechanics::ScriptedRolls;

    fn session(rolls: &[u32], config: &GameConfig) -> GameSession<ScriptedRolls> {
        GameSession::new(ScriptedRolls::new(rolls.to_vec()).unwrap(), config)
    }

    /// Every roll is a natural 20, so with 100 attack the player one-shots
    /// every enemy before it can act.
    fn full_playthrough() -> Vec<&'static str> {
        vec![
            // setup
            "100", "20",
            // village: accept the quest
            "2", "1", "y", "3",
            // forest: three wolves
            "1", "2", "a", "2", "a", "2", "a", "3",
            // village: take the sword
            "2", "1", "y", "3",
            // forest to crossroads
            "1", "1",
            // bear, skin it, ravine returns to crossroads
            "2", "a", "1",
            // stream and island: locked chest, key, stone, back
            "3", "1", "2", "1", "2", "4", "3", "2",
            // mountain, ark, summit, dragon in manual mode
            "1", "2", "", "", "m", "",
            // epilogue
            "",
        ]
    }

    #[test]
    fn full_playthrough_ends_in_victory() {
        let mut game = session(&[20], &GameConfig::default());
        let mut console = ScriptedConsole::new(full_playthrough());
        let end = game.run(&mut console).unwrap();

        assert_eq!(end, GameEnd::Victory);
        assert_eq!(console.remaining(), 0);
        assert!(console.warnings().is_empty(), "{:?}", console.warnings());

        let world = game.world();
        assert!(world.flag(Flag::DragonDefeated));
        assert!(world.flag(Flag::BearDefeated));
        assert!(world.flag(Flag::ElderQuestAccepted));
        assert_eq!(world.flags().dire_wolf_defeated_count(), 3);
        assert_eq!(world.player().attack_power(), 106);
        assert_eq!(world.player().armor_class(), 20);
        assert_eq!(
            world.inventory().items(),
            &[MAGICAL_SWORD, RUSTED_KEY, MYSTERIOUS_STONE]
        );
        assert!(console.saw("Could this be the elder's magical sword?"));
        assert!(console.saw("The chest is locked"));
        assert!(console.saw("Victory is yours"));
        assert_eq!(game.graph().restarts(), 0);
    }

    #[test]
    fn invalid_input_reprompts_without_change() {
        let mut game = session(&[20], &GameConfig::default());
        let mut console = ScriptedConsole::new(["ten", "10", "10", "9", "village", "2"]);
        let end = game.run(&mut console).unwrap();

        assert_eq!(end, GameEnd::Abandoned);
        assert_eq!(console.warnings().len(), 3);
        assert!(console.warnings()[0].contains("invalid number"));
        assert!(console.warnings()[1].contains("from 1 to 4"));
        assert_eq!(game.graph().current(), crate::Node::Village);
        assert_eq!(game.world().player().attack_power(), 10);
    }

    #[test]
    fn defeat_restarts_with_fresh_world() {
        // Attack 0 never hurts the wolf; the wolf hits on every 2 against
        // armor 0 until the player falls.
        let mut game = session(&[2], &GameConfig::default());
        let mut console = ScriptedConsole::new(["0", "0", "1", "2", "a", ""]);
        let end = game.run(&mut console).unwrap();

        assert_eq!(end, GameEnd::Abandoned);
        assert_eq!(game.graph().restarts(), 1);
        assert_eq!(game.graph().current(), crate::Node::ChooseAttack);
        assert_eq!(console.count("You come to on the floor"), 2);
        assert!(console.saw("The dire wolf drags you down"));

        let world = game.world();
        assert_eq!(world.player().health(), 100);
        assert_eq!(world.flags().dire_wolf_defeated_count(), 0);
        assert!(world.inventory().is_empty());
        assert!(!world.in_combat());
    }

    #[test]
    fn preset_mode_skips_fight_question() {
        let config = GameConfig::default().with_fight_mode(CombatMode::Automatic);
        let mut game = session(&[20], &config);
        let mut console = ScriptedConsole::new(["100", "0", "1", "2"]);
        game.run(&mut console).unwrap();

        assert_eq!(game.world().flags().dire_wolf_defeated_count(), 1);
        assert!(console.saw("(Fighting in automatic mode.)"));
        assert!(!console.saw("(A/M)"));
    }

    #[test]
    fn eof_mid_manual_fight_finishes_the_fight() {
        let mut game = session(&[15, 5], &GameConfig::default());
        let mut console = ScriptedConsole::new(["10", "10", "1", "2", "m"]);
        let end = game.run(&mut console).unwrap();

        assert_eq!(end, GameEnd::Abandoned);
        assert_eq!(game.world().flags().dire_wolf_defeated_count(), 1);
        assert!(!game.world().in_combat());
    }

    #[test]
    fn stay_put_loops_back() {
        let mut game = session(&[20], &GameConfig::default());
        let mut console = ScriptedConsole::new(["5", "5", "3", "3"]);
        game.run(&mut console).unwrap();
        assert_eq!(game.graph().current(), crate::Node::Outskirts);
        assert_eq!(console.count("You stay put"), 2);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let config = GameConfig::default()
            .with_seed(99)
            .with_fight_mode(CombatMode::Automatic);
        let script = ["12", "14", "1", "2", "2", "2"];

        let mut first = GameSession::from_config(&config);
        let mut a = ScriptedConsole::new(script);
        first.run(&mut a).unwrap();

        let mut second = GameSession::from_config(&config);
        let mut b = ScriptedConsole::new(script);
        second.run(&mut b).unwrap();

        assert_eq!(a.transcript(), b.transcript());
        assert_eq!(first.world(), second.world());
    }
}
