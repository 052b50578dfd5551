//! The cursor over the location graph.

use dw_mechanics::CombatMode;

use crate::location::Node;

/// Tracks where the player is and how far they have come.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGraph {
    current: Node,
    steps: u64,
    restarts: u32,
    preset_mode: Option<CombatMode>,
}

impl LocationGraph {
    /// Start at the introduction. A preset mode replaces every
    /// automatic/manual question.
    pub fn new(preset_mode: Option<CombatMode>) -> Self {
        Self {
            current: Node::START,
            steps: 0,
            restarts: 0,
            preset_mode,
        }
    }

    /// The node the player is at.
    pub fn current(&self) -> Node {
        self.current
    }

    /// Transitions taken across all runs.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// How many times the game has started over after a defeat.
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// The fixed fight mode, if any.
    pub fn preset_mode(&self) -> Option<CombatMode> {
        self.preset_mode
    }

    /// Move to the next node.
    pub fn advance(&mut self, next: Node) {
        tracing::debug!(from = %self.current, to = %next, step = self.steps, "transition");
        self.current = next;
        self.steps += 1;
    }

    /// Go back to the introduction.
    pub fn restart(&mut self) {
        self.restarts += 1;
        tracing::info!(restarts = self.restarts, "restarting from the introduction");
        self.current = Node::START;
        self.steps += 1;
    }
}

impl Default for LocationGraph {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_intro() {
        let graph = LocationGraph::default();
        assert_eq!(graph.current(), Node::Intro);
        assert_eq!(graph.steps(), 0);
        assert_eq!(graph.restarts(), 0);
        assert_eq!(graph.preset_mode(), None);
    }

    #[test]
    fn advance_counts_steps() {
        let mut graph = LocationGraph::new(Some(CombatMode::Manual));
        graph.advance(Node::ChooseAttack);
        graph.advance(Node::ChooseArmor { attack: 5 });
        assert_eq!(graph.current(), Node::ChooseArmor { attack: 5 });
        assert_eq!(graph.steps(), 2);
        assert_eq!(graph.preset_mode(), Some(CombatMode::Manual));
    }

    #[test]
    fn restart_returns_to_intro() {
        let mut graph = LocationGraph::default();
        graph.advance(Node::Outskirts);
        graph.advance(Node::Forest);
        graph.restart();
        assert_eq!(graph.current(), Node::Intro);
        assert_eq!(graph.restarts(), 1);
        assert_eq!(graph.steps(), 3);
    }
}
