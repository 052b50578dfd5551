//! A fixed, repeating sequence of d20 results.

use std::collections::VecDeque;

use super::{D20_SIDES, RollSource};
use crate::error::{MechError, MechResult};

/// Hands out a fixed sequence of d20 results, starting over when it runs
/// out.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    script: Vec<u32>,
    pending: VecDeque<u32>,
    rolled: usize,
}

impl ScriptedRolls {
    /// Create a script. Fails if it is empty or holds a value outside 1-20.
    pub fn new(script: impl Into<Vec<u32>>) -> MechResult<Self> {
        let script = script.into();
        if script.is_empty() {
            return Err(MechError::EmptyRollScript);
        }
        if let Some(bad) = script.iter().find(|v| !(1..=D20_SIDES).contains(*v)) {
            return Err(MechError::InvalidRoll(*bad));
        }
        Ok(Self {
            pending: script.iter().copied().collect(),
            script,
            rolled: 0,
        })
    }

    /// How many results have been handed out so far.
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl RollSource for ScriptedRolls {
    fn roll_d20(&mut self) -> u32 {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.rolled += 1;
        // `new` guarantees a non-empty script, so the refill above always
        // leaves something to pop.
        self.pending.pop_front().unwrap_or(D20_SIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_cycles() {
        let mut dice = ScriptedRolls::new([3, 20, 1]).unwrap();
        let rolls: Vec<u32> = (0..7).map(|_| dice.roll_d20()).collect();
        assert_eq!(rolls, vec![3, 20, 1, 3, 20, 1, 3]);
        assert_eq!(dice.rolled(), 7);
    }

    #[test]
    fn rejects_empty_script() {
        assert!(matches!(
            ScriptedRolls::new(Vec::new()),
            Err(MechError::EmptyRollScript)
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            ScriptedRolls::new([5, 0]),
            Err(MechError::InvalidRoll(0))
        ));
        assert!(matches!(
            ScriptedRolls::new([21]),
            Err(MechError::InvalidRoll(21))
        ));
    }
}
