//! The line-based boundary between the game and its player.

use std::collections::VecDeque;

use crate::error::StoryResult;

/// A line-oriented input source and output sink.
pub trait Console {
    /// Print one line of narration.
    fn say(&mut self, line: &str) -> StoryResult<()>;

    /// Show a prompt and read one line. `None` means input has closed.
    fn ask(&mut self, prompt: &str) -> StoryResult<Option<String>>;

    /// Report rejected input. Defaults to [`Console::say`].
    fn warn(&mut self, message: &str) -> StoryResult<()> {
        self.say(message)
    }
}

/// A console fed from canned answers that records everything shown.
///
/// Used by tests and by any caller that wants to replay a fixed script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
    warnings: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with the given lines in
    /// order, then report closed input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line shown, prompts and answers included.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Only the warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// How many prompts were shown.
    pub fn prompts_shown(&self) -> usize {
        self.prompts
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// True if any transcript line contains the needle.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Number of transcript lines containing the needle.
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> StoryResult<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> StoryResult<Option<String>> {
        self.prompts += 1;
        let answer = self.input.pop_front();
        match &answer {
            Some(a) => self.transcript.push(format!("{prompt}{a}")),
            None => self.transcript.push(prompt.to_string()),
        }
        Ok(answer)
    }

    fn warn(&mut self, message: &str) -> StoryResult<()> {
        self.warnings.push(message.to_string());
        self.transcript.push(message.to_string());
        Ok(())
    }
}
