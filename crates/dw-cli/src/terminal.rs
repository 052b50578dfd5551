use std::io::{self, BufRead, StdinLock, Write};

use colored::Colorize;

use dw_story::{Console, StoryResult};

/// Reads answers from stdin and writes narration to stdout.
pub(crate) struct TerminalConsole {
    reader: StdinLock<'static>,
    line: String,
}

impl TerminalConsole {
    pub(crate) fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
            line: String::new(),
        }
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> StoryResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> StoryResult<Option<String>> {
        let mut out = io::stdout().lock();
        write!(out, "{}", prompt.bold())?;
        out.flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn warn(&mut self, message: &str) -> StoryResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", message.yellow())?;
        Ok(())
    }
}
