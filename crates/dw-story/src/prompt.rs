//! Prompts and the answers they accept.

use dw_mechanics::CombatMode;

use crate::error::{StoryError, StoryResult};

/// A parsed answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A menu entry, numbered from 1.
    Option(u32),
    /// Agreed.
    Yes,
    /// Declined.
    No,
    /// Chose how to pace a fight.
    Mode(CombatMode),
    /// A free-form whole number.
    Number(u32),
    /// Any line, used for "press ENTER" pauses.
    Continue,
}

/// What kind of answer a prompt expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// A numbered menu with this many entries.
    Menu(u32),
    /// `y` or `n`.
    YesNo,
    /// `a` (automatic) or `m` (manual).
    FightMode,
    /// A non-negative whole number.
    Number,
    /// Anything at all.
    Continue,
}

impl PromptKind {
    /// Parse a raw input line. Surrounding whitespace and letter case are
    /// ignored.
    pub fn parse(self, input: &str) -> StoryResult<Token> {
        let answer = input.trim();
        match self {
            Self::Menu(n) => match answer.parse::<u32>() {
                Ok(choice) if (1..=n).contains(&choice) => Ok(Token::Option(choice)),
                _ => Err(StoryError::InvalidChoice(format!(
                    "'{answer}', pick a number from 1 to {n}"
                ))),
            },
            Self::YesNo => match answer.to_lowercase().as_str() {
                "y" => Ok(Token::Yes),
                "n" => Ok(Token::No),
                _ => Err(StoryError::InvalidChoice(format!(
                    "'{answer}', answer Y or N"
                ))),
            },
            Self::FightMode => match answer.to_lowercase().as_str() {
                "a" => Ok(Token::Mode(CombatMode::Automatic)),
                "m" => Ok(Token::Mode(CombatMode::Manual)),
                _ => Err(StoryError::InvalidChoice(format!(
                    "'{answer}', answer A or M"
                ))),
            },
            Self::Number => answer
                .parse::<u32>()
                .map(Token::Number)
                .map_err(|_| StoryError::InvalidNumber(answer.to_string())),
            Self::Continue => Ok(Token::Continue),
        }
    }
}

/// A question shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// The text shown before reading input.
    pub text: String,
    /// What the answer must look like.
    pub kind: PromptKind,
}

impl Prompt {
    /// A prompt with explicit text.
    pub fn new(text: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// A numbered menu prompt: "Enter 1, 2, or 3: ".
    pub fn menu(entries: u32) -> Self {
        let text = match entries {
            0 | 1 => "Enter 1: ".to_string(),
            2 => "Enter 1 or 2: ".to_string(),
            n => {
                let head: Vec<String> = (1..n).map(|i| i.to_string()).collect();
                format!("Enter {}, or {n}: ", head.join(", "))
            }
        };
        Self::new(text, PromptKind::Menu(entries.max(1)))
    }

    /// A yes/no question.
    pub fn yes_no(question: &str) -> Self {
        Self::new(format!("{question} (Y/N): "), PromptKind::YesNo)
    }

    /// The automatic-or-manual question asked before a fight.
    pub fn fight_mode(question: &str) -> Self {
        Self::new(format!("{question} (A/M): "), PromptKind::FightMode)
    }

    /// A number entry.
    pub fn number(text: &str) -> Self {
        Self::new(text, PromptKind::Number)
    }

    /// A "press ENTER" pause.
    pub fn pause(text: &str) -> Self {
        Self::new(text, PromptKind::Continue)
    }

    /// Parse an answer to this prompt.
    pub fn parse(&self, input: &str) -> StoryResult<Token> {
        self.kind.parse(input)
    }
}
