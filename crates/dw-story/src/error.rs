//! Error types for the story layer.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while running the adventure.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The answer did not match any offered option.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A whole number was expected.
    #[error("invalid number '{0}', enter a whole number such as 10")]
    InvalidNumber(String),

    /// A node received an answer of the wrong kind.
    #[error("{node} cannot handle {token}")]
    UnexpectedToken {
        /// The node that was being resolved.
        node: String,
        /// Debug rendering of the token it received.
        token: String,
    },

    /// Reading or writing the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
