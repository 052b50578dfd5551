//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A scripted die result fell outside 1-20.
    #[error("invalid d20 result: {0}")]
    InvalidRoll(u32),

    /// A roll script had no values to hand out.
    #[error("roll script is empty")]
    EmptyRollScript,

    /// A combat mode name was not recognised.
    #[error("unknown combat mode '{0}', use: automatic, manual")]
    UnknownMode(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
