/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying world state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A stat block was constructed with values that break its invariants.
    #[error("invalid stat block: {0}")]
    InvalidStats(String),

    /// A flag name did not match any known quest flag.
    #[error("unknown flag: \"{0}\"")]
    UnknownFlag(String),
}
