use thiserror::Error;

/// Errors raised while building navigation data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Master navigation list exceeds the allowed size
    #[error("Too many navigation entries: {count} (max {max})")]
    TooManyNavigationEntries {
        /// Number of entries supplied
        count: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A navigation entry is malformed
    #[error("Invalid navigation entry #{index}: {reason}")]
    InvalidEntry {
        /// Zero-based position in the master list
        index: usize,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
