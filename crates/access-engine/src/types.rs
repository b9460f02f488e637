use serde::{Deserialize, Serialize};

/// Access decision with its reasons
///
/// Returned by [`evaluate_request`](crate::evaluate_request) for callers
/// that want more than a bare boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the action is allowed
    pub allowed: bool,
    /// Human-readable reasons for the decision
    pub reasons: Vec<String>,
    /// Evaluation time in microseconds, filled in by timed callers
    pub evaluation_time_us: u64,
}

/// Policy table validation diagnostic
///
/// Line and column are 1-indexed and only present for TOML syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyDiagnostic {
    /// Whether the table passed validation
    pub valid: bool,
    /// Error message if validation failed
    pub message: Option<String>,
    /// Line number where the error occurred
    pub line: Option<u32>,
    /// Column number where the error occurred
    pub column: Option<u32>,
}
