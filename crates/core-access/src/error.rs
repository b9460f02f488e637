//! Error types for core-access
//!
//! Every variant describes a problem with a policy table being *built*.
//! Permission queries never produce errors.

use crate::permission::{Action, Module};
use crate::role::Role;
use thiserror::Error;

/// Result type alias for policy construction
pub type Result<T> = core::result::Result<T, PolicyError>;

/// Errors that can occur while constructing or loading a policy table
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A role lists the same module in more than one entry
    #[error("Module {module} appears more than once in the policy for role {role}")]
    DuplicateModule {
        /// Role whose policy is malformed
        role: Role,
        /// Module listed twice
        module: Module,
    },

    /// A role is granted a non-view action on a module it cannot view
    #[error("Role {role} is granted {action} on {module} without {module}:view")]
    MissingViewGrant {
        /// Role whose policy is malformed
        role: Role,
        /// Module lacking the view grant
        module: Module,
        /// First non-view action found on that module
        action: Action,
    },

    /// Configuration names a role outside the closed set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Configuration names a module outside the closed set
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// Configuration names an action outside the closed set
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Permission string is not of the form `module:action`
    #[error("Invalid permission '{0}': expected module:action")]
    InvalidPermission(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}
