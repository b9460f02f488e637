use access_engine::EngineError;
use core_access::PolicyError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit
    #[error("Configuration file {path} is {size} bytes (max {max})")]
    TooLarge {
        /// File being read
        path: PathBuf,
        /// Actual size
        size: u64,
        /// Maximum allowed
        max: u64,
    },

    /// Extension is neither TOML nor YAML
    #[error("Unsupported configuration format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// Policy table failed to load or validate
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// Navigation list is invalid
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration TOML is malformed or invalid
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration YAML is malformed or invalid
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A redirect path is not absolute
    #[error("Invalid {field}: '{value}' must start with '/'")]
    InvalidPath {
        /// Offending setting
        field: &'static str,
        /// Value found
        value: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;
