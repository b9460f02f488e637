//! Policy table parsers for the supported file formats

use crate::error::{ConfigError, Result};
use core_access::{PolicyError, PolicyTable};
use std::path::Path;

/// Trait for policy table parsers
pub trait PolicyParser {
    /// Parse and validate a policy table from a string
    fn parse(&self, input: &str) -> std::result::Result<PolicyTable, PolicyError>;
}

/// TOML parser implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl PolicyParser for TomlParser {
    fn parse(&self, input: &str) -> std::result::Result<PolicyTable, PolicyError> {
        PolicyTable::from_toml(input)
    }
}

/// YAML parser implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl PolicyParser for YamlParser {
    fn parse(&self, input: &str) -> std::result::Result<PolicyTable, PolicyError> {
        let table: PolicyTable = serde_yaml::from_str(input)
            .map_err(|e| PolicyError::Serialization(format!("YAML parse error: {}", e)))?;
        tracing::info!(entries = table.entry_count(), "loaded policy table from YAML");
        Ok(table)
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.toml`
    Toml,
    /// `.yaml` or `.yml`
    Yaml,
}

impl Format {
    /// Format implied by the file extension
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` for any other extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parser for this format
    #[must_use]
    pub fn parser(self) -> &'static dyn PolicyParser {
        match self {
            Self::Toml => &TomlParser,
            Self::Yaml => &YamlParser,
        }
    }
}

/// Serialize a policy table to YAML
///
/// # Errors
///
/// Returns `PolicyError::Serialization` if YAML serialization fails
pub fn to_yaml(table: &PolicyTable) -> std::result::Result<String, PolicyError> {
    serde_yaml::to_string(table)
        .map_err(|e| PolicyError::Serialization(format!("YAML serialization error: {}", e)))
}
