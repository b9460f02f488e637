// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # app-config
//!
//! Configuration loading for the clinic access engine.
//!
//! This crate provides:
//! - Policy table parsers for TOML and YAML files
//! - `ClinicConfig`: policy table, navigation menu and redirect paths,
//!   loaded from a file or from `$CLINIC_RBAC_CONFIG`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod parser;

/// Re-export commonly used types
pub use config::{load_policy_table, ClinicConfig, CONFIG_ENV_VAR, MAX_CONFIG_BYTES};
pub use error::{ConfigError, Result};
pub use parser::{to_yaml, Format, PolicyParser, TomlParser, YamlParser};
