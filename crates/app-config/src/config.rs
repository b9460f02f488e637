//! Clinic configuration: policy table, navigation and redirect paths
//!
//! Everything is optional in the file. Missing sections fall back to the
//! built-in clinic defaults:
//!
//! ```toml
//! login_path = "/login"
//! landing_path = "/dashboard"
//!
//! [[policy.roles.patient]]
//! module = "dashboard"
//! actions = ["view"]
//!
//! [[navigation]]
//! icon = "layout-dashboard"
//! label = "Dashboard"
//! path = "/dashboard"
//! ```

use crate::error::{ConfigError, Result};
use crate::parser::Format;
use access_engine::{
    unreachable_entries, NavigationEntry, NavigationFilter, NavigationMenu, RedirectTargets,
    RouteGate,
};
use core_access::{clinic_policy_table, PermissionChecker, PolicyTable};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "CLINIC_RBAC_CONFIG";

/// Maximum size of a configuration file in bytes
pub const MAX_CONFIG_BYTES: u64 = 1024 * 1024;

/// Loaded clinic configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicConfig {
    /// Role → policy table
    pub policy: PolicyTable,
    /// Master navigation list
    pub navigation: NavigationMenu,
    /// Where sessions without a role are sent
    pub login_path: String,
    /// Where roles outside a route's allow-list are sent
    pub landing_path: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            policy: clinic_policy_table(),
            navigation: NavigationMenu::clinic_default(),
            login_path: RedirectTargets::DEFAULT_LOGIN_PATH.to_string(),
            landing_path: RedirectTargets::DEFAULT_LANDING_PATH.to_string(),
        }
    }
}

impl ClinicConfig {
    /// Parse a TOML configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or any section is invalid
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or any section is invalid
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, picking the format from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, exceeds
    /// [`MAX_CONFIG_BYTES`], has an unknown extension, or is invalid
    pub fn load(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let input = read_limited(path)?;

        let config = match format {
            Format::Toml => Self::from_toml_str(&input)?,
            Format::Yaml => Self::from_yaml_str(&input)?,
        };

        tracing::info!(
            path = %path.display(),
            entries = config.policy.entry_count(),
            navigation = config.navigation.len(),
            "loaded clinic configuration"
        );
        config.warn_unreachable();
        Ok(config)
    }

    /// Load from `explicit`, else from `$CLINIC_RBAC_CONFIG`, else defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a named file fails to load
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                tracing::debug!("no configuration file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Permission checker over the configured table
    #[must_use]
    pub fn checker(&self) -> PermissionChecker<'_> {
        self.policy.checker()
    }

    /// Navigation filter over the configured menu and table
    #[must_use]
    pub fn navigation_filter(&self) -> NavigationFilter<'_, PermissionChecker<'_>> {
        NavigationFilter::new(&self.navigation, self.policy.checker())
    }

    /// Configured redirect paths
    #[must_use]
    pub fn redirect_targets(&self) -> RedirectTargets {
        RedirectTargets {
            login_path: self.login_path.clone(),
            landing_path: self.landing_path.clone(),
        }
    }

    /// Route gate using the configured redirect paths
    #[must_use]
    pub fn route_gate(&self) -> RouteGate {
        RouteGate::new().with_targets(self.redirect_targets())
    }

    /// Navigation entries no role can see, each logged as a warning
    pub fn warn_unreachable(&self) -> Vec<&NavigationEntry> {
        unreachable_entries(&self.navigation, &self.policy)
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("login_path", &self.login_path),
            ("landing_path", &self.landing_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidPath {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Load a bare policy table file, picking the parser from its extension
///
/// # Errors
///
/// Returns an error if the file cannot be read, exceeds
/// [`MAX_CONFIG_BYTES`], has an unknown extension, or is invalid
pub fn load_policy_table(path: &Path) -> Result<PolicyTable> {
    let parser = Format::from_path(path)?.parser();
    let input = read_limited(path)?;
    Ok(parser.parse(&input)?)
}

fn read_limited(path: &Path) -> Result<String> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(io_error)?;
    let size = file.metadata().map_err(io_error)?.len();
    if size > MAX_CONFIG_BYTES {
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_BYTES,
        });
    }

    let mut input = String::new();
    file.take(MAX_CONFIG_BYTES)
        .read_to_string(&mut input)
        .map_err(io_error)?;
    Ok(input)
}
