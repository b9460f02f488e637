// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # clinic-rbac
//!
//! Role-based access control for a dental clinic dashboard.
//!
//! This crate provides a unified API over the workspace:
//!
//! - **Policy table**: roles, modules, actions and the fail-closed checker
//! - **Engine**: navigation filtering plus route and component gates
//! - **Configuration**: TOML/YAML policy tables and clinic settings
//!
//! ## Quick Start
//!
//! ```rust
//! use clinic_rbac::access::{default_table, Action, Module, Role};
//! use clinic_rbac::engine::{NavigationFilter, NavigationMenu};
//!
//! let checker = default_table().checker();
//! assert!(checker.has_permission(Role::Staff, Module::Inventory, Action::Manage));
//! assert!(!checker.has_permission_str("ghost-role", "dashboard", "view"));
//!
//! let menu = NavigationMenu::clinic_default();
//! let items = NavigationFilter::new(&menu, checker).menu_items_for_role(Role::Patient);
//! assert_eq!(items[0].path, "/dashboard");
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`access`] - Policy table and permission checker (from `core-access`)
//! - [`engine`] - Navigation and access gates (from `access-engine`)
//! - [`config`] - Configuration loading (from `app-config`)
//!
//! ## Security
//!
//! Every decision here gates what the UI renders. It is not a security
//! boundary; APIs and storage must enforce authorization on their own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Policy table module.
///
/// Re-exports `core_access` for roles, permissions and the checker.
pub mod access {
    pub use core_access::*;
}

/// Engine module.
///
/// Re-exports `access_engine` for navigation and gates.
pub mod engine {
    pub use access_engine::*;
}

/// Configuration module.
///
/// Re-exports `app_config` for file and environment loading.
pub mod config {
    pub use app_config::*;
}

// Convenience re-exports at root level
pub use core_access::{Action, Module, Permission, PermissionChecker, PolicyTable, Role};
