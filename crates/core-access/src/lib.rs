// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # core-access
//!
//! Static role-based access control for the clinic dashboard.
//!
//! This crate provides the authorization data and the queries over it:
//! - Closed vocabularies for roles, modules and actions
//! - Per-role policies of (module, allowed actions) entries
//! - The role → policy table, loaded once and never mutated
//! - A pure, fail-closed permission checker
//!
//! ## Fail-closed
//!
//! Queries never error. An unknown role, module or action, whether it reaches
//! the checker as a typed value or as a raw string, resolves to "not allowed".
//! Errors exist only when *building* a table from configuration.
//!
//! ## Scope
//!
//! Decisions made here gate what the UI shows. They are not a security
//! boundary: every API and storage layer must re-enforce authorization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod authorizer;
pub mod builder;
pub mod defaults;
pub mod error;
pub mod permission;
pub mod policy;
pub mod role;

pub use authorizer::{Authorizer, PermissionChecker};
pub use builder::{PolicyTableBuilder, RolePolicyBuilder};
pub use defaults::{clinic_policy_table, default_table};
/// Re-export commonly used types
pub use error::{PolicyError, Result};
pub use permission::{Action, Module, Permission};
pub use policy::{Policy, PolicyEntry, PolicyTable};
pub use role::Role;
