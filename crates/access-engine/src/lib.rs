// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # access-engine
//!
//! Consumers of the permission checker for the clinic dashboard.
//!
//! This crate turns permission decisions into what the UI renders:
//! - The role-scoped navigation menu
//! - Route-level gates that render, wait or redirect
//! - Component-level gates that render a fragment, a fallback or nothing
//!
//! Identity resolution and navigation side effects stay outside the crate,
//! behind the [`IdentityProvider`] and [`Navigator`] traits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod component_gate;
mod error;
mod identity;
mod navigation;
mod route_gate;
mod types;
mod validation;

pub use component_gate::{ComponentGate, Rendered};
pub use error::{EngineError, Result};
pub use identity::{IdentityProvider, IdentityState, StaticIdentity};
pub use navigation::{
    unreachable_entries, NavigationEntry, NavigationFilter, NavigationMenu,
    MAX_NAVIGATION_ENTRIES,
};
pub use route_gate::{GateState, Navigator, Redirect, RedirectTargets, RouteGate, RouteMount};
pub use types::{AccessDecision, PolicyDiagnostic};
pub use validation::{evaluate_request, validate_policy_table};
