//! Builder pattern for ergonomic policy table construction

use crate::error::Result;
use crate::permission::{Action, Module, Permission};
use crate::policy::{Policy, PolicyEntry, PolicyTable};
use crate::role::Role;
use std::collections::BTreeMap;

/// Builder for one role's [`Policy`]
///
/// Granting on a module that already has an entry merges the actions into
/// that entry, so the result never lists a module twice. Entry order is the
/// order in which modules were first granted.
#[derive(Debug, Default)]
pub struct RolePolicyBuilder {
    policy: Policy,
}

impl RolePolicyBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `actions` on `module`
    #[must_use]
    pub fn grant(mut self, module: Module, actions: impl IntoIterator<Item = Action>) -> Self {
        let entries = self.policy.entries_mut();
        match entries.iter_mut().find(|entry| entry.module() == module) {
            Some(existing) => existing.extend(actions),
            None => entries.push(PolicyEntry::new(module, actions)),
        }
        self
    }

    /// Grant a single permission
    #[must_use]
    pub fn permit(self, permission: Permission) -> Self {
        self.grant(permission.module, [permission.action])
    }

    /// Grant `view` and nothing else on `module`
    #[must_use]
    pub fn view_only(self, module: Module) -> Self {
        self.grant(module, [Action::View])
    }

    /// Finish the policy
    #[must_use]
    pub fn build(self) -> Policy {
        self.policy
    }
}

/// Builder for creating [`PolicyTable`] instances with a fluent API
///
/// # Examples
///
/// ```
/// use core_access::{Action, Module, PolicyTableBuilder, Role};
///
/// let table = PolicyTableBuilder::new()
///     .role(Role::Patient, |policy| {
///         policy
///             .view_only(Module::Dashboard)
///             .grant(Module::Appointments, [Action::View, Action::Request])
///     })
///     .build()
///     .unwrap();
///
/// assert!(table.checker().has_permission(Role::Patient, Module::Appointments, Action::Request));
/// assert!(table.policy(Role::Admin).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct PolicyTableBuilder {
    policies: BTreeMap<Role, RolePolicyBuilder>,
}

impl PolicyTableBuilder {
    /// Create a new builder with every role empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the policy of `role` using a builder function
    ///
    /// Calling this twice for the same role continues the same policy.
    #[must_use]
    pub fn role<F>(mut self, role: Role, f: F) -> Self
    where
        F: FnOnce(RolePolicyBuilder) -> RolePolicyBuilder,
    {
        let current = self.policies.remove(&role).unwrap_or_default();
        self.policies.insert(role, f(current));
        self
    }

    /// Build the table, returning an error if validation fails
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::MissingViewGrant` if a role is granted an action
    /// on a module without `view` on it (see `PolicyTable::validate()`)
    pub fn build(self) -> Result<PolicyTable> {
        PolicyTable::new(
            self.policies
                .into_iter()
                .map(|(role, builder)| (role, builder.build())),
        )
    }
}
