//! Permission queries over a policy table
//!
//! `PermissionChecker` only answers questions; it never builds, validates or
//! mutates a table. The table is injected, so tests can substitute their own
//! without touching the process-wide default.
//!
//! Every query is total. Unknown input is denied, never reported.

use crate::permission::{Action, Module, Permission};
use crate::policy::PolicyTable;
use crate::role::Role;
use std::sync::Arc;

/// Evaluates permission queries against a borrowed [`PolicyTable`]
///
/// ## Example
///
/// ```
/// use core_access::{default_table, Action, Module, PermissionChecker, Role};
///
/// let checker = PermissionChecker::new(default_table());
/// assert!(checker.has_permission(Role::Admin, Module::Users, Action::Delete));
/// assert!(!checker.has_permission(Role::Patient, Module::Users, Action::Delete));
/// assert!(!checker.has_permission_str("ghost-role", "dashboard", "view"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PermissionChecker<'a> {
    table: &'a PolicyTable,
}

impl<'a> PermissionChecker<'a> {
    /// Create a checker over `table`
    #[must_use]
    pub const fn new(table: &'a PolicyTable) -> Self {
        Self { table }
    }

    /// Table being queried
    #[must_use]
    pub const fn table(&self) -> &'a PolicyTable {
        self.table
    }

    /// Check if `role` may perform `action` on `module`
    ///
    /// # Returns
    ///
    /// `true` only if the role's policy has an entry for `module` and that
    /// entry lists `action`
    #[must_use]
    pub fn has_permission(&self, role: Role, module: Module, action: Action) -> bool {
        let allowed = self
            .table
            .policy(role)
            .entry(module)
            .is_some_and(|entry| entry.allows(action));

        if !allowed {
            tracing::debug!(%role, %module, %action, "permission denied");
        }
        allowed
    }

    /// Check a [`Permission`] pair for `role`
    #[must_use]
    pub fn is_permitted(&self, role: Role, permission: Permission) -> bool {
        self.has_permission(role, permission.module, permission.action)
    }

    /// String-keyed variant of [`has_permission`](Self::has_permission)
    ///
    /// Any name outside the closed vocabularies, the empty string included,
    /// yields `false`.
    #[must_use]
    pub fn has_permission_str(&self, role: &str, module: &str, action: &str) -> bool {
        match (Role::parse(role), Module::parse(module), Action::parse(action)) {
            (Some(role), Some(module), Some(action)) => self.has_permission(role, module, action),
            _ => {
                tracing::debug!(role, module, action, "unrecognized permission query");
                false
            }
        }
    }

    /// Check if `role` may see `module` at all (its `view` permission)
    #[must_use]
    pub fn can_access_module(&self, role: Role, module: Module) -> bool {
        self.has_permission(role, module, Action::View)
    }

    /// String-keyed variant of [`can_access_module`](Self::can_access_module)
    #[must_use]
    pub fn can_access_module_str(&self, role: &str, module: &str) -> bool {
        self.has_permission_str(role, module, Action::View.as_str())
    }

    /// Modules the role has any entry for, in policy order
    #[must_use]
    pub fn accessible_modules(&self, role: Role) -> Vec<Module> {
        self.table.policy(role).modules().collect()
    }

    /// String-keyed variant of [`accessible_modules`](Self::accessible_modules).
    /// An unknown role yields an empty list.
    #[must_use]
    pub fn accessible_modules_str(&self, role: &str) -> Vec<Module> {
        Role::parse(role)
            .map(|role| self.accessible_modules(role))
            .unwrap_or_default()
    }

    /// Every permission granted to `role`, in policy order
    pub fn permissions_for(&self, role: Role) -> impl Iterator<Item = Permission> + 'a {
        self.table
            .policy(role)
            .entries()
            .iter()
            .flat_map(|entry| entry.permissions())
    }
}

/// Trait for types that can answer permission queries
///
/// Navigation filtering and the access gates depend on this abstraction, not
/// on `PermissionChecker`, so a fixed or recording authorizer can stand in
/// for tests.
pub trait Authorizer {
    /// Check if `role` holds `permission`
    fn is_permitted(&self, role: Role, permission: Permission) -> bool;
}

impl<'a> Authorizer for PermissionChecker<'a> {
    fn is_permitted(&self, role: Role, permission: Permission) -> bool {
        PermissionChecker::is_permitted(self, role, permission)
    }
}

impl Authorizer for PolicyTable {
    fn is_permitted(&self, role: Role, permission: Permission) -> bool {
        self.checker().is_permitted(role, permission)
    }
}

impl<T: Authorizer + ?Sized> Authorizer for &T {
    fn is_permitted(&self, role: Role, permission: Permission) -> bool {
        (**self).is_permitted(role, permission)
    }
}

impl<T: Authorizer + ?Sized> Authorizer for Arc<T> {
    fn is_permitted(&self, role: Role, permission: Permission) -> bool {
        (**self).is_permitted(role, permission)
    }
}
