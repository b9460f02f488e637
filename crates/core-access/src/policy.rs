//! Policy definitions and validation logic
//!
//! This module provides the authorization data:
//! - `PolicyEntry`: one module with the set of actions allowed on it
//! - `Policy`: the ordered entries for a single role
//! - `PolicyTable`: the total mapping from every role to its policy
//!
//! ## Table invariants
//!
//! Every table, however it was constructed, satisfies:
//! - Each module appears at most once in a role's policy
//! - A role granted any action on a module is also granted `view` on it
//!
//! Tables loaded from TOML or YAML go through a raw intermediate and
//! `TryFrom`, so a file violating either rule is rejected at load time.

use crate::authorizer::PermissionChecker;
use crate::error::{PolicyError, Result};
use crate::permission::{Action, Module, Permission};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A module together with the actions a role may perform on it
///
/// Actions are held as a set: listing an action twice is the same as listing
/// it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    module: Module,
    actions: BTreeSet<Action>,
}

impl PolicyEntry {
    /// Create an entry for `module` granting `actions`
    #[must_use]
    pub fn new(module: Module, actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            module,
            actions: actions.into_iter().collect(),
        }
    }

    /// Module this entry applies to
    #[must_use]
    pub const fn module(&self) -> Module {
        self.module
    }

    /// Allowed actions, in declaration order of [`Action`]
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions.iter().copied()
    }

    /// Whether `action` is allowed by this entry
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Number of distinct actions granted
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Permissions granted by this entry
    pub fn permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        let module = self.module;
        self.actions
            .iter()
            .map(move |action| Permission::new(module, *action))
    }

    pub(crate) fn extend(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.actions.extend(actions);
    }
}

/// The ordered policy entries of a single role
///
/// A module absent from the policy means the role has no permission on it at
/// all, `view` included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    entries: Vec<PolicyEntry>,
}

impl Policy {
    /// A policy granting nothing
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a policy from entries, keeping their order
    ///
    /// Not validated on its own; [`PolicyTable::new`] checks it.
    #[must_use]
    pub fn new(entries: Vec<PolicyEntry>) -> Self {
        Self { entries }
    }

    /// Entries in policy order
    #[must_use]
    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Entry for `module`, if the role has one
    #[must_use]
    pub fn entry(&self, module: Module) -> Option<&PolicyEntry> {
        self.entries.iter().find(|entry| entry.module == module)
    }

    /// Modules with an entry, in policy order
    pub fn modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.entries.iter().map(PolicyEntry::module)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the policy grants nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<PolicyEntry> {
        &mut self.entries
    }

    fn validate(&self, role: Role) -> Result<()> {
        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.module) {
                return Err(PolicyError::DuplicateModule {
                    role,
                    module: entry.module,
                });
            }

            if !entry.allows(Action::View) {
                if let Some(action) = entry.actions().next() {
                    return Err(PolicyError::MissingViewGrant {
                        role,
                        module: entry.module,
                        action,
                    });
                }
            }
        }
        Ok(())
    }
}

static EMPTY_POLICY: Policy = Policy::empty();

/// The complete role → policy mapping
///
/// Total over [`Role::ALL`]: a role without configured entries maps to an
/// empty policy. Built once at startup and read-only afterwards; share it by
/// reference or behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyTableRaw", into = "PolicyTableRaw")]
pub struct PolicyTable {
    policies: BTreeMap<Role, Policy>,
}

impl PolicyTable {
    /// Build a validated table from per-role policies
    ///
    /// Roles not present in `policies` get an empty policy. If a role is
    /// supplied more than once, the last policy wins.
    ///
    /// # Errors
    ///
    /// - `DuplicateModule` if a policy lists a module twice
    /// - `MissingViewGrant` if a policy grants an action without `view`
    pub fn new(policies: impl IntoIterator<Item = (Role, Policy)>) -> Result<Self> {
        let mut table = Self::empty();
        table.policies.extend(policies);
        table.validate()?;
        Ok(table)
    }

    /// A table in which every role has an empty policy
    #[must_use]
    pub fn empty() -> Self {
        Self {
            policies: Role::ALL
                .into_iter()
                .map(|role| (role, Policy::empty()))
                .collect(),
        }
    }

    pub(crate) fn from_validated(policies: BTreeMap<Role, Policy>) -> Self {
        let mut table = Self::empty();
        table.policies.extend(policies);
        table
    }

    /// Policy for `role`
    #[must_use]
    pub fn policy(&self, role: Role) -> &Policy {
        self.policies.get(&role).unwrap_or(&EMPTY_POLICY)
    }

    /// Every role with its policy
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Policy)> {
        self.policies.iter().map(|(role, policy)| (*role, policy))
    }

    /// Total number of entries across all roles
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.policies.values().map(Policy::len).sum()
    }

    /// Whether any role holds `permission`
    #[must_use]
    pub fn is_granted_to_any(&self, permission: Permission) -> bool {
        self.policies.values().any(|policy| {
            policy
                .entry(permission.module)
                .is_some_and(|entry| entry.allows(permission.action))
        })
    }

    /// Permission checker over this table
    #[must_use]
    pub const fn checker(&self) -> PermissionChecker<'_> {
        PermissionChecker::new(self)
    }

    /// Check the table invariants
    ///
    /// # Errors
    ///
    /// - `DuplicateModule` if a policy lists a module twice
    /// - `MissingViewGrant` if a policy grants an action without `view`
    pub fn validate(&self) -> Result<()> {
        for (role, policy) in &self.policies {
            policy.validate(*role)?;
        }
        Ok(())
    }

    /// Load a table from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - TOML parsing fails
    /// - A role, module or action name is unknown
    /// - Validation fails (see `validate()`)
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let table: Self = toml::from_str(toml_str)?;
        tracing::info!(
            entries = table.entry_count(),
            "loaded policy table from TOML"
        );
        Ok(table)
    }

    /// Serialize the table to a TOML string
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::Serialization` if TOML serialization fails
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PolicyError::Serialization(e.to_string()))
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Raw table structure for (de)serialization (internal use only)
///
/// Names stay as strings here so that unknown roles, modules and actions are
/// reported with the offending name rather than a generic serde message.
/// Unknown keys are rejected: a misspelled `roles` or `actions` must not load
/// as a table that silently grants nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyTableRaw {
    #[serde(default)]
    roles: BTreeMap<String, Vec<PolicyEntryRaw>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyEntryRaw {
    module: String,
    #[serde(default)]
    actions: Vec<String>,
}

impl TryFrom<PolicyTableRaw> for PolicyTable {
    type Error = PolicyError;

    fn try_from(raw: PolicyTableRaw) -> Result<Self> {
        let mut policies = BTreeMap::new();

        for (role_name, raw_entries) in raw.roles {
            let role: Role = role_name.parse()?;

            let entries = raw_entries
                .into_iter()
                .map(|raw_entry| -> Result<PolicyEntry> {
                    let module: Module = raw_entry.module.parse()?;
                    let actions = raw_entry
                        .actions
                        .iter()
                        .map(|name| name.parse::<Action>())
                        .collect::<Result<Vec<_>>>()?;
                    Ok(PolicyEntry::new(module, actions))
                })
                .collect::<Result<Vec<_>>>()?;

            policies.insert(role, Policy::new(entries));
        }

        Self::new(policies)
    }
}

impl From<PolicyTable> for PolicyTableRaw {
    fn from(table: PolicyTable) -> Self {
        let roles = table
            .policies
            .into_iter()
            .filter(|(_, policy)| !policy.is_empty())
            .map(|(role, policy)| {
                let entries = policy
                    .entries
                    .into_iter()
                    .map(|entry| PolicyEntryRaw {
                        module: entry.module.as_str().to_string(),
                        actions: entry
                            .actions
                            .into_iter()
                            .map(|action| action.as_str().to_string())
                            .collect(),
                    })
                    .collect();
                (role.as_str().to_string(), entries)
            })
            .collect();

        Self { roles }
    }
}
