//! Role-scoped navigation menu
//!
//! The master list is static configuration, ordered for display. Filtering
//! never reorders or duplicates entries: the menu for a role is always a
//! subsequence of the master list.

use crate::error::{EngineError, Result};
use core_access::{Authorizer, Module, Permission, PolicyTable, Role};
use serde::{Deserialize, Serialize};

/// Maximum number of entries in a master navigation list
pub const MAX_NAVIGATION_ENTRIES: usize = 256;

/// One item of the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Icon reference understood by the frontend
    pub icon: String,
    /// Display label
    pub label: String,
    /// Target route
    pub path: String,
    /// Permission needed to see the entry; `None` means every authenticated role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<Permission>,
}

impl NavigationEntry {
    /// Create an entry guarded by `permission`
    pub fn guarded(
        icon: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        permission: Permission,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            path: path.into(),
            required_permission: Some(permission),
        }
    }

    /// Create an entry visible to every authenticated role
    pub fn unconditional(
        icon: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            path: path.into(),
            required_permission: None,
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        let reason = if self.label.trim().is_empty() {
            "label is empty"
        } else if !self.path.starts_with('/') {
            "path must start with '/'"
        } else {
            return Ok(());
        };

        Err(EngineError::InvalidEntry {
            index,
            reason: reason.to_string(),
        })
    }
}

/// The ordered master list of navigation entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavigationEntry>", into = "Vec<NavigationEntry>")]
pub struct NavigationMenu {
    entries: Vec<NavigationEntry>,
}

impl NavigationMenu {
    /// Create a master list, keeping entry order
    ///
    /// # Errors
    ///
    /// - `TooManyNavigationEntries` above [`MAX_NAVIGATION_ENTRIES`]
    /// - `InvalidEntry` for an empty label or a path not starting with `/`
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self> {
        if entries.len() > MAX_NAVIGATION_ENTRIES {
            return Err(EngineError::TooManyNavigationEntries {
                count: entries.len(),
                max: MAX_NAVIGATION_ENTRIES,
            });
        }

        for (index, entry) in entries.iter().enumerate() {
            entry.check(index)?;
        }

        Ok(Self { entries })
    }

    /// The clinic dashboard menu: dashboard first, then one entry per
    /// module guarded by its `view` permission
    #[must_use]
    pub fn clinic_default() -> Self {
        let mut entries = vec![NavigationEntry::unconditional(
            "layout-dashboard",
            "Dashboard",
            "/dashboard",
        )];

        entries.extend(
            [
                (Module::Patients, "users", "Patients"),
                (Module::Appointments, "calendar", "Appointments"),
                (Module::Charting, "clipboard", "Charting"),
                (Module::Billing, "credit-card", "Billing"),
                (Module::Inventory, "package", "Inventory"),
                (Module::Reports, "bar-chart", "Reports"),
                (Module::Users, "user-cog", "Users"),
                (Module::Notifications, "bell", "Notifications"),
                (Module::Settings, "settings", "Settings"),
            ]
            .into_iter()
            .map(|(module, icon, label)| {
                NavigationEntry::guarded(
                    icon,
                    label,
                    format!("/{module}"),
                    Permission::view(module),
                )
            }),
        );

        Self { entries }
    }

    /// Entries in display order
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationMenu {
    fn default() -> Self {
        Self::clinic_default()
    }
}

impl TryFrom<Vec<NavigationEntry>> for NavigationMenu {
    type Error = EngineError;

    fn try_from(entries: Vec<NavigationEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<NavigationMenu> for Vec<NavigationEntry> {
    fn from(menu: NavigationMenu) -> Self {
        menu.entries
    }
}

/// Filters a master list down to the entries a role may see
#[derive(Debug, Clone, Copy)]
pub struct NavigationFilter<'m, A> {
    menu: &'m NavigationMenu,
    authorizer: A,
}

impl<'m, A: Authorizer> NavigationFilter<'m, A> {
    /// Create a filter over `menu`, asking `authorizer` for guarded entries
    pub const fn new(menu: &'m NavigationMenu, authorizer: A) -> Self {
        Self { menu, authorizer }
    }

    /// Whether `entry` is shown to `role`
    pub fn is_visible(&self, role: Role, entry: &NavigationEntry) -> bool {
        entry
            .required_permission
            .map_or(true, |permission| self.authorizer.is_permitted(role, permission))
    }

    /// Entries visible to `role`, in master list order
    pub fn menu_items_for_role(&self, role: Role) -> Vec<&'m NavigationEntry> {
        self.menu
            .entries()
            .iter()
            .filter(|entry| self.is_visible(role, entry))
            .collect()
    }

    /// String-keyed variant of [`menu_items_for_role`](Self::menu_items_for_role)
    ///
    /// An unknown role is not an authenticated role and sees no entries,
    /// unconditional ones included.
    pub fn menu_items_for_role_str(&self, role: &str) -> Vec<&'m NavigationEntry> {
        match Role::parse(role) {
            Some(role) => self.menu_items_for_role(role),
            None => {
                tracing::debug!(role, "menu requested for unknown role");
                Vec::new()
            }
        }
    }
}

/// Entries whose required permission no role in `table` holds
///
/// Such entries are a configuration mistake: nobody will ever see them.
/// Each one is reported with `tracing::warn!`.
pub fn unreachable_entries<'m>(
    menu: &'m NavigationMenu,
    table: &PolicyTable,
) -> Vec<&'m NavigationEntry> {
    let unreachable: Vec<_> = menu
        .entries()
        .iter()
        .filter(|entry| {
            entry
                .required_permission
                .is_some_and(|permission| !table.is_granted_to_any(permission))
        })
        .collect();

    for entry in &unreachable {
        tracing::warn!(
            label = %entry.label,
            path = %entry.path,
            permission = ?entry.required_permission.map(|p| p.to_string()),
            "navigation entry is unreachable: no role holds its permission"
        );
    }

    unreachable
}
