//! Modules, actions and the permissions that pair them
//!
//! Both vocabularies are closed enumerations so that a misspelled permission
//! check fails to compile instead of silently denying. String parsing is still
//! offered for configuration files and the JavaScript boundary; unknown names
//! parse to `None`.

use crate::error::PolicyError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Functional area of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    /// Landing overview
    Dashboard,
    /// Patient records
    Patients,
    /// Appointment calendar
    Appointments,
    /// Dental charting and treatment notes
    Charting,
    /// Invoices and payments
    Billing,
    /// Supplies and stock
    Inventory,
    /// Practice reports
    Reports,
    /// User accounts
    Users,
    /// Messages and reminders
    Notifications,
    /// Clinic and account settings
    Settings,
}

impl Module {
    /// Every module, in declaration order
    pub const ALL: [Self; 10] = [
        Self::Dashboard,
        Self::Patients,
        Self::Appointments,
        Self::Charting,
        Self::Billing,
        Self::Inventory,
        Self::Reports,
        Self::Users,
        Self::Notifications,
        Self::Settings,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Patients => "patients",
            Self::Appointments => "appointments",
            Self::Charting => "charting",
            Self::Billing => "billing",
            Self::Inventory => "inventory",
            Self::Reports => "reports",
            Self::Users => "users",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
        }
    }

    /// Parse a canonical module name. Returns `None` for anything else.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|module| module.as_str() == name)
    }
}

/// Operation within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// See the module at all
    View,
    /// Create records
    Create,
    /// Modify records
    Edit,
    /// Remove records
    Delete,
    /// Book or move appointments
    Schedule,
    /// Process payments
    Process,
    /// Manage stock or channels
    Manage,
    /// Change configuration
    Configure,
    /// Send messages
    Send,
    /// Generate reports
    Generate,
    /// Export data
    Export,
    /// Ask for something (appointment requests, restocking)
    Request,
}

impl Action {
    /// Every action, in declaration order
    pub const ALL: [Self; 12] = [
        Self::View,
        Self::Create,
        Self::Edit,
        Self::Delete,
        Self::Schedule,
        Self::Process,
        Self::Manage,
        Self::Configure,
        Self::Send,
        Self::Generate,
        Self::Export,
        Self::Request,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Schedule => "schedule",
            Self::Process => "process",
            Self::Manage => "manage",
            Self::Configure => "configure",
            Self::Send => "send",
            Self::Generate => "generate",
            Self::Export => "export",
            Self::Request => "request",
        }
    }

    /// Parse a canonical action name. Returns `None` for anything else.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

/// A (module, action) pair, written `module:action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    /// Module the action applies to
    pub module: Module,
    /// Action on that module
    pub action: Action,
}

impl Permission {
    /// Create a permission
    #[must_use]
    pub const fn new(module: Module, action: Action) -> Self {
        Self { module, action }
    }

    /// The `view` permission on a module
    #[must_use]
    pub const fn view(module: Module) -> Self {
        Self::new(module, Action::View)
    }

    /// Parse `module:action`. Returns `None` if either half is unknown.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let (module, action) = input.split_once(':')?;
        Some(Self::new(Module::parse(module)?, Action::parse(action)?))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.action)
    }
}

impl FromStr for Module {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PolicyError::UnknownModule(s.to_string()))
    }
}

impl FromStr for Action {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PolicyError::UnknownAction(s.to_string()))
    }
}

impl FromStr for Permission {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, action) = s
            .split_once(':')
            .ok_or_else(|| PolicyError::InvalidPermission(s.to_string()))?;
        Ok(Self::new(module.parse()?, action.parse()?))
    }
}

impl TryFrom<String> for Permission {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}
