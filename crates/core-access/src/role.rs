//! Session roles
//!
//! The role set is closed. A role is assigned to a session once and does not
//! change; roles do not inherit from one another.

use crate::error::PolicyError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identity category assigned to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Clinic administrator
    Admin,
    /// Treating dentist
    Dentist,
    /// Front-desk and back-office staff
    Staff,
    /// Patient using the self-service portal
    Patient,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Self; 4] = [Self::Admin, Self::Dentist, Self::Staff, Self::Patient];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Dentist => "dentist",
            Self::Staff => "staff",
            Self::Patient => "patient",
        }
    }

    /// Parse a canonical role name. Returns `None` for anything else.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PolicyError::UnknownRole(s.to_string()))
    }
}
