//! Current-role source for the access gates

use core_access::Role;

/// What the identity provider currently knows about the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityState {
    /// Resolution has not finished yet
    Resolving,
    /// Resolution finished and there is no role
    Anonymous,
    /// Resolution finished with a role
    Authenticated(Role),
}

/// External source of the current role
///
/// Resolution itself (tokens, sessions, storage) lives outside this crate.
pub trait IdentityProvider {
    /// Current resolution state
    fn state(&self) -> IdentityState;

    /// Current role, if resolved to one
    fn current_role(&self) -> Option<Role> {
        match self.state() {
            IdentityState::Authenticated(role) => Some(role),
            IdentityState::Resolving | IdentityState::Anonymous => None,
        }
    }

    /// Whether resolution is still in progress
    fn is_resolving(&self) -> bool {
        self.state() == IdentityState::Resolving
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn state(&self) -> IdentityState {
        (**self).state()
    }
}

/// Fixed identity, for tests and non-interactive callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticIdentity(pub IdentityState);

impl StaticIdentity {
    /// Identity still resolving
    pub const RESOLVING: Self = Self(IdentityState::Resolving);
    /// Resolved with no role
    pub const ANONYMOUS: Self = Self(IdentityState::Anonymous);

    /// Resolved to `role`
    #[must_use]
    pub const fn role(role: Role) -> Self {
        Self(IdentityState::Authenticated(role))
    }

    /// Resolve a role name; unknown names become anonymous
    #[must_use]
    pub fn from_role_name(name: &str) -> Self {
        Role::parse(name).map_or(Self::ANONYMOUS, Self::role)
    }
}

impl IdentityProvider for StaticIdentity {
    fn state(&self) -> IdentityState {
        self.0
    }
}
