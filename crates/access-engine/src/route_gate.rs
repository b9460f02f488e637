//! Route-level access gate
//!
//! A gate wraps a whole view. While the identity provider is resolving it
//! renders nothing; once resolved it either renders the view or redirects.
//!
//! ## Mount lifecycle
//!
//! `RouteGate` holds configuration only. Each time the view mounts, call
//! [`RouteGate::mount`] and drive the returned [`RouteMount`] with
//! [`RouteMount::poll`]. A mount:
//! - starts in `Loading`
//! - fires at most one redirect, and only while mounted
//! - stays `Unauthorized` once it got there; a fresh mount re-evaluates

use crate::identity::{IdentityProvider, IdentityState};
use core_access::Role;
use std::collections::BTreeSet;

/// Where an unauthorized visitor is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// No role: back to the login page
    Login,
    /// Role not allowed on this route: to the default landing page
    Landing,
}

/// Route paths used for redirects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    /// Login page
    pub login_path: String,
    /// Default authorized view
    pub landing_path: String,
}

impl RedirectTargets {
    /// Default login path
    pub const DEFAULT_LOGIN_PATH: &'static str = "/login";
    /// Default landing path
    pub const DEFAULT_LANDING_PATH: &'static str = "/dashboard";

    /// Path for `redirect`
    #[must_use]
    pub fn path(&self, redirect: Redirect) -> &str {
        match redirect {
            Redirect::Login => &self.login_path,
            Redirect::Landing => &self.landing_path,
        }
    }
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            login_path: Self::DEFAULT_LOGIN_PATH.to_string(),
            landing_path: Self::DEFAULT_LANDING_PATH.to_string(),
        }
    }
}

/// Outcome of evaluating a route gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Identity still resolving; render nothing
    Loading,
    /// Render the view
    Authorized,
    /// Do not render; redirect instead
    Unauthorized(Redirect),
}

/// Performs route changes on behalf of the gate
pub trait Navigator {
    /// Navigate to `path`
    fn redirect(&mut self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
    fn redirect(&mut self, path: &str) {
        (**self).redirect(path);
    }
}

/// Route gate configuration: an optional role allow-list plus redirect paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGate {
    allowed_roles: Option<BTreeSet<Role>>,
    targets: RedirectTargets,
}

impl RouteGate {
    /// Gate that admits any authenticated role
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the route to `roles`
    ///
    /// An empty allow-list admits nobody.
    #[must_use]
    pub fn allow_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = Some(roles.into_iter().collect());
        self
    }

    /// Restrict the route to the named roles; unknown names are ignored
    #[must_use]
    pub fn allow_role_names<'a>(self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.allow_roles(names.into_iter().filter_map(Role::parse))
    }

    /// Use `targets` for redirects
    #[must_use]
    pub fn with_targets(mut self, targets: RedirectTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Redirect paths in use
    #[must_use]
    pub fn targets(&self) -> &RedirectTargets {
        &self.targets
    }

    /// Whether `role` passes the allow-list
    #[must_use]
    pub fn admits(&self, role: Role) -> bool {
        self.allowed_roles
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&role))
    }

    /// Evaluate the gate for an identity state, without side effects
    #[must_use]
    pub fn decide(&self, identity: IdentityState) -> GateState {
        match identity {
            IdentityState::Resolving => GateState::Loading,
            IdentityState::Anonymous => GateState::Unauthorized(Redirect::Login),
            IdentityState::Authenticated(role) if self.admits(role) => GateState::Authorized,
            IdentityState::Authenticated(_) => GateState::Unauthorized(Redirect::Landing),
        }
    }

    /// Start a mount of the guarded view
    #[must_use]
    pub fn mount(&self) -> RouteMount<'_> {
        RouteMount {
            gate: self,
            state: GateState::Loading,
            mounted: true,
            redirected: false,
        }
    }
}

/// One mount of a gated view
#[derive(Debug)]
pub struct RouteMount<'g> {
    gate: &'g RouteGate,
    state: GateState,
    mounted: bool,
    redirected: bool,
}

impl<'g> RouteMount<'g> {
    /// Current state of this mount
    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Whether the view is still mounted
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Re-evaluate against `identity`, redirecting through `navigator` if needed
    ///
    /// Once `Unauthorized`, the mount stays there. After [`unmount`](Self::unmount)
    /// nothing changes and no redirect fires.
    pub fn poll<I, N>(&mut self, identity: &I, navigator: &mut N) -> GateState
    where
        I: IdentityProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        if !self.mounted || matches!(self.state, GateState::Unauthorized(_)) {
            return self.state;
        }

        let next = self.gate.decide(identity.state());
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "route gate transition");
        }
        self.state = next;

        if let GateState::Unauthorized(redirect) = next {
            if !self.redirected {
                self.redirected = true;
                let path = self.gate.targets.path(redirect);
                tracing::warn!(?redirect, path, "route gate redirecting");
                navigator.redirect(path);
            }
        }

        self.state
    }

    /// Produce the view, only when `Authorized`
    pub fn render<T>(&self, children: impl FnOnce() -> T) -> Option<T> {
        (self.mounted && self.state == GateState::Authorized).then(children)
    }

    /// Tear the mount down; later polls are no-ops
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
