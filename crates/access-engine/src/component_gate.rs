//! Component-level access gate
//!
//! Guards a fragment of a view with one permission. The outcome is a single
//! [`Rendered`] value, so the primary fragment and the fallback can never
//! both be produced.

use core_access::{Authorizer, Permission, Role};

/// What a component gate produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    /// The guarded fragment
    Primary(T),
    /// The fallback fragment
    Fallback(T),
    /// Nothing at all
    Nothing,
}

impl<T> Rendered<T> {
    /// The produced fragment, whichever it was
    pub fn into_inner(self) -> Option<T> {
        match self {
            Self::Primary(value) | Self::Fallback(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Whether the guarded fragment was produced
    pub const fn is_primary(&self) -> bool {
        matches!(self, Self::Primary(_))
    }
}

/// Renders a fragment only for roles holding `required`
#[derive(Debug, Clone, Copy)]
pub struct ComponentGate<A> {
    authorizer: A,
    required: Permission,
}

impl<A: Authorizer> ComponentGate<A> {
    /// Create a gate requiring `required`
    pub const fn new(authorizer: A, required: Permission) -> Self {
        Self {
            authorizer,
            required,
        }
    }

    /// Permission this gate requires
    pub const fn required(&self) -> Permission {
        self.required
    }

    /// Whether `role` passes; a session without a role never does
    pub fn is_permitted(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.authorizer.is_permitted(role, self.required))
    }

    /// Primary fragment if permitted, otherwise nothing
    pub fn render<T>(&self, role: Option<Role>, primary: impl FnOnce() -> T) -> Rendered<T> {
        if self.is_permitted(role) {
            Rendered::Primary(primary())
        } else {
            Rendered::Nothing
        }
    }

    /// Primary fragment if permitted, otherwise the fallback
    pub fn render_with_fallback<T>(
        &self,
        role: Option<Role>,
        primary: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> Rendered<T> {
        if self.is_permitted(role) {
            Rendered::Primary(primary())
        } else {
            tracing::debug!(?role, permission = %self.required, "component gate fallback");
            Rendered::Fallback(fallback())
        }
    }
}
