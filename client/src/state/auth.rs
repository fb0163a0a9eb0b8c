//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the `SessionAuth` capability. The landing page only ever sees the
//! `is_authenticated` projection of it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the session probe is outstanding.
    pub fn probing() -> Self {
        Self { user: None, loading: true }
    }

    /// Settled state once the session probe answered.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
