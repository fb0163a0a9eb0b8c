//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes reached by signed-in users should redirect on the signed-out →
//! signed-in transition only, never on every re-render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Route that receives authenticated visitors.
pub const CHAT_ROUTE: &str = "/chat";

/// Whether a redirect is due, given the value seen on the previous run
/// (`None` on the first run) and the current one.
pub fn should_redirect_on_auth(previous: Option<bool>, now: bool) -> bool {
    now && previous != Some(true)
}

