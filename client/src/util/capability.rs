//! Capability seams consumed by the landing flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page never reaches for auth, the loader overlay, or the router
//! directly. It receives them as `Arc<dyn ...>` capabilities (through Leptos
//! context in the app, explicitly in tests) so fakes can stand in for the
//! identity provider and the browser.
//!
//! Implementations backed by signals read them with tracking, so calling
//! [`AuthCapability::is_authenticated`] inside an effect subscribes to it.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use thiserror::Error;

use crate::state::auth::AuthState;
use crate::state::loader::LoaderState;

/// Why a sign-in attempt was rejected. The page treats every variant alike.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("sign-in cancelled by the user")]
    Cancelled,
    #[error("sign-in is not available in this environment")]
    Unavailable,
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Eventual result of [`AuthCapability::sign_in`].
pub type SignInFuture = LocalBoxFuture<'static, Result<(), SignInError>>;

/// Session view plus the sign-in action of the identity provider.
pub trait AuthCapability: Send + Sync {
    fn is_authenticated(&self) -> bool;

    /// The session is still being looked up; `is_authenticated` may flip.
    fn is_resolving(&self) -> bool {
        false
    }

    /// Start an identity exchange. Resolves once the provider accepted the
    /// attempt; rejects on failure or cancellation.
    fn sign_in(&self) -> SignInFuture;
}

/// Process-wide loading overlay. Both toggles are idempotent.
pub trait LoaderCapability: Send + Sync {
    fn show_loader(&self);
    fn hide_loader(&self);
}

/// Client-side route changes.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
}

// =============================================================================
// SESSION AUTH
// =============================================================================

/// Auth capability backed by the shared [`AuthState`] signal.
#[derive(Clone, Copy)]
pub struct SessionAuth {
    state: RwSignal<AuthState>,
}

impl SessionAuth {
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self { state }
    }
}

impl AuthCapability for SessionAuth {
    fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    fn is_resolving(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    fn sign_in(&self) -> SignInFuture {
        let outcome = crate::net::api::redirect_to_google_sign_in();
        if let Err(e) = &outcome {
            log::warn!("google sign-in redirect failed: {e}");
        }
        Box::pin(futures::future::ready(outcome))
    }
}

// =============================================================================
// SIGNAL LOADER
// =============================================================================

/// Loader capability backed by the shared [`LoaderState`] signal that
/// `LoaderOverlay` renders.
#[derive(Clone, Copy)]
pub struct SignalLoader {
    state: RwSignal<LoaderState>,
}

impl SignalLoader {
    pub fn new(state: RwSignal<LoaderState>) -> Self {
        Self { state }
    }
}

impl LoaderCapability for SignalLoader {
    fn show_loader(&self) {
        set_visible(self.state, true);
    }

    fn hide_loader(&self) {
        set_visible(self.state, false);
    }
}

fn set_visible(state: RwSignal<LoaderState>, visible: bool) {
    if state.with_untracked(|s| s.visible) != visible {
        state.update(|s| s.visible = visible);
    }
}

// =============================================================================
// ROUTER NAVIGATOR
// =============================================================================

/// Navigator wrapping the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }

    pub fn shared(navigate: F) -> Arc<dyn Navigator> {
        Arc::new(Self::new(navigate))
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync + 'static,
{
    fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}
