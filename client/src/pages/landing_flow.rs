//! Authenticated-entry flow behind the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LandingPage` renders; this module decides. It owns the ordering between
//! the loader overlay, the sign-in attempt and the `/chat` redirect, written
//! against capabilities so it runs without a browser.
//!
//! DESIGN
//! ======
//! A sign-in attempt is split at its only suspension point:
//! [`LandingFlow::begin_login`] runs synchronously on click and may hand back
//! the pending sign-in future; [`LandingFlow::finish_login`] applies its
//! outcome. [`wire_ctas`] glues both halves to the page's state signal and
//! hands every CTA the same callback and disabled signal; the outcome is
//! dropped if the page has been unmounted meanwhile.
//!
//! On success the loader is not hidden: it stays up until the destination
//! route hides it.

#[cfg(test)]
#[path = "landing_flow_test.rs"]
mod landing_flow_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::util::auth::{CHAT_ROUTE, should_redirect_on_auth};
use crate::util::capability::{AuthCapability, LoaderCapability, Navigator, SignInError, SignInFuture};

/// Message shown under both CTAs after a rejected sign-in.
pub const SIGN_IN_FAILED: &str = "Erro ao tentar logar.";

/// Transient per-mount state of the landing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Set after a rejected attempt, cleared when the next one starts.
    pub error_msg: Option<String>,
    /// A sign-in future is pending.
    pub in_flight: bool,
}

impl PageState {
    /// Every sign-in affordance shares this disabled state.
    pub fn cta_disabled(&self, authenticated: bool) -> bool {
        authenticated || self.in_flight
    }
}

/// The capabilities the landing page runs against.
#[derive(Clone)]
pub struct LandingFlow {
    auth: Arc<dyn AuthCapability>,
    loader: Arc<dyn LoaderCapability>,
    navigator: Arc<dyn Navigator>,
}

impl LandingFlow {
    pub fn new(
        auth: Arc<dyn AuthCapability>,
        loader: Arc<dyn LoaderCapability>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { auth, loader, navigator }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Disabled state shared by every CTA. Also disabled while the session is
    /// still being resolved, so a signed-in visitor is not sent to sign in again.
    pub fn cta_disabled(&self, state: &PageState) -> bool {
        self.auth.is_resolving() || state.cta_disabled(self.auth.is_authenticated())
    }

    /// One run of the page's mount/observe effect.
    ///
    /// `previous` is the authentication value returned by the prior run, `None`
    /// on mount. The first run hides any overlay inherited from the previous
    /// route before it may redirect.
    pub fn sync(&self, previous: Option<bool>) -> bool {
        if previous.is_none() {
            self.loader.hide_loader();
        }
        let now = self.auth.is_authenticated();
        if should_redirect_on_auth(previous, now) {
            self.navigator.push(CHAT_ROUTE);
        }
        now
    }

    /// Synchronous half of the click handler shared by every CTA.
    ///
    /// Returns the pending sign-in when an attempt actually started. Already
    /// authenticated visitors only get the loader; the redirect takes it from
    /// there. A click landing while an attempt is pending starts nothing.
    pub fn begin_login(&self, state: &mut PageState) -> Option<SignInFuture> {
        self.loader.show_loader();
        if self.auth.is_authenticated() || state.in_flight {
            return None;
        }
        state.error_msg = None;
        state.in_flight = true;
        Some(self.auth.sign_in())
    }

    /// Apply the outcome of the attempt started by [`Self::begin_login`].
    ///
    /// The attempt is over either way. Only a rejection hides the loader.
    pub fn finish_login(&self, state: &mut PageState, outcome: Result<(), SignInError>) {
        if outcome.is_err() {
            self.loader.hide_loader();
            state.error_msg = Some(SIGN_IN_FAILED.to_owned());
        }
        state.in_flight = false;
    }

    /// Full attempt against a plain [`PageState`]. The page itself drives the
    /// two halves around a signal instead.
    pub async fn handle_login(&self, state: &mut PageState) {
        let Some(pending) = self.begin_login(state) else {
            return;
        };
        let outcome = pending.await;
        self.finish_login(state, outcome);
    }
}

/// The one action and disabled state every CTA on the page is bound to.
#[derive(Clone, Copy)]
pub struct CtaWiring {
    pub on_login: Callback<()>,
    pub disabled: Signal<bool>,
}

/// Bind `flow` to the page's state signal.
///
/// `spawn` runs the pending sign-in on a local task (`spawn_local` in the
/// browser). An outcome arriving after `page` was disposed is dropped.
pub fn wire_ctas<S>(flow: LandingFlow, page: RwSignal<PageState>, spawn: S) -> CtaWiring
where
    S: Fn(LocalBoxFuture<'static, ()>) + Send + Sync + 'static,
{
    let disabled_flow = flow.clone();
    let disabled = Signal::derive(move || page.with(|state| disabled_flow.cta_disabled(state)));

    let on_login = Callback::new(move |()| {
        let Some(pending) = page.try_update(|state| flow.begin_login(state)).flatten() else {
            return;
        };
        let flow = flow.clone();
        spawn(Box::pin(async move {
            let outcome = pending.await;
            page.try_update(|state| flow.finish_login(state, outcome));
        }));
    });

    CtaWiring { on_login, disabled }
}
