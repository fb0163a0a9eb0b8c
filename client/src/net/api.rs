//! REST helpers for the external identity service.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net` and browser redirects
//! via `web-sys`. Native builds (tests, tooling): stubs reporting no session,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a missing or
//! broken session endpoint degrades to "signed out" rather than crashing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::util::capability::SignInError;

/// Session probe exposed by the identity service.
pub const CURRENT_USER_PATH: &str = "/api/auth/me";

/// Entry point of the Google OAuth flow. The provider redirects back to `/`
/// once the identity exchange completes.
pub const GOOGLE_SIGN_IN_PATH: &str = "/auth/google";

#[cfg(any(test, feature = "csr"))]
fn session_probe_failed_message(status: u16) -> String {
    format!("session probe failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn redirect_failed_message(detail: &str) -> String {
    format!("could not open {GOOGLE_SIGN_IN_PATH}: {detail}")
}

/// Fetch the currently authenticated user from [`CURRENT_USER_PATH`].
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get(CURRENT_USER_PATH).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session probe unreachable: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("{}", session_probe_failed_message(resp.status()));
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Hand the browser to the Google sign-in entry point.
///
/// # Errors
///
/// Returns [`SignInError::Unavailable`] when there is no browser window and
/// [`SignInError::Provider`] when the redirect is refused.
pub fn redirect_to_google_sign_in() -> Result<(), SignInError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(SignInError::Unavailable)?;
        window
            .location()
            .set_href(GOOGLE_SIGN_IN_PATH)
            .map_err(|e| SignInError::Provider(redirect_failed_message(&format!("{e:?}"))))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(SignInError::Unavailable)
    }
}
