use std::sync::Mutex;

use super::*;

#[test]
fn sign_in_error_messages_are_descriptive() {
    assert_eq!(SignInError::Cancelled.to_string(), "sign-in cancelled by the user");
    assert_eq!(
        SignInError::Provider("popup closed".to_owned()).to_string(),
        "identity provider error: popup closed"
    );
}

#[test]
fn router_navigator_pushes_with_default_options() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = seen.clone();
    let navigator = RouterNavigator::new(move |path: &str, _opts: NavigateOptions| {
        sink.lock().unwrap().push(path.to_owned());
    });
    navigator.push("/chat");
    navigator.push("/chat");
    assert_eq!(*seen.lock().unwrap(), vec!["/chat".to_owned(), "/chat".to_owned()]);
}

#[test]
fn router_navigator_is_shareable_as_capability() {
    let navigator = RouterNavigator::shared(|_path: &str, _opts: NavigateOptions| {});
    navigator.push("/");
}

// =============================================================
// Signal-backed capabilities
// =============================================================

fn user() -> crate::net::types::User {
    crate::net::types::User {
        id: "u1".to_owned(),
        name: "Anita".to_owned(),
        email: None,
        avatar_url: None,
        auth_method: "google".to_owned(),
    }
}

#[test]
fn signal_loader_toggles_are_idempotent() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(LoaderState::default());
        let loader = SignalLoader::new(state);

        loader.hide_loader();
        assert!(!state.get_untracked().visible);

        loader.show_loader();
        loader.show_loader();
        assert!(state.get_untracked().visible);

        loader.hide_loader();
        loader.hide_loader();
        assert!(!state.get_untracked().visible);
    });
}

#[test]
fn session_auth_projects_auth_state() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(AuthState::probing());
        let auth = SessionAuth::new(state);
        assert!(auth.is_resolving());
        assert!(!auth.is_authenticated());

        state.set(AuthState::resolved(None));
        assert!(!auth.is_resolving());
        assert!(!auth.is_authenticated());

        state.set(AuthState::resolved(Some(user())));
        assert!(!auth.is_resolving());
        assert!(auth.is_authenticated());
    });
}

#[cfg(not(feature = "csr"))]
#[test]
fn session_auth_sign_in_rejects_outside_the_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = SessionAuth::new(RwSignal::new(AuthState::resolved(None)));
        let outcome = futures::executor::block_on(auth.sign_in());
        assert_eq!(outcome, Err(SignInError::Unavailable));
    });
}
