use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Anita".to_owned(),
        email: None,
        avatar_url: None,
        auth_method: "google".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_probing_is_loading_and_signed_out() {
    let state = AuthState::probing();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Session resolution
// =============================================================

#[test]
fn resolved_with_user_is_authenticated() {
    let state = AuthState::resolved(Some(user()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolved_without_user_stays_signed_out() {
    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
