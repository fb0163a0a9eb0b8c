use super::*;

#[test]
fn session_probe_failed_message_formats_status() {
    assert_eq!(session_probe_failed_message(401), "session probe failed: 401");
}

#[test]
fn redirect_failed_message_names_the_entry_point() {
    assert_eq!(redirect_failed_message("blocked"), "could not open /auth/google: blocked");
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_current_user_is_none_outside_the_browser() {
    assert!(futures::executor::block_on(fetch_current_user()).is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn google_redirect_is_unavailable_outside_the_browser() {
    assert_eq!(redirect_to_google_sign_in(), Err(SignInError::Unavailable));
}
