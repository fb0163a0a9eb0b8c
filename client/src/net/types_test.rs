use super::*;

#[test]
fn user_deserializes_minimal_session_payload() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Anita"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Anita");
    assert_eq!(user.email, None);
    assert_eq!(user.avatar_url, None);
    assert_eq!(user.auth_method, "google");
}

#[test]
fn user_ignores_unknown_fields() {
    let raw = r##"{"id":"u2","name":"Tarsila","email":"t@example.com","color":"#fff","auth_method":"session"}"##;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.email.as_deref(), Some("t@example.com"));
    assert_eq!(user.auth_method, "session");
}
