use super::*;

#[test]
fn from_values_defaults() {
    let cfg = ServerConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg.bind, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    assert_eq!(cfg.index_html(), PathBuf::from("client/dist/index.html"));
}

#[test]
fn from_values_reads_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 "), Some("/srv/tarsila")).unwrap();
    assert_eq!(cfg.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.dist_dir, PathBuf::from("/srv/tarsila"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some(""), Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::from_values(None, None, None).unwrap());
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(None, Some("http"), None),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_values(None, Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn invalid_bind_addr_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("localhost"), None, None),
        Err(ConfigError::InvalidBindAddr("localhost".to_owned()))
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("x".to_owned()).to_string(), "invalid PORT: \"x\"");
}
