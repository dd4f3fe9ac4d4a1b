use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn from_env_reads_overrides_and_defaults() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4321");
        std::env::set_var("SITE_ROOT", "/srv/site");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: 4321, site_root: Some("/srv/site".to_owned()) });
    assert_eq!(cfg.bind_addr().port(), 4321);

    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: None });
    assert!(cfg.bind_addr().ip().is_unspecified());
}
