use super::*;

// =============================================================================
// from_values
// =============================================================================

#[test]
fn defaults_listen_on_all_interfaces() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_addr: None });
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_override_is_parsed() {
    let cfg = ServerConfig::from_values(Some(" 8088 "), None).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8088");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some(""), Some("  ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_addr.is_none());
}

#[test]
fn site_addr_takes_precedence_over_port() {
    let cfg = ServerConfig::from_values(Some("8088"), Some("127.0.0.1:4000")).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("http"), None),
        Err(ConfigError::InvalidPort { value: "http".to_owned() })
    );
    assert_eq!(
        ServerConfig::from_values(Some("70000"), None),
        Err(ConfigError::InvalidPort { value: "70000".to_owned() })
    );
    assert_eq!(
        ServerConfig::from_values(None, Some("localhost")),
        Err(ConfigError::InvalidSiteAddr { value: "localhost".to_owned() })
    );
}

// =============================================================================
// from_env — env manipulation requires unsafe in edition 2024.
// =============================================================================

#[test]
fn from_env_reads_port_and_site_addr() {
    unsafe {
        std::env::set_var("PORT", "5050");
        std::env::remove_var("HOMEFIX_SITE_ADDR");
    }
    assert_eq!(ServerConfig::from_env().unwrap().bind_addr().to_string(), "0.0.0.0:5050");

    unsafe { std::env::set_var("HOMEFIX_SITE_ADDR", "127.0.0.1:6060") };
    assert_eq!(ServerConfig::from_env().unwrap().bind_addr().to_string(), "127.0.0.1:6060");

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("HOMEFIX_SITE_ADDR");
    }
}
