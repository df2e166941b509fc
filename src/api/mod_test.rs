use super::{Config, DEFAULT_PORT};
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.cors_origins, vec!["*".to_string()]);
}

#[test]
fn test_parse_origins_trims_and_drops_blanks() {
    assert_eq!(
        Config::parse_origins(" https://a.example , ,https://b.example"),
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
    assert!(Config::parse_origins("").is_empty());
}
