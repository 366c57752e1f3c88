use std::collections::HashMap;

use radref_api::config::{ApiConfig, ConfigError, LogFormat};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn reads_both_variables() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("RADREF_BIND_ADDR", "127.0.0.1:8080"),
        ("RADREF_LOG_FORMAT", "Pretty"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn empty_values_take_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("RADREF_BIND_ADDR", "  "),
        ("RADREF_LOG_FORMAT", ""),
    ]))
    .unwrap();
    assert_eq!(config, ApiConfig::from_lookup(lookup(&[])).unwrap());
}

#[test]
fn rejects_invalid_values() {
    assert_eq!(
        ApiConfig::from_lookup(lookup(&[("RADREF_BIND_ADDR", "localhost")])),
        Err(ConfigError::BindAddr {
            var: "RADREF_BIND_ADDR",
            value: "localhost".to_string(),
        })
    );

    let err = ApiConfig::from_lookup(lookup(&[("RADREF_LOG_FORMAT", "xml")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RADREF_LOG_FORMAT: expected 'json' or 'pretty', got 'xml'"
    );
}
