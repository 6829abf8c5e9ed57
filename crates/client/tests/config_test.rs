use std::collections::HashMap;

use pretty_assertions::assert_eq;
use slotbook_client::ClientConfig;
use tracing::Level;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config =
        ClientConfig::from_lookup(lookup(&[("SLOTBOOK_API_URL", "http://localhost:5000/api/")]))
            .unwrap();

    assert_eq!(config.api_url, "http://localhost:5000/api");
    assert_eq!(config.api_token, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(
        config.endpoint("/therapist/slots/weekly"),
        "http://localhost:5000/api/therapist/slots/weekly"
    );
}

#[test]
fn test_all_values() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("SLOTBOOK_API_URL", "https://api.example.com"),
        ("SLOTBOOK_API_TOKEN", "secret"),
        ("SLOTBOOK_REQUEST_TIMEOUT_SECONDS", "5"),
        ("LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_missing_url() {
    let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();

    assert!(err.to_string().contains("SLOTBOOK_API_URL"));
}

#[test]
fn test_invalid_timeout() {
    let err = ClientConfig::from_lookup(lookup(&[
        ("SLOTBOOK_API_URL", "http://localhost"),
        ("SLOTBOOK_REQUEST_TIMEOUT_SECONDS", "soon"),
    ]))
    .unwrap_err();

    assert!(err.to_string().contains("SLOTBOOK_REQUEST_TIMEOUT_SECONDS"));
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("SLOTBOOK_API_URL", "http://localhost"),
        ("LOG_LEVEL", "verbose"),
    ]))
    .unwrap();

    assert_eq!(config.log_level, Level::INFO);
}
