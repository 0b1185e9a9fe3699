//! Integration tests for client configuration.
//!
//! These tests exercise the public configuration API the way an application
//! wires it up: validated newtypes, the builder, and serde round-trips of the
//! base URL from a settings document.

use serde::Deserialize;
use testrail_api::{
    ApiClient, BaseUrl, ConfigError, Credentials, Password, TestRailConfig, Username,
};

#[derive(Deserialize)]
struct Settings {
    base_url: BaseUrl,
    user: String,
    password: String,
}

#[test]
fn test_config_from_deserialized_settings() {
    let settings: Settings = serde_json::from_str(
        r#"{"base_url":"https://example.testrail.io/","user":"qa@example.com","password":"key"}"#,
    )
    .unwrap();

    let config = TestRailConfig::builder()
        .base_url(settings.base_url)
        .credentials(Credentials::new(
            Username::new(settings.user).unwrap(),
            Password::new(settings.password).unwrap(),
        ))
        .build()
        .unwrap();

    assert_eq!(config.base_url().as_ref(), "https://example.testrail.io");
    assert_eq!(
        config.credentials().unwrap().username().as_ref(),
        "qa@example.com"
    );
}

#[test]
fn test_invalid_base_url_in_settings_is_rejected() {
    let result: Result<Settings, _> = serde_json::from_str(
        r#"{"base_url":"example.testrail.io","user":"qa","password":"key"}"#,
    );

    let error = result.err().unwrap();
    assert!(error.to_string().contains("Invalid base URL"));
}

#[test]
fn test_base_url_with_query_or_fragment_in_settings_is_rejected() {
    let result: Result<Settings, _> = serde_json::from_str(
        r#"{"base_url":"https://example.testrail.io/x?y=1#frag","user":"qa","password":"key"}"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_username_with_colon_is_rejected() {
    assert_eq!(
        Username::new("qa:lead").unwrap_err(),
        ConfigError::ColonInUsername
    );
}

#[test]
fn test_empty_credentials_are_rejected() {
    assert_eq!(Username::new("").unwrap_err(), ConfigError::EmptyUsername);
    assert_eq!(Password::new("").unwrap_err(), ConfigError::EmptyPassword);
}

#[test]
fn test_missing_base_url_is_reported() {
    let error = TestRailConfig::builder().build().unwrap_err();
    assert!(error.to_string().contains("base_url"));
}

#[test]
fn test_clients_for_different_installations_are_independent() {
    let first = TestRailConfig::builder()
        .base_url(BaseUrl::new("https://one.testrail.io").unwrap())
        .build()
        .unwrap();
    let second = TestRailConfig::builder()
        .base_url(BaseUrl::new("http://two.internal:8080/testrail").unwrap())
        .credentials(Credentials::new(
            Username::new("user").unwrap(),
            Password::new("pass").unwrap(),
        ))
        .build()
        .unwrap();

    let client_one = ApiClient::new(&first);
    let client_two = ApiClient::new(&second);

    assert_eq!(
        client_one.endpoint_url("get_projects"),
        "https://one.testrail.io/index.php?/api/v2/get_projects"
    );
    assert_eq!(
        client_two.endpoint_url("get_projects"),
        "http://two.internal:8080/testrail/index.php?/api/v2/get_projects"
    );
    assert!(!client_one.default_headers().contains_key("Authorization"));
    assert_eq!(
        client_two.default_headers().get("Authorization"),
        Some(&"Basic dXNlcjpwYXNz".to_string())
    );
}
