use lifeline_client::application::config::Config;
use lifeline_client::utils::config::{
    get_env_or_default, get_env_or_none, get_env_url_or_default, normalize_base_url,
};
use std::env;

#[test]
fn test_get_env_or_default_parses_value() {
    unsafe { env::set_var("LIFELINE_TEST_TIMEOUT_PARSE", "25") };
    let value: u64 = get_env_or_default("LIFELINE_TEST_TIMEOUT_PARSE", 10);
    assert_eq!(value, 25);
    unsafe { env::remove_var("LIFELINE_TEST_TIMEOUT_PARSE") };
}

#[test]
fn test_get_env_or_default_falls_back_on_garbage() {
    unsafe { env::set_var("LIFELINE_TEST_TIMEOUT_GARBAGE", "soon") };
    let value: u64 = get_env_or_default("LIFELINE_TEST_TIMEOUT_GARBAGE", 10);
    assert_eq!(value, 10);
    unsafe { env::remove_var("LIFELINE_TEST_TIMEOUT_GARBAGE") };
}

#[test]
fn test_get_env_or_none_missing() {
    let value: Option<String> = get_env_or_none("LIFELINE_TEST_DEFINITELY_UNSET");
    assert!(value.is_none());
}

#[test]
fn test_blank_values_count_as_unset() {
    unsafe { env::set_var("LIFELINE_TEST_BLANK", "   ") };
    let value: Option<String> = get_env_or_none("LIFELINE_TEST_BLANK");
    assert!(value.is_none());
    assert_eq!(get_env_or_default("LIFELINE_TEST_BLANK", 7u32), 7);
    unsafe { env::remove_var("LIFELINE_TEST_BLANK") };
}

#[test]
fn test_normalize_base_url() {
    assert_eq!(normalize_base_url(" http://host/api/ "), "http://host/api");
    assert_eq!(normalize_base_url("http://host/api///"), "http://host/api");
    assert_eq!(normalize_base_url("http://host/api"), "http://host/api");
}

#[test]
fn test_env_url_is_normalized() {
    unsafe { env::set_var("LIFELINE_TEST_API_BASE", "https://books.example.com/api/") };
    assert_eq!(
        get_env_url_or_default("LIFELINE_TEST_API_BASE", "http://localhost:8000/api"),
        "https://books.example.com/api"
    );
    unsafe { env::remove_var("LIFELINE_TEST_API_BASE") };
    assert_eq!(
        get_env_url_or_default("LIFELINE_TEST_API_BASE", "http://localhost:8000/api/"),
        "http://localhost:8000/api"
    );
}

#[test]
fn test_config_with_base_url_defaults() {
    let config = Config::with_base_url("http://127.0.0.1:9000/api/");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:9000/api");
    assert_eq!(config.rest_api.timeout, 10);
    assert_eq!(config.session.inactivity_minutes, 30);
    assert_eq!(config.inactivity_timeout().as_secs(), 1800);
    assert!(config.credentials.is_none());
}

#[test]
fn test_config_serialization_skips_credentials() {
    let mut config = Config::with_base_url("http://localhost:8000/api");
    config.credentials = Some(lifeline_client::model::auth::Credentials::new("a", "b"));
    let json = serde_json::to_value(&config).unwrap();
    assert!(json.get("credentials").is_none());
    assert_eq!(json["rest_api"]["base_url"], "http://localhost:8000/api");
}
