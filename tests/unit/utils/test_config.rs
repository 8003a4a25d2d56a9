use std::env;
use wl_model::application::config::Config;
use wl_model::constants::{DEFAULT_BURST_SIZE, DEFAULT_TIMEOUT_SECS};
use wl_model::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("WL_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("WL_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("WL_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("WL_TEST_MISSING_VAR");
        let result: String = get_env_or_default("WL_TEST_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_trims_whitespace() {
    unsafe {
        env::set_var("WL_TEST_VAR_PADDED", " 42 ");
        let result: u64 = get_env_or_default("WL_TEST_VAR_PADDED", 0);
        assert_eq!(result, 42);
        env::remove_var("WL_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("WL_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("WL_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("WL_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("WL_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("WL_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));

        env::set_var("WL_TEST_VAR_OPTION", "abc");
        let result: Option<i32> = get_env_or_none("WL_TEST_VAR_OPTION");
        assert_eq!(result, None);
        env::remove_var("WL_TEST_VAR_OPTION");
    }
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("WL_REST_BASE_URL", "https://demo.wellnessliving.com");
        env::set_var("WL_RATE_LIMIT_MAX_REQUESTS", "5");
        env::set_var("WL_REST_TIMEOUT", "soon");
        env::remove_var("WL_RATE_LIMIT_BURST_SIZE");

        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "https://demo.wellnessliving.com");
        assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.rate_limiter.max_requests, 5);
        assert_eq!(config.rate_limiter.burst_size, DEFAULT_BURST_SIZE);

        let overridden = Config::with_base_url("http://127.0.0.1:1234");
        assert_eq!(overridden.rest_api.base_url, "http://127.0.0.1:1234");
        assert_eq!(overridden.rate_limiter, config.rate_limiter);

        env::remove_var("WL_REST_BASE_URL");
        env::remove_var("WL_RATE_LIMIT_MAX_REQUESTS");
        env::remove_var("WL_REST_TIMEOUT");
    }
}
