//! Configuration management for the post search server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file silently if present.

use crate::error::{ConfigError, ConfigResult};
use crate::matching::FuzzyOptions;
use crate::search::SearchSettings;
use std::env;

/// Configuration for the post search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store base URL
    pub store_api_url: String,

    /// Document store API key
    pub store_api_key: String,

    /// Collection holding the posts (default: "post-v3")
    pub collection: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Characters of context around a content match (default: 100)
    pub context_radius: usize,

    /// Word-boundary search distance at snippet edges (default: 15)
    pub snap_tolerance: usize,

    /// Fuzzy score cutoff, 0.0 (exact) to 1.0 (anything) (default: 0.6)
    pub fuzzy_threshold: f64,

    /// Shortest fuzzy run kept as a match (default: 2)
    pub fuzzy_min_match_length: usize,

    /// How far a fuzzy match may spread beyond the query length (default: 200)
    pub fuzzy_distance: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `STORE_API_BASE_URL`: Base URL for the document store
    /// - `STORE_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `STORE_COLLECTION`: Collection name (default: "post-v3")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SNIPPET_CONTEXT_RADIUS`: Snippet context radius (default: 100)
    /// - `SNIPPET_SNAP_TOLERANCE`: Snippet snap tolerance (default: 15)
    /// - `FUZZY_THRESHOLD`: Fuzzy score cutoff (default: 0.6)
    /// - `FUZZY_MIN_MATCH_LENGTH`: Minimum fuzzy run length (default: 2)
    /// - `FUZZY_DISTANCE`: Fuzzy match spread (default: 200)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let store_api_url = env::var("STORE_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("STORE_API_BASE_URL".to_string()))?;

        let store_api_key = env::var("STORE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("STORE_API_KEY".to_string()))?;

        if !store_api_url.starts_with("http://") && !store_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "STORE_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if store_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "STORE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let collection = env::var("STORE_COLLECTION").unwrap_or_else(|_| "post-v3".to_string());
        if collection.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "STORE_COLLECTION".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let context_radius = Self::parse_env_usize("SNIPPET_CONTEXT_RADIUS", 100)?;
        let snap_tolerance = Self::parse_env_usize("SNIPPET_SNAP_TOLERANCE", 15)?;
        let fuzzy_threshold = Self::parse_env_f64("FUZZY_THRESHOLD", 0.6)?;
        let fuzzy_min_match_length = Self::parse_env_usize("FUZZY_MIN_MATCH_LENGTH", 2)?;
        let fuzzy_distance = Self::parse_env_usize("FUZZY_DISTANCE", 200)?;

        if !(0.0..=1.0).contains(&fuzzy_threshold) {
            return Err(ConfigError::InvalidValue {
                var: "FUZZY_THRESHOLD".to_string(),
                reason: "Must be between 0.0 and 1.0".to_string(),
            });
        }

        if fuzzy_min_match_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "FUZZY_MIN_MATCH_LENGTH".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            store_api_url,
            store_api_key,
            collection,
            request_timeout,
            context_radius,
            snap_tolerance,
            fuzzy_threshold,
            fuzzy_min_match_length,
            fuzzy_distance,
            log_level,
        })
    }

    /// Search engine settings derived from this configuration.
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            context_radius: self.context_radius,
            snap_tolerance: self.snap_tolerance,
            fuzzy: FuzzyOptions {
                threshold: self.fuzzy_threshold,
                min_match_length: self.fuzzy_min_match_length,
                distance: self.fuzzy_distance,
                ..FuzzyOptions::default()
            },
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a decimal number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_api_url: String::new(),
            store_api_key: String::new(),
            collection: "post-v3".to_string(),
            request_timeout: 10,
            context_radius: 100,
            snap_tolerance: 15,
            fuzzy_threshold: 0.6,
            fuzzy_min_match_length: 2,
            fuzzy_distance: 200,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars and removes them again on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn required(&mut self) {
            self.set("STORE_API_BASE_URL", "https://store.example.com");
            self.set("STORE_API_KEY", "test-key");
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.collection, "post-v3");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.context_radius, 100);
        assert_eq!(config.snap_tolerance, 15);
        assert_eq!(config.fuzzy_min_match_length, 2);
    }

    #[test]
    fn test_default_search_settings_match_engine_defaults() {
        assert_eq!(Config::default().search_settings(), SearchSettings::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("STORE_API_BASE_URL", "not-a-url");
        guard.set("STORE_API_KEY", "test-key");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "STORE_API_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("STORE_API_BASE_URL", "https://store.example.com");
        guard.set("STORE_API_KEY", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "STORE_API_KEY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.required();
        guard.set("STORE_COLLECTION", "drafts");
        guard.set("SNIPPET_CONTEXT_RADIUS", "40");
        guard.set("FUZZY_THRESHOLD", "0.25");

        let config = Config::from_env().unwrap();
        assert_eq!(config.store_api_url, "https://store.example.com");
        assert_eq!(config.store_api_key, "test-key");
        assert_eq!(config.collection, "drafts");

        let settings = config.search_settings();
        assert_eq!(settings.context_radius, 40);
        assert_eq!(settings.fuzzy.threshold, 0.25);
        assert!(settings.fuzzy.ignore_location);
    }

    #[test]
    #[serial]
    fn test_config_log_level() {
        let mut guard = EnvGuard::new();
        guard.required();
        env::remove_var("LOG_LEVEL");
        assert_eq!(Config::from_env().unwrap().log_level, "error");

        guard.set("LOG_LEVEL", "debug");
        assert_eq!(Config::from_env().unwrap().log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_threshold_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.required();
        guard.set("FUZZY_THRESHOLD", "1.5");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "FUZZY_THRESHOLD"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_min_match_length() {
        let mut guard = EnvGuard::new();
        guard.required();
        guard.set("FUZZY_MIN_MATCH_LENGTH", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "FUZZY_MIN_MATCH_LENGTH")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_f64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_F64_INVALID", "not-a-number");

        assert!(Config::parse_env_f64("TEST_F64_INVALID", 0.5).is_err());
    }
}
