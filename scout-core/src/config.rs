use std::fmt;

use scout_common::{COLLECTION_PAGE_SIZE, FALLBACK_BARCODE};
use thiserror::Error;
use tracing::info;

use crate::discogs::{DEFAULT_USER_AGENT, DISCOGS_API_URL};
use crate::search::PER_PAGE;

pub const TOKEN_VAR: &str = "SCOUT_DISCOGS_TOKEN";
pub const DEMO_MODE_VAR: &str = "SCOUT_DEMO_MODE";
pub const API_BASE_URL_VAR: &str = "SCOUT_API_BASE_URL";

/// QuaggaJS build injected on first scan
pub const DEFAULT_DECODER_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/quagga/0.12.1/quagga.min.js";

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Clone, PartialEq)]
pub struct ScoutConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub results_per_page: u32,
    pub collection_page_size: usize,
    /// Token filled into the header field at startup. Empty means none.
    pub initial_token: String,
    pub start_in_demo: bool,
    pub decoder_script_url: String,
    /// Barcode searched by "Use test data" in the scanner
    pub fallback_barcode: String,
}

impl fmt::Debug for ScoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoutConfig")
            .field("api_base_url", &self.api_base_url)
            .field("user_agent", &self.user_agent)
            .field("results_per_page", &self.results_per_page)
            .field("collection_page_size", &self.collection_page_size)
            .field(
                "initial_token",
                &if self.initial_token.is_empty() {
                    ""
                } else {
                    "[REDACTED]"
                },
            )
            .field("start_in_demo", &self.start_in_demo)
            .field("decoder_script_url", &self.decoder_script_url)
            .field("fallback_barcode", &self.fallback_barcode)
            .finish()
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            api_base_url: DISCOGS_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            results_per_page: PER_PAGE,
            collection_page_size: COLLECTION_PAGE_SIZE,
            initial_token: String::new(),
            start_in_demo: false,
            decoder_script_url: DEFAULT_DECODER_SCRIPT_URL.to_string(),
            fallback_barcode: FALLBACK_BARCODE.to_string(),
        }
    }
}

impl ScoutConfig {
    /// Settings baked in at compile time. This is what the browser build uses,
    /// since it has no process environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| {
            match key {
                TOKEN_VAR => option_env!("SCOUT_DISCOGS_TOKEN"),
                DEMO_MODE_VAR => option_env!("SCOUT_DEMO_MODE"),
                API_BASE_URL_VAR => option_env!("SCOUT_API_BASE_URL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Settings from the process environment, after loading `.env` if present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            info!("Loaded .env");
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup. Unset and empty variables keep defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(token) = get(TOKEN_VAR) {
            config.initial_token = token;
        }
        if let Some(value) = get(DEMO_MODE_VAR) {
            config.start_in_demo = parse_bool(DEMO_MODE_VAR, &value)?;
        }
        if let Some(url) = get(API_BASE_URL_VAR) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        info!(
            "Config: api={}, demo={}, token={}",
            config.api_base_url,
            config.start_in_demo,
            if config.initial_token.is_empty() {
                "none"
            } else {
                "set"
            }
        );
        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ScoutConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ScoutConfig::default());
        assert_eq!(config.api_base_url, "https://api.discogs.com");
        assert_eq!(config.results_per_page, 25);
        assert_eq!(config.collection_page_size, 25);
        assert_eq!(config.fallback_barcode, "88883716861");
        assert!(config.initial_token.is_empty());
        assert!(!config.start_in_demo);
    }

    #[test]
    fn test_reads_variables() {
        let config = ScoutConfig::from_vars(vars(&[
            (TOKEN_VAR, " abc123 "),
            (DEMO_MODE_VAR, "yes"),
            (API_BASE_URL_VAR, "http://localhost:8080/"),
        ]))
        .unwrap();
        assert_eq!(config.initial_token, "abc123");
        assert!(config.start_in_demo);
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_empty_variables_keep_defaults() {
        let config =
            ScoutConfig::from_vars(vars(&[(DEMO_MODE_VAR, ""), (API_BASE_URL_VAR, "  ")])).unwrap();
        assert!(!config.start_in_demo);
        assert_eq!(config.api_base_url, DISCOGS_API_URL);
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = ScoutConfig::from_vars(vars(&[(DEMO_MODE_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: DEMO_MODE_VAR,
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ScoutConfig::from_vars(vars(&[(TOKEN_VAR, "abc123")])).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("abc123"));
    }
}
