//! `ScoutConfig::from_env` against the real process environment.
//!
//! Kept to a single test in its own binary: the environment is process-wide
//! and the steps below must not interleave with other tests.

use scout_common::SearchMode;
use scout_core::catalog::Catalog;
use scout_core::config::{ConfigError, ScoutConfig, API_BASE_URL_VAR, DEMO_MODE_VAR, TOKEN_VAR};
use scout_core::search::{SearchOrigin, SearchRequest};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Initialize tracing for tests
fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_test_writer()
        .with_target(false)
        .try_init();
}

fn clear_vars() {
    for key in [TOKEN_VAR, DEMO_MODE_VAR, API_BASE_URL_VAR] {
        std::env::remove_var(key);
    }
}

#[tokio::test]
async fn test_from_env_drives_catalog() {
    tracing_init();
    clear_vars();

    // Nothing set: defaults
    let config = ScoutConfig::from_env().unwrap();
    assert_eq!(config, ScoutConfig::default());
    assert!(Catalog::from_credentials(&config.initial_token, config.start_in_demo, &config).is_none());

    // Token and host from the environment reach the HTTP client
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/database/search"))
        .and(header("Authorization", "Discogs token=env-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 11, "title": "From env"}],
            "pagination": {"page": 1, "pages": 1, "items": 1, "per_page": 25}
        })))
        .expect(1)
        .mount(&server)
        .await;

    std::env::set_var(TOKEN_VAR, "env-token");
    std::env::set_var(API_BASE_URL_VAR, format!("{}/", server.uri()));
    std::env::set_var(DEMO_MODE_VAR, "false");

    let config = ScoutConfig::from_env().unwrap();
    assert_eq!(config.api_base_url, server.uri());
    assert_eq!(config.initial_token, "env-token");
    assert!(!config.start_in_demo);

    let catalog =
        Catalog::from_credentials(&config.initial_token, config.start_in_demo, &config).unwrap();
    assert!(!catalog.is_demo());
    let request = SearchRequest::plan("x", SearchMode::Text, 1, SearchOrigin::User).unwrap();
    let page = catalog.search(&request).await.unwrap();
    assert_eq!(page.results[0].id, 11);

    // Demo flag wins over the token
    std::env::set_var(DEMO_MODE_VAR, "yes");
    let config = ScoutConfig::from_env().unwrap();
    assert!(config.start_in_demo);
    let catalog =
        Catalog::from_credentials(&config.initial_token, config.start_in_demo, &config).unwrap();
    assert!(catalog.is_demo());

    // Garbage is reported, not silently ignored
    std::env::set_var(DEMO_MODE_VAR, "maybe");
    assert_eq!(
        ScoutConfig::from_env(),
        Err(ConfigError::InvalidValue {
            key: DEMO_MODE_VAR,
            value: "maybe".to_string(),
        })
    );

    clear_vars();
}
