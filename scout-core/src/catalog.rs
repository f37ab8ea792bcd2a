use tracing::debug;

use crate::config::ScoutConfig;
use crate::demo;
use crate::discogs::{DiscogsClient, DiscogsError, ReleaseDetail, SearchPage};
use crate::search::SearchRequest;

/// Where searches and release lookups go
#[derive(Debug, Clone)]
pub enum Catalog {
    Discogs(DiscogsClient),
    /// Synthetic data, no network
    Demo,
}

impl Catalog {
    /// Pick a catalog for the current credentials. Demo mode wins over a
    /// token; with neither there is nothing to query.
    pub fn from_credentials(token: &str, demo: bool, config: &ScoutConfig) -> Option<Self> {
        if demo {
            return Some(Catalog::Demo);
        }
        let token = token.trim();
        if token.is_empty() {
            debug!("No token and demo mode off; catalog unavailable");
            return None;
        }
        Some(Catalog::Discogs(
            DiscogsClient::new(token)
                .with_base_url(config.api_base_url.as_str())
                .with_user_agent(config.user_agent.as_str()),
        ))
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Catalog::Demo)
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, DiscogsError> {
        match self {
            Catalog::Discogs(client) => client.search(request).await,
            Catalog::Demo => Ok(demo::search(request).await),
        }
    }

    pub async fn release(
        &self,
        id: u64,
        resource_url: Option<&str>,
    ) -> Result<ReleaseDetail, DiscogsError> {
        match self {
            Catalog::Discogs(client) => client.get_release(id, resource_url).await,
            Catalog::Demo => Ok(demo::release(id).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_no_catalog() {
        let config = ScoutConfig::default();
        assert!(Catalog::from_credentials("", false, &config).is_none());
        assert!(Catalog::from_credentials("   ", false, &config).is_none());
    }

    #[test]
    fn test_demo_wins_over_token() {
        let config = ScoutConfig::default();
        let catalog = Catalog::from_credentials("abc", true, &config).unwrap();
        assert!(catalog.is_demo());
    }

    #[test]
    fn test_token_uses_configured_base_url() {
        let config = ScoutConfig {
            api_base_url: "http://localhost:9999".to_string(),
            ..ScoutConfig::default()
        };
        match Catalog::from_credentials("abc", false, &config) {
            Some(Catalog::Discogs(client)) => assert_eq!(client.base_url(), "http://localhost:9999"),
            other => panic!("expected Discogs catalog, got {:?}", other),
        }
    }
}
