use std::fmt;

use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::models::{ReleaseDetail, SearchPage};
use crate::search::SearchRequest;

/// Discogs API base URL
pub const DISCOGS_API_URL: &str = "https://api.discogs.com";

/// Sent with every request; Discogs rejects anonymous agents.
pub const DEFAULT_USER_AGENT: &str = "VinylScout/1.0";

#[derive(Debug, Error)]
pub enum DiscogsError {
    #[error("Invalid API token")]
    InvalidToken,
    #[error("Discogs returned status {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Token-authenticated Discogs database client
#[derive(Clone)]
pub struct DiscogsClient {
    http_client: Client,
    token: String,
    base_url: String,
    user_agent: String,
}

impl fmt::Debug for DiscogsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscogsClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl DiscogsClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            token: token.into(),
            base_url: DISCOGS_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Point the client at another host (mock servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http_client
            .get(url)
            .header(AUTHORIZATION, format!("Discogs token={}", self.token))
            .header(USER_AGENT, &self.user_agent)
    }

    /// Run a release search.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, DiscogsError> {
        let url = format!("{}/database/search", self.base_url);
        info!(
            "Discogs search: '{}' ({:?}) page {}",
            request.query(),
            request.mode(),
            request.page
        );

        let response = self.get(&url).query(&request.query_pairs()).send().await?;
        let page: SearchPage = check_status(response)?.json().await?;

        debug!(
            "Discogs search returned {} results ({:?})",
            page.results.len(),
            page.pagination
        );
        Ok(page)
    }

    /// Fetch one release. A non-empty `resource_url` from a search result is
    /// used as is; otherwise the release is looked up by id.
    pub async fn get_release(
        &self,
        id: u64,
        resource_url: Option<&str>,
    ) -> Result<ReleaseDetail, DiscogsError> {
        let url = self.release_url(id, resource_url);
        info!("Discogs release {}: {}", id, url);

        let response = self.get(&url).send().await?;
        let release = check_status(response)?.json().await?;
        Ok(release)
    }

    pub fn release_url(&self, id: u64, resource_url: Option<&str>) -> String {
        match resource_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            None => format!("{}/releases/{}", self.base_url, id),
        }
    }
}

fn check_status(response: Response) -> Result<Response, DiscogsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    warn!("Discogs API error response: {}", status);
    if status == StatusCode::UNAUTHORIZED {
        return Err(DiscogsError::InvalidToken);
    }
    Err(DiscogsError::Status(status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let client = DiscogsClient::new("super-secret-token");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_release_url_prefers_resource_url() {
        let client = DiscogsClient::new("t");
        assert_eq!(
            client.release_url(42, Some("https://api.discogs.com/releases/42?curr=EUR")),
            "https://api.discogs.com/releases/42?curr=EUR"
        );
        assert_eq!(
            client.release_url(42, Some("")),
            "https://api.discogs.com/releases/42"
        );
        assert_eq!(
            client.release_url(42, None),
            "https://api.discogs.com/releases/42"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = DiscogsClient::new("t").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(client.release_url(7, None), "http://127.0.0.1:9000/releases/7");
    }
}
