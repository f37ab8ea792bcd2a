use scout_common::SearchMode;
use scout_core::catalog::Catalog;
use scout_core::config::ScoutConfig;
use scout_core::discogs::{DiscogsClient, DiscogsError, PaginationData};
use scout_core::notice::Notice;
use scout_core::search::{SearchOrigin, SearchRequest};
use scout_core::session::{Completion, DetailSession, SearchSession};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const TOKEN: &str = "test-token";

/// Initialize tracing for tests
fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_test_writer()
        .with_target(false)
        .try_init();
}

async fn setup() -> (MockServer, DiscogsClient) {
    tracing_init();
    let server = MockServer::start().await;
    let client = DiscogsClient::new(TOKEN).with_base_url(server.uri());
    (server, client)
}

fn text(query: &str, page: u32) -> SearchRequest {
    SearchRequest::plan(query, SearchMode::Text, page, SearchOrigin::User).unwrap()
}

fn search_body(ids: &[u64], page: u32, pages: u32) -> serde_json::Value {
    let results: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "type": "release",
                "title": format!("Nirvana - Nevermind ({})", id),
                "year": "1991",
                "label": ["DGC"],
                "catno": "DGC-24425",
                "thumb": "https://i.discogs.com/thumb.jpg",
                "cover_image": "https://i.discogs.com/cover.jpg",
                "resource_url": format!("https://api.discogs.com/releases/{}", id),
            })
        })
        .collect();
    json!({
        "pagination": {
            "page": page,
            "pages": pages,
            "per_page": 25,
            "items": ids.len(),
            "urls": {}
        },
        "results": results,
    })
}

fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect()
}

#[tokio::test]
async fn test_text_search_sends_query_and_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .and(query_param("q", "Nevermind"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "25"))
        .and(query_param("type", "release"))
        .and(header("Authorization", "Discogs token=test-token"))
        .and(header("User-Agent", "VinylScout/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[1, 2, 3], 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.search(&text("Nevermind", 1)).await.unwrap();
    assert_eq!(page.results.len(), 3);
    assert_eq!(page.results[0].year.as_deref(), Some("1991"));
    assert_eq!(page.pagination.map(|p| p.page), Some(1));

    let received = server.received_requests().await.unwrap();
    assert!(!query_keys(&received[0]).contains(&"barcode".to_string()));
}

#[tokio::test]
async fn test_barcode_search_sends_barcode_not_q() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .and(query_param("barcode", "012345678905"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[9], 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        SearchRequest::plan("012345678905", SearchMode::Barcode, 1, SearchOrigin::User).unwrap();
    client.search(&request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let keys = query_keys(&received[0]);
    assert!(keys.contains(&"barcode".to_string()));
    assert!(!keys.contains(&"q".to_string()));
}

#[tokio::test]
async fn test_home_listing_sorts_by_year() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .and(query_param("year", "2026"))
        .and(query_param("sort", "year"))
        .and(query_param("sort_order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[1], 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        SearchRequest::plan_for_year("", SearchMode::Text, 1, SearchOrigin::Initial, 2026)
            .unwrap();
    client.search(&request).await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_is_invalid_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "You must authenticate."})),
        )
        .mount(&server)
        .await;

    let err = client.search(&text("x", 1)).await.unwrap_err();
    assert!(matches!(err, DiscogsError::InvalidToken));
    assert_eq!(Notice::from_search_error(&err), Notice::InvalidToken);
}

#[tokio::test]
async fn test_other_errors_are_fetch_failures() {
    let (server, client) = setup().await;

    for status in [403u16, 429, 500] {
        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/database/search"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let err = client.search(&text("x", 1)).await.unwrap_err();
        assert!(matches!(err, DiscogsError::Status(s) if s == status));
        assert_eq!(Notice::from_search_error(&err), Notice::FetchFailed);
    }
}

#[tokio::test]
async fn test_malformed_body_is_fetch_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.search(&text("x", 1)).await.unwrap_err();
    assert!(matches!(err, DiscogsError::Request(_)));
    assert_eq!(Notice::from_search_error(&err), Notice::FetchFailed);
}

#[tokio::test]
async fn test_search_session_round_trip_clears_notice() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .and(query_param("q", "Nevermind"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[1, 2], 1, 2)))
        .mount(&server)
        .await;

    let mut session = SearchSession::default();
    let request = text("Nevermind", 1);
    let ticket = session.begin(request.clone());
    let completion = session.finish(ticket, client.search(&request).await);

    assert_eq!(completion, Completion::Applied(None));
    assert_eq!(session.results().len(), 2);
    assert_eq!(session.pagination().page, 1);
    assert_eq!(session.pagination().pages, 2);
}

#[tokio::test]
async fn test_empty_results_yield_no_results_notice() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let mut session = SearchSession::default();
    let request = text("no such record", 1);
    let ticket = session.begin(request.clone());
    let completion = session.finish(ticket, client.search(&request).await);

    assert_eq!(completion, Completion::Applied(Some(Notice::NoResults)));
    assert!(session.results().is_empty());
    assert_eq!(session.pagination(), PaginationData::default());
}

#[tokio::test]
async fn test_release_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/releases/367084"))
        .and(header("Authorization", "Discogs token=test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 367084,
            "title": "Nevermind",
            "year": 1991,
            "artists": [{"name": "Nirvana", "id": 125246}],
            "genres": ["Rock"],
            "images": [{"uri": "https://i.discogs.com/full.jpg", "type": "primary"}],
            "tracklist": [
                {"position": "A1", "title": "Smells Like Teen Spirit", "duration": "5:01"}
            ],
            "notes": "Original pressing."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let release = client.get_release(367084, None).await.unwrap();
    assert_eq!(release.year.as_deref(), Some("1991"));
    assert_eq!(release.artist_names().as_deref(), Some("Nirvana"));
    assert_eq!(release.cover_url(), Some("https://i.discogs.com/full.jpg"));
    assert_eq!(release.tracklist[0].title, "Smells Like Teen Spirit");
}

#[tokio::test]
async fn test_release_prefers_resource_url() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/releases/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 5, "title": "Via resource"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resource_url = format!("{}/v2/releases/5", server.uri());
    let release = client.get_release(5, Some(&resource_url)).await.unwrap();
    assert_eq!(release.title, "Via resource");
}

#[tokio::test]
async fn test_release_failure_keeps_selection() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/releases/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "First"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/releases/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut detail = DetailSession::default();
    let ticket = detail.begin();
    detail.finish(ticket, client.get_release(1, None).await);

    let ticket = detail.begin();
    let completion = detail.finish(ticket, client.get_release(2, None).await);

    match completion {
        Completion::Applied(Some(notice)) => {
            assert!(notice.to_string().starts_with("Failed to load details:"))
        }
        other => panic!("expected detail notice, got {:?}", other),
    }
    assert_eq!(detail.selected().map(|r| r.title.as_str()), Some("First"));
}

#[tokio::test]
async fn test_catalog_uses_configured_host() {
    let (server, _) = setup().await;

    Mock::given(method("GET"))
        .and(path("/database/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[4], 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let config = ScoutConfig {
        api_base_url: server.uri(),
        ..ScoutConfig::default()
    };
    let catalog = Catalog::from_credentials(TOKEN, false, &config).unwrap();
    let page = catalog.search(&text("x", 1)).await.unwrap();
    assert_eq!(page.results[0].id, 4);
}

#[tokio::test(start_paused = true)]
async fn test_demo_catalog_never_touches_network() {
    tracing_init();
    let catalog = Catalog::from_credentials("", true, &ScoutConfig::default()).unwrap();

    let page = catalog.search(&text("Nevermind", 3)).await.unwrap();
    assert_eq!(page.results.len(), 25);
    assert_eq!(
        page.pagination,
        Some(PaginationData {
            page: 3,
            pages: 5,
            items: 125,
            per_page: 25
        })
    );

    let release = catalog.release(42, None).await.unwrap();
    assert_eq!(release.id, 42);
}
