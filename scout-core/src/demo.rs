//! Offline catalog with deterministic fake data

use tracing::debug;

use crate::discogs::{Artist, PaginationData, ReleaseDetail, SearchPage, SearchResult, Track};
use crate::search::SearchRequest;
use crate::util::sleep_ms;

pub const SEARCH_DELAY_MS: u64 = 800;
pub const DETAIL_DELAY_MS: u64 = 500;

/// Every demo query claims this many pages.
pub const DEMO_PAGES: u32 = 5;

const DEMO_LABEL: &str = "Demo Records";
const DEMO_YEAR: &str = "2023";

pub async fn search(request: &SearchRequest) -> SearchPage {
    sleep_ms(SEARCH_DELAY_MS).await;
    search_page(request)
}

pub async fn release(id: u64) -> ReleaseDetail {
    sleep_ms(DETAIL_DELAY_MS).await;
    release_detail(id)
}

/// One full page of results. Ids are `100 + i + page * per_page`.
pub fn search_page(request: &SearchRequest) -> SearchPage {
    let page = request.page;
    let per_page = request.per_page;
    let query = request.query();
    debug!("Demo search '{}' page {}", query, page);

    let results = (0..per_page)
        .map(|i| {
            let title = if query.is_empty() {
                format!("Trending album {} (page {})", i + 1, page)
            } else {
                format!("Demo result {} for \"{}\"", i + 1, query)
            };
            SearchResult {
                id: 100 + u64::from(i) + u64::from(page) * u64::from(per_page),
                title,
                year: Some(DEMO_YEAR.to_string()),
                thumb: Some(String::new()),
                cover_image: None,
                label: vec![DEMO_LABEL.to_string()],
                catno: None,
                resource_url: Some(String::new()),
                kind: Some("release".to_string()),
                labels: Vec::new(),
            }
        })
        .collect();

    SearchPage {
        results,
        pagination: Some(PaginationData {
            page,
            pages: DEMO_PAGES,
            items: DEMO_PAGES * per_page,
            per_page,
        }),
    }
}

/// Canned detail record echoing `id`.
pub fn release_detail(id: u64) -> ReleaseDetail {
    ReleaseDetail {
        id,
        title: "Demo Album Details".to_string(),
        year: Some(DEMO_YEAR.to_string()),
        released: None,
        thumb: None,
        cover_image: None,
        images: Vec::new(),
        artists: vec![Artist {
            name: "Demo Artist".to_string(),
            id: None,
            resource_url: None,
        }],
        labels: Vec::new(),
        genres: Vec::new(),
        tracklist: vec![
            Track {
                position: "A1".to_string(),
                title: "Intro".to_string(),
                duration: "2:30".to_string(),
            },
            Track {
                position: "A2".to_string(),
                title: "Track 2".to_string(),
                duration: "4:15".to_string(),
            },
        ],
        uri: None,
        resource_url: None,
        notes: Some("Demo mode details.".to_string()),
        label: Vec::new(),
        catno: None,
    }
}
