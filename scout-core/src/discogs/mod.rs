//! Discogs database API: data model and HTTP client

mod client;
mod models;

pub use client::{DiscogsClient, DiscogsError, DEFAULT_USER_AGENT, DISCOGS_API_URL};
pub use models::{
    Artist, CollectionItem, Image, Label, PaginationData, ReleaseDetail, SearchPage, SearchResult,
    Track,
};
