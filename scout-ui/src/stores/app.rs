//! Top-level application state store
//!
//! Combines all sub-states into a single Store for the entire app.
//! Components access state via lensing: `app.state.search().session()`

use super::credentials::CredentialsState;
use super::scanner::ScannerState;
use super::search::SearchState;
use super::ui::UiState;
use dioxus::prelude::*;
use scout_common::Collection;
use scout_core::discogs::CollectionItem;
use scout_core::session::DetailSession;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// API token and demo flag
    pub credentials: CredentialsState,
    /// Search form and the current result page
    pub search: SearchState,
    /// Release shown in the detail modal
    pub detail: DetailSession,
    /// Saved releases, newest first
    pub collection: Collection<CollectionItem>,
    /// Barcode scanner overlay
    pub scanner: ScannerState,
    /// Tabs, notice slot, toast
    pub ui: UiState,
}
