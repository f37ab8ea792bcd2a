//! Reconciling catalog responses with what is on screen
//!
//! Each search or detail fetch takes a ticket when it starts. When the
//! response arrives it is applied only if no newer request was issued in the
//! meantime, so a slow page-1 response can never overwrite page 2.

use scout_common::{Pager, RequestGeneration, RequestTicket};
use tracing::{debug, warn};

use crate::discogs::{DiscogsError, PaginationData, ReleaseDetail, SearchPage, SearchResult};
use crate::notice::Notice;
use crate::search::SearchRequest;

/// Result of handing a response to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// A newer request superseded this one; nothing changed.
    Stale,
    /// State was updated. The notice, if any, goes into the message slot.
    Applied(Option<Notice>),
}

/// Results of the current query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    results: Vec<SearchResult>,
    pagination: PaginationData,
    loading: bool,
    request: Option<SearchRequest>,
    generation: RequestGeneration,
}

impl SearchSession {
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn pagination(&self) -> PaginationData {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last request started, successful or not.
    pub fn request(&self) -> Option<&SearchRequest> {
        self.request.as_ref()
    }

    /// Query text of the last request; empty for the home listing.
    pub fn query(&self) -> &str {
        self.request.as_ref().map_or("", |r| r.query())
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.pagination.page, self.pagination.pages)
    }

    /// Start `request`. A first page clears the grid right away.
    pub fn begin(&mut self, request: SearchRequest) -> RequestTicket {
        if request.page == 1 {
            self.results.clear();
        }
        self.loading = true;
        self.request = Some(request);
        self.generation.issue()
    }

    /// Apply the response for `ticket`.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SearchPage, DiscogsError>,
    ) -> Completion {
        if !self.generation.is_latest(ticket) {
            debug!("Dropping stale search response");
            return Completion::Stale;
        }
        self.loading = false;

        match outcome {
            Ok(page) => {
                self.pagination = page.pagination.unwrap_or_default();
                self.results = page.results;
                if self.results.is_empty() {
                    Completion::Applied(Some(Notice::NoResults))
                } else {
                    Completion::Applied(None)
                }
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                Completion::Applied(Some(Notice::from_search_error(&e)))
            }
        }
    }

    /// Forget the request in flight.
    pub fn cancel(&mut self) {
        self.generation.invalidate();
        self.loading = false;
    }

    /// The current query at `page`, if `page` exists.
    pub fn page_request(&self, page: u32) -> Option<SearchRequest> {
        if !self.pager().accepts(page) {
            return None;
        }
        self.request.as_ref().map(|r| r.at_page(page))
    }
}

/// The release shown in the detail modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailSession {
    selected: Option<ReleaseDetail>,
    loading: bool,
    generation: RequestGeneration,
}

impl DetailSession {
    pub fn selected(&self) -> Option<&ReleaseDetail> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.loading = true;
        self.generation.issue()
    }

    /// Apply the response for `ticket`. A failure keeps the current selection.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ReleaseDetail, DiscogsError>,
    ) -> Completion {
        if !self.generation.is_latest(ticket) {
            debug!("Dropping stale release response");
            return Completion::Stale;
        }
        self.loading = false;

        match outcome {
            Ok(release) => {
                self.selected = Some(release);
                Completion::Applied(None)
            }
            Err(e) => {
                warn!("Release fetch failed: {}", e);
                Completion::Applied(Some(Notice::from_detail_error(&e)))
            }
        }
    }

    /// Dismiss the modal. A fetch still in flight will not reopen it.
    pub fn close(&mut self) -> Option<ReleaseDetail> {
        self.generation.invalidate();
        self.loading = false;
        self.selected.take()
    }
}
