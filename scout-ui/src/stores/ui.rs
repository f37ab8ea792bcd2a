//! General UI state store (tabs, notice slot, toast)

use dioxus::prelude::*;
use scout_common::AddOutcome;
use scout_core::notice::{Notice, DUPLICATE_ITEM_WARNING};
use scout_core::session::Completion;

/// Top-level tab
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Search,
    Collection,
}

/// Transient warning in the corner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Distinguishes a toast from the one it replaced, so an old
    /// auto-hide timer does not dismiss a newer toast.
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UiState {
    pub active_tab: ActiveTab,
    /// Single message slot above the results; the newest notice wins
    pub notice: Option<Notice>,
    pub toast: Option<Toast>,
    /// Last toast id handed out
    pub toast_seq: u64,
}

/// Follow-up work after an add attempt was applied to [`UiState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddFollowUp {
    /// The item was saved: dismiss the detail modal.
    CloseDetails,
    /// Duplicate: hide the toast with this id once it has been seen.
    HideToastLater(u64),
}

impl UiState {
    /// A new search started; the previous notice no longer applies.
    pub fn search_started(&mut self) {
        self.notice = None;
    }

    /// Show the outcome of a search. Stale responses leave the slot alone.
    pub fn search_finished(&mut self, completion: Completion) {
        if let Completion::Applied(notice) = completion {
            self.notice = notice;
        }
    }

    /// Show a failed detail fetch. Success leaves the slot alone.
    pub fn detail_finished(&mut self, completion: Completion) {
        if let Completion::Applied(Some(notice)) = completion {
            self.notice = Some(notice);
        }
    }

    /// React to [`Collection::add`](scout_common::Collection::add): a new
    /// item switches to the collection tab, a duplicate only warns.
    pub fn collection_add(&mut self, outcome: AddOutcome) -> AddFollowUp {
        match outcome {
            AddOutcome::Added => {
                self.active_tab = ActiveTab::Collection;
                AddFollowUp::CloseDetails
            }
            AddOutcome::AlreadyPresent => {
                AddFollowUp::HideToastLater(self.show_toast(DUPLICATE_ITEM_WARNING))
            }
        }
    }

    /// Replace any toast with `message`. Returns the new toast's id.
    pub fn show_toast(&mut self, message: &str) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            id: self.toast_seq,
            message: message.to_string(),
        });
        self.toast_seq
    }

    /// Hide the toast if it is still the one with `id`.
    pub fn hide_toast(&mut self, id: u64) -> bool {
        if self.toast.as_ref().map(|t| t.id) == Some(id) {
            self.toast = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_common::{Collection, SearchMode};
    use scout_core::discogs::{CollectionItem, DiscogsError, SearchPage, SearchResult};
    use scout_core::search::{SearchOrigin, SearchRequest};
    use scout_core::session::SearchSession;

    fn result(id: u64) -> SearchResult {
        SearchResult {
            id,
            title: format!("Album {}", id),
            year: None,
            thumb: None,
            cover_image: None,
            label: Vec::new(),
            catno: None,
            resource_url: None,
            kind: None,
            labels: Vec::new(),
        }
    }

    fn item(id: u64) -> CollectionItem {
        CollectionItem::Result(result(id))
    }

    fn request(query: &str) -> SearchRequest {
        SearchRequest::plan(query, SearchMode::Text, 1, SearchOrigin::User).unwrap()
    }

    #[test]
    fn test_new_item_switches_to_collection() {
        let mut collection = Collection::new();
        let mut ui = UiState::default();

        let follow_up = ui.collection_add(collection.add(item(1)));
        assert_eq!(follow_up, AddFollowUp::CloseDetails);
        assert_eq!(ui.active_tab, ActiveTab::Collection);
        assert_eq!(ui.toast, None);
    }

    #[test]
    fn test_duplicate_keeps_tab_and_warns() {
        let mut collection = Collection::new();
        collection.add(item(1));
        let mut ui = UiState::default();

        let follow_up = ui.collection_add(collection.add(item(1)));
        assert_eq!(ui.active_tab, ActiveTab::Search);
        assert_eq!(collection.len(), 1);
        let toast = ui.toast.clone().unwrap();
        assert_eq!(toast.message, DUPLICATE_ITEM_WARNING);
        assert_eq!(follow_up, AddFollowUp::HideToastLater(toast.id));
    }

    #[test]
    fn test_old_toast_timer_keeps_newer_toast() {
        let mut ui = UiState::default();
        let first = ui.show_toast("one");
        let second = ui.show_toast("two");
        assert_ne!(first, second);

        assert!(!ui.hide_toast(first));
        assert_eq!(ui.toast.as_ref().map(|t| t.message.as_str()), Some("two"));
        assert!(ui.hide_toast(second));
        assert_eq!(ui.toast, None);
    }

    #[test]
    fn test_new_search_clears_previous_notice() {
        let mut session = SearchSession::default();
        let mut ui = UiState::default();

        let ticket = session.begin(request("Nevermind"));
        ui.search_started();
        ui.search_finished(session.finish(ticket, Err(DiscogsError::Status(500))));
        assert_eq!(ui.notice, Some(Notice::FetchFailed));

        let ticket = session.begin(request("Nevermind"));
        ui.search_started();
        assert_eq!(ui.notice, None);

        let page = SearchPage {
            results: vec![result(7)],
            pagination: None,
        };
        ui.search_finished(session.finish(ticket, Ok(page)));
        assert_eq!(ui.notice, None);
        assert_eq!(session.results().len(), 1);
        assert_eq!(session.pagination().page, 1);
    }

    #[test]
    fn test_stale_search_leaves_notice() {
        let mut session = SearchSession::default();
        let mut ui = UiState::default();

        let stale = session.begin(request("first"));
        let current = session.begin(request("second"));
        ui.search_finished(session.finish(current, Err(DiscogsError::InvalidToken)));
        ui.search_finished(session.finish(stale, Ok(SearchPage::default())));
        assert_eq!(ui.notice, Some(Notice::InvalidToken));
    }

    #[test]
    fn test_detail_success_keeps_notice() {
        let mut ui = UiState {
            notice: Some(Notice::NoResults),
            ..UiState::default()
        };
        ui.detail_finished(Completion::Applied(None));
        assert_eq!(ui.notice, Some(Notice::NoResults));

        ui.detail_finished(Completion::Applied(Some(Notice::DetailFailed("boom".into()))));
        assert_eq!(ui.notice, Some(Notice::DetailFailed("boom".into())));
    }
}
