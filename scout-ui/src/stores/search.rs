//! Search form and result state store

use dioxus::prelude::*;
use scout_common::SearchMode;
use scout_core::session::SearchSession;

/// State for the search tab
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SearchState {
    /// Text currently in the search box
    pub query: String,
    /// How the search box is interpreted
    pub mode: SearchMode,
    /// Results, pagination and the request in flight
    pub session: SearchSession,
}

impl SearchState {
    /// Put a scanned code in the search box and switch to barcode mode, so
    /// the form shows what is being searched.
    pub fn use_barcode(&mut self, code: &str) {
        self.query = code.to_string();
        self.mode = SearchMode::Barcode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanned_code_fills_form_in_barcode_mode() {
        let mut state = SearchState {
            query: "nevermind".to_string(),
            ..SearchState::default()
        };
        state.use_barcode("012345678905");
        assert_eq!(state.query, "012345678905");
        assert_eq!(state.mode, SearchMode::Barcode);
    }
}
