//! Building `/database/search` queries

use chrono::Datelike;
use scout_common::SearchMode;

/// Results requested per page.
pub const PER_PAGE: u32 = 25;

/// Who asked for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrigin {
    /// Automatic load after credentials change. An empty query becomes the
    /// home listing.
    Initial,
    /// Form submit, pager, scanner
    User,
}

/// What is being searched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    Text(String),
    Barcode(String),
    /// Newest releases of `year`
    Home { year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: SearchTerm,
    pub page: u32,
    pub per_page: u32,
}

impl SearchRequest {
    /// Plan a search for `query`, or `None` when there is nothing to ask for.
    pub fn plan(
        query: &str,
        mode: SearchMode,
        page: u32,
        origin: SearchOrigin,
    ) -> Option<Self> {
        Self::plan_for_year(query, mode, page, origin, chrono::Local::now().year())
    }

    /// Like [`SearchRequest::plan`] with the home listing pinned to `year`.
    pub fn plan_for_year(
        query: &str,
        mode: SearchMode,
        page: u32,
        origin: SearchOrigin,
        year: i32,
    ) -> Option<Self> {
        let query = query.trim();
        let term = if query.is_empty() {
            match origin {
                SearchOrigin::Initial => SearchTerm::Home { year },
                SearchOrigin::User => return None,
            }
        } else {
            match mode {
                SearchMode::Text => SearchTerm::Text(query.to_string()),
                SearchMode::Barcode => SearchTerm::Barcode(query.to_string()),
            }
        };
        Some(Self {
            term,
            page: page.max(1),
            per_page: PER_PAGE,
        })
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Same search, different page.
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            term: self.term.clone(),
            page: page.max(1),
            per_page: self.per_page,
        }
    }

    /// The user's search text; empty for the home listing.
    pub fn query(&self) -> &str {
        match &self.term {
            SearchTerm::Text(q) | SearchTerm::Barcode(q) => q,
            SearchTerm::Home { .. } => "",
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self.term {
            SearchTerm::Barcode(_) => SearchMode::Barcode,
            _ => SearchMode::Text,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self.term, SearchTerm::Home { .. })
    }

    /// Query string parameters, in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type", "release".to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ];
        match &self.term {
            SearchTerm::Text(q) => pairs.push((SearchMode::Text.query_key(), q.clone())),
            SearchTerm::Barcode(code) => {
                pairs.push((SearchMode::Barcode.query_key(), code.clone()))
            }
            SearchTerm::Home { year } => {
                pairs.push(("year", year.to_string()));
                pairs.push(("sort", "year".to_string()));
                pairs.push(("sort_order", "desc".to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(request: &SearchRequest) -> Vec<&'static str> {
        request.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    fn value(request: &SearchRequest, key: &str) -> Option<String> {
        request
            .query_pairs()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn test_text_search_sends_q_only() {
        let request =
            SearchRequest::plan("Nevermind", SearchMode::Text, 1, SearchOrigin::User).unwrap();
        assert_eq!(value(&request, "q").as_deref(), Some("Nevermind"));
        assert_eq!(value(&request, "page").as_deref(), Some("1"));
        assert_eq!(value(&request, "type").as_deref(), Some("release"));
        assert_eq!(value(&request, "per_page").as_deref(), Some("25"));
        assert!(!keys(&request).contains(&"barcode"));
    }

    #[test]
    fn test_barcode_search_sends_barcode_only() {
        let request =
            SearchRequest::plan("012345678905", SearchMode::Barcode, 2, SearchOrigin::User)
                .unwrap();
        assert_eq!(value(&request, "barcode").as_deref(), Some("012345678905"));
        assert_eq!(value(&request, "page").as_deref(), Some("2"));
        assert!(!keys(&request).contains(&"q"));
    }

    #[test]
    fn test_empty_user_query_is_not_sent() {
        assert_eq!(
            SearchRequest::plan("", SearchMode::Text, 1, SearchOrigin::User),
            None
        );
        assert_eq!(
            SearchRequest::plan("   ", SearchMode::Barcode, 1, SearchOrigin::User),
            None
        );
    }

    #[test]
    fn test_initial_empty_query_is_home_listing() {
        let request =
            SearchRequest::plan_for_year("", SearchMode::Text, 1, SearchOrigin::Initial, 2026)
                .unwrap();
        assert!(request.is_home());
        assert_eq!(request.query(), "");
        assert_eq!(value(&request, "year").as_deref(), Some("2026"));
        assert_eq!(value(&request, "sort").as_deref(), Some("year"));
        assert_eq!(value(&request, "sort_order").as_deref(), Some("desc"));
        assert!(!keys(&request).contains(&"q"));
        assert!(!keys(&request).contains(&"barcode"));
    }

    #[test]
    fn test_initial_with_query_searches_normally() {
        let request =
            SearchRequest::plan("Blue Train", SearchMode::Text, 1, SearchOrigin::Initial).unwrap();
        assert!(!request.is_home());
        assert_eq!(value(&request, "q").as_deref(), Some("Blue Train"));
    }

    #[test]
    fn test_query_is_trimmed() {
        let request =
            SearchRequest::plan("  Kind of Blue ", SearchMode::Text, 1, SearchOrigin::User)
                .unwrap();
        assert_eq!(request.query(), "Kind of Blue");
    }

    #[test]
    fn test_at_page_keeps_term() {
        let request =
            SearchRequest::plan_for_year("", SearchMode::Text, 1, SearchOrigin::Initial, 2026)
                .unwrap()
                .with_per_page(10);
        let next = request.at_page(3);
        assert!(next.is_home());
        assert_eq!(next.page, 3);
        assert_eq!(next.per_page, 10);
    }
}
