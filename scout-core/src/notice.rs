use std::fmt;

use crate::discogs::DiscogsError;

/// Shown as a toast when adding an item that is already saved.
pub const DUPLICATE_ITEM_WARNING: &str = "This album is already in your collection!";

/// The single message slot above the result grid. A newer notice replaces
/// an older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InvalidToken,
    FetchFailed,
    /// The search succeeded but matched nothing
    NoResults,
    /// Release detail could not be loaded, with the reason
    DetailFailed(String),
}

impl Notice {
    pub fn from_search_error(error: &DiscogsError) -> Self {
        match error {
            DiscogsError::InvalidToken => Notice::InvalidToken,
            DiscogsError::Status(_) | DiscogsError::Request(_) => Notice::FetchFailed,
        }
    }

    pub fn from_detail_error(error: &DiscogsError) -> Self {
        match error {
            DiscogsError::InvalidToken | DiscogsError::Status(_) => {
                Notice::DetailFailed("Could not fetch details.".to_string())
            }
            DiscogsError::Request(e) => Notice::DetailFailed(e.to_string()),
        }
    }

    /// `NoResults` is informational; everything else is a failure.
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::NoResults)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InvalidToken => write!(f, "API token is invalid."),
            Notice::FetchFailed => write!(f, "Something went wrong while fetching data."),
            Notice::NoResults => write!(f, "No results found."),
            Notice::DetailFailed(reason) => write!(f, "Failed to load details: {}", reason),
        }
    }
}
