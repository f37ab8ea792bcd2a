/// How the search box is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Free text (artist, album, ...)
    Text,
    /// Product barcode (EAN/UPC)
    Barcode,
}

#[allow(clippy::derivable_impls)]
impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Text
    }
}

impl SearchMode {
    /// Name of the Discogs query parameter carrying the search term.
    pub fn query_key(&self) -> &'static str {
        match self {
            SearchMode::Text => "q",
            SearchMode::Barcode => "barcode",
        }
    }

    /// Parse a selector value. Anything unknown is free text.
    pub fn from_value(value: &str) -> Self {
        match value {
            "barcode" => SearchMode::Barcode,
            _ => SearchMode::Text,
        }
    }

    /// Value used by selectors; round-trips through [`SearchMode::from_value`].
    pub fn value(&self) -> &'static str {
        match self {
            SearchMode::Text => "text",
            SearchMode::Barcode => "barcode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Text => "Text",
            SearchMode::Barcode => "Barcode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keys() {
        assert_eq!(SearchMode::Text.query_key(), "q");
        assert_eq!(SearchMode::Barcode.query_key(), "barcode");
    }

    #[test]
    fn test_from_value() {
        assert_eq!(SearchMode::from_value("barcode"), SearchMode::Barcode);
        assert_eq!(SearchMode::from_value("text"), SearchMode::Text);
        assert_eq!(SearchMode::from_value("q"), SearchMode::Text);
        assert_eq!(SearchMode::from_value(""), SearchMode::Text);
    }
}
