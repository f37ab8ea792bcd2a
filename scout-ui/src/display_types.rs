//! Small display rules shared by the views

use scout_common::SearchMode;

/// Discogs serves these instead of a real image when a cover is missing.
const PLACEHOLDER_MARKERS: [&str; 2] = ["dummy", "spacer.gif"];

/// The URL worth putting in an `<img>`, or `None` for the disc placeholder.
pub fn usable_image_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .filter(|u| !PLACEHOLDER_MARKERS.iter().any(|m| u.contains(m)))
}

/// Heading above the result grid.
pub fn results_heading(query: &str) -> String {
    if query.is_empty() {
        "Trending / New".to_string()
    } else {
        format!("Results for \"{}\"", query)
    }
}

pub fn search_placeholder(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Text => "Search artist, album...",
        SearchMode::Barcode => "Type a barcode or scan...",
    }
}

/// Line under a collection row title.
pub fn label_or_default(label: Option<&str>) -> &str {
    label.filter(|l| !l.is_empty()).unwrap_or("No label")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_images_are_dropped() {
        assert_eq!(usable_image_url(None), None);
        assert_eq!(usable_image_url(Some("")), None);
        assert_eq!(
            usable_image_url(Some("https://s.discogs.com/images/default-release.png?dummy=1")),
            None
        );
        assert_eq!(
            usable_image_url(Some("https://s.discogs.com/images/spacer.gif")),
            None
        );
        assert_eq!(
            usable_image_url(Some("https://i.discogs.com/cover.jpg")),
            Some("https://i.discogs.com/cover.jpg")
        );
    }

    #[test]
    fn test_results_heading() {
        assert_eq!(results_heading(""), "Trending / New");
        assert_eq!(results_heading("Nevermind"), "Results for \"Nevermind\"");
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(label_or_default(Some("DGC-24425")), "DGC-24425");
        assert_eq!(label_or_default(Some("")), "No label");
        assert_eq!(label_or_default(None), "No label");
    }
}
