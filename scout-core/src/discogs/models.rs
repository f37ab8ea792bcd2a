use scout_common::CollectionEntry;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub uri: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub catno: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: String,
}

/// One row of `/database/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "optional_year")]
    pub year: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: Vec<String>,
    #[serde(default)]
    pub catno: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
}

impl SearchResult {
    /// Thumbnail, falling back to the full cover.
    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(&self.thumb).or_else(|| non_empty(&self.cover_image))
    }

    pub fn first_label(&self) -> Option<&str> {
        self.label
            .first()
            .map(String::as_str)
            .or_else(|| self.labels.first().map(|l| l.name.as_str()))
    }
}

/// Full record from `/releases/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "optional_year")]
    pub year: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<Artist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracklist: Vec<Track>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: Vec<String>,
    #[serde(default)]
    pub catno: Option<String>,
}

impl ReleaseDetail {
    /// First image, then the thumbnail.
    pub fn cover_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|i| i.uri.as_str())
            .filter(|uri| !uri.is_empty())
            .or_else(|| non_empty(&self.thumb))
    }

    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(&self.thumb)
            .or_else(|| non_empty(&self.cover_image))
            .or_else(|| self.cover_url())
    }

    /// Artist names joined with ", ", or `None` when there are none.
    pub fn artist_names(&self) -> Option<String> {
        if self.artists.is_empty() {
            return None;
        }
        Some(
            self.artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Year, falling back to the release date.
    pub fn display_year(&self) -> Option<&str> {
        self.year.as_deref().or_else(|| non_empty(&self.released))
    }

    pub fn first_label(&self) -> Option<&str> {
        self.label
            .first()
            .map(String::as_str)
            .or_else(|| self.labels.first().map(|l| l.name.as_str()))
    }

    pub fn catalog_number(&self) -> Option<&str> {
        non_empty(&self.catno).or_else(|| {
            self.labels
                .iter()
                .find_map(|l| l.catno.as_deref().filter(|c| !c.is_empty()))
        })
    }
}

/// Pagination block of a search response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationData {
    pub page: u32,
    pub pages: u32,
    pub items: u32,
    pub per_page: u32,
}

impl Default for PaginationData {
    fn default() -> Self {
        Self {
            page: 1,
            pages: 1,
            items: 0,
            per_page: 25,
        }
    }
}

/// Body of `/database/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub pagination: Option<PaginationData>,
}

/// A release saved to the collection, either straight from the result grid
/// or from the detail modal.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionItem {
    Result(SearchResult),
    Release(ReleaseDetail),
}

impl CollectionItem {
    pub fn id(&self) -> u64 {
        match self {
            CollectionItem::Result(r) => r.id,
            CollectionItem::Release(r) => r.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CollectionItem::Result(r) => &r.title,
            CollectionItem::Release(r) => &r.title,
        }
    }

    pub fn year(&self) -> Option<&str> {
        match self {
            CollectionItem::Result(r) => r.year.as_deref(),
            CollectionItem::Release(r) => r.display_year(),
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        match self {
            CollectionItem::Result(r) => r.thumbnail(),
            CollectionItem::Release(r) => r.thumbnail(),
        }
    }

    /// Catalog number, else the first label.
    pub fn label_line(&self) -> Option<&str> {
        match self {
            CollectionItem::Result(r) => non_empty(&r.catno).or_else(|| r.first_label()),
            CollectionItem::Release(r) => r.catalog_number().or_else(|| r.first_label()),
        }
    }
}

impl CollectionEntry for CollectionItem {
    fn entry_id(&self) -> u64 {
        self.id()
    }
}

impl From<SearchResult> for CollectionItem {
    fn from(result: SearchResult) -> Self {
        CollectionItem::Result(result)
    }
}

impl From<ReleaseDetail> for CollectionItem {
    fn from(release: ReleaseDetail) -> Self {
        CollectionItem::Release(release)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Discogs sends `year` as a string in search results and as a number in
/// release detail. `""` and `0` both mean unknown.
fn optional_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Text(s)) => {
            let s = s.trim();
            (!s.is_empty() && s != "0").then(|| s.to_string())
        }
        Some(RawYear::Number(n)) => (n != 0).then(|| n.to_string()),
        None => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_year_as_string() {
        let result: SearchResult = serde_json::from_value(json!({
            "id": 1,
            "title": "Nirvana - Nevermind",
            "year": "1991",
            "label": ["DGC"],
            "catno": "DGC-24425",
        }))
        .unwrap();
        assert_eq!(result.year.as_deref(), Some("1991"));
        assert_eq!(result.first_label(), Some("DGC"));
    }

    #[test]
    fn test_release_year_as_number() {
        let release: ReleaseDetail = serde_json::from_value(json!({
            "id": 367084,
            "title": "Nevermind",
            "year": 1991,
        }))
        .unwrap();
        assert_eq!(release.year.as_deref(), Some("1991"));
    }

    #[test]
    fn test_zero_and_empty_year_are_absent() {
        let release: ReleaseDetail =
            serde_json::from_value(json!({"id": 1, "title": "x", "year": 0, "released": "1991-09-24"}))
                .unwrap();
        assert_eq!(release.year, None);
        assert_eq!(release.display_year(), Some("1991-09-24"));

        let result: SearchResult =
            serde_json::from_value(json!({"id": 1, "title": "x", "year": ""})).unwrap();
        assert_eq!(result.year, None);
    }

    #[test]
    fn test_null_lists_decode_empty() {
        let release: ReleaseDetail = serde_json::from_value(json!({
            "id": 5,
            "title": "x",
            "genres": null,
            "images": null,
        }))
        .unwrap();
        assert!(release.genres.is_empty());
        assert!(release.images.is_empty());
    }

    #[test]
    fn test_cover_prefers_first_image() {
        let release: ReleaseDetail = serde_json::from_value(json!({
            "id": 5,
            "title": "x",
            "thumb": "https://i.discogs.com/thumb.jpg",
            "images": [{"uri": "https://i.discogs.com/full.jpg", "type": "primary"}],
        }))
        .unwrap();
        assert_eq!(release.cover_url(), Some("https://i.discogs.com/full.jpg"));

        let bare: ReleaseDetail = serde_json::from_value(json!({
            "id": 6,
            "title": "y",
            "thumb": "https://i.discogs.com/thumb.jpg",
        }))
        .unwrap();
        assert_eq!(bare.cover_url(), Some("https://i.discogs.com/thumb.jpg"));
    }

    #[test]
    fn test_artist_names_joined() {
        let release: ReleaseDetail = serde_json::from_value(json!({
            "id": 5,
            "title": "x",
            "artists": [{"name": "Lou Reed"}, {"name": "John Cale"}],
        }))
        .unwrap();
        assert_eq!(release.artist_names().as_deref(), Some("Lou Reed, John Cale"));

        let none: ReleaseDetail = serde_json::from_value(json!({"id": 6, "title": "y"})).unwrap();
        assert_eq!(none.artist_names(), None);
    }

    #[test]
    fn test_missing_pagination_defaults() {
        let page: SearchPage = serde_json::from_value(json!({"results": []})).unwrap();
        assert_eq!(page.pagination.unwrap_or_default(), PaginationData::default());
        assert_eq!(
            PaginationData::default(),
            PaginationData {
                page: 1,
                pages: 1,
                items: 0,
                per_page: 25
            }
        );
    }

    #[test]
    fn test_collection_item_label_line() {
        let result: SearchResult = serde_json::from_value(json!({
            "id": 1,
            "title": "x",
            "label": ["Sub Pop"],
        }))
        .unwrap();
        let item = CollectionItem::from(result);
        assert_eq!(item.label_line(), Some("Sub Pop"));
        assert_eq!(item.entry_id(), 1);

        let release: ReleaseDetail = serde_json::from_value(json!({
            "id": 2,
            "title": "y",
            "labels": [{"name": "Sub Pop", "catno": "SP 34"}],
        }))
        .unwrap();
        assert_eq!(CollectionItem::from(release).label_line(), Some("SP 34"));
    }
}
