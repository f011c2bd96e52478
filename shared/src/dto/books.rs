use serde::{Deserialize, Serialize};

/// Denormalized book summary as rendered by every view.
///
/// Multiple independent copies of the same book id may live in different
/// views' local lists at once; there is no central cache. The live-update
/// channel broadcasts full replacements of this shape, matched by [`id`].
///
/// [`id`]: BookSummary::id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "coverImageURL")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub number_of_ratings: Option<u32>,
    #[serde(default)]
    pub unique_readers_count: Option<u32>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// Paged/sorted public listing response (`GET /public-books?sortBy=...`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicBooksResponse {
    pub books: Vec<BookSummary>,
}

/// Rating submission (POST /public-books/{id}/rate); 1..=5
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateRequest {
    pub rating: u8,
}

/// Favorite add request (POST /favorites)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub book_id: String,
}

/// Reading-history append request (POST /history)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    pub book_id: String,
}

/// One reading-history entry.
///
/// `book` is optional because a history row can outlive the book it points
/// at; such rows are skipped when rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub book: Option<BookSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read_at: Option<String>,
}

/// Personal collection of books
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub books: Vec<BookSummary>,
}

/// Collection creation request (POST /collections)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionRequest {
    pub name: String,
}
