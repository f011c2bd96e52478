//! Public and personal book endpoints.

use gloo_net::http::Request;
use web_sys::FormData;

use shared::dto::books::{BookSummary, PublicBooksResponse, RateRequest};

use super::client::{self, ApiError};

/// GET /public-books
pub async fn list_public() -> Result<Vec<BookSummary>, ApiError> {
    client::get_json("/public-books").await
}

/// GET /public-books?sortBy=...&limit=...
///
/// The sorted listing wraps its result, unlike the plain one; the backend
/// grew these shapes at different times.
pub async fn list_public_sorted(
    sort_by: &str,
    limit: Option<u32>,
) -> Result<PublicBooksResponse, ApiError> {
    let mut path = format!("/public-books?sortBy={}", urlencoding::encode(sort_by));
    if let Some(limit) = limit {
        path.push_str(&format!("&limit={limit}"));
    }
    client::get_json(&path).await
}

/// GET /public-books/search?query=...
pub async fn search(query: &str) -> Result<Vec<BookSummary>, ApiError> {
    client::get_json(&format!(
        "/public-books/search?query={}",
        urlencoding::encode(query)
    ))
    .await
}

/// GET /public-books/search?genre=...
pub async fn by_genre(genre: &str) -> Result<Vec<BookSummary>, ApiError> {
    client::get_json(&format!(
        "/public-books/search?genre={}",
        urlencoding::encode(genre)
    ))
    .await
}

/// GET /public-books/author/{author}?excludeBookId=...
pub async fn by_author(author: &str, exclude_book_id: &str) -> Result<Vec<BookSummary>, ApiError> {
    client::get_json(&format!(
        "/public-books/author/{}?excludeBookId={}",
        urlencoding::encode(author),
        urlencoding::encode(exclude_book_id)
    ))
    .await
}

/// POST /public-books/{id}/rate - returns the updated summary, which the
/// caller swaps into its local list in place.
pub async fn rate(book_id: &str, rating: u8) -> Result<BookSummary, ApiError> {
    let resp = client::send_json(
        client::authorize(Request::post(&client::url(&format!(
            "/public-books/{book_id}/rate"
        )))),
        &RateRequest { rating },
    )
    .await?;
    client::decode_json(resp).await
}

/// GET /books/{id} - single book for the reader view
pub async fn fetch(book_id: &str) -> Result<BookSummary, ApiError> {
    client::get_json(&format!("/books/{book_id}")).await
}

/// GET /personal-books?filterBy=...&sortBy=...
pub async fn list_personal(filter_by: &str, sort_by: &str) -> Result<Vec<BookSummary>, ApiError> {
    client::get_json(&format!(
        "/personal-books?filterBy={}&sortBy={}",
        urlencoding::encode(filter_by),
        urlencoding::encode(sort_by)
    ))
    .await
}

/// GET /personal-books/trending?limit=...
pub async fn trending(limit: Option<u32>) -> Result<Vec<BookSummary>, ApiError> {
    let path = match limit {
        Some(limit) => format!("/personal-books/trending?limit={limit}"),
        None => "/personal-books/trending".to_string(),
    };
    client::get_json(&path).await
}

/// POST /personal-books (multipart: metadata + cover image + PDF)
pub async fn create_personal(form: FormData) -> Result<(), ApiError> {
    let resp = client::send_form(
        client::authorize(Request::post(&client::url("/personal-books"))),
        form,
    )
    .await?;
    client::expect_ok(resp).await
}

/// PUT /personal-books/{id} with `{"isPublic": true}` - publish to the
/// public library.
pub async fn publish(book_id: &str) -> Result<(), ApiError> {
    let resp = client::send_json(
        client::authorize(Request::put(&client::url(&format!(
            "/personal-books/{book_id}"
        )))),
        &serde_json::json!({ "isPublic": true }),
    )
    .await?;
    client::expect_ok(resp).await
}

/// DELETE /personal-books/{id}
pub async fn delete_personal(book_id: &str) -> Result<(), ApiError> {
    let resp = client::send(client::authorize(Request::delete(&client::url(&format!(
        "/personal-books/{book_id}"
    )))))
    .await?;
    client::expect_ok(resp).await
}
