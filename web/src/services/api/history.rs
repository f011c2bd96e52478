//! Reading-history endpoints.

use gloo_net::http::Request;

use shared::dto::books::{HistoryEntry, HistoryRequest};

use super::client::{self, ApiError};

/// GET /history
pub async fn list(limit: Option<u32>) -> Result<Vec<HistoryEntry>, ApiError> {
    let path = match limit {
        Some(limit) => format!("/history?limit={limit}"),
        None => "/history".to_string(),
    };
    client::get_json(&path).await
}

/// POST /history - appended whenever a book is opened for reading.
pub async fn append(book_id: &str) -> Result<(), ApiError> {
    let resp = client::send_json(
        client::authorize(Request::post(&client::url("/history"))),
        &HistoryRequest {
            book_id: book_id.to_string(),
        },
    )
    .await?;
    client::expect_ok(resp).await
}
