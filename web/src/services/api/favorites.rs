//! Favorite-membership endpoints. The views mutate their local favorite
//! lists optimistically and call these for the durable write.

use gloo_net::http::Request;

use shared::dto::books::{BookSummary, FavoriteRequest};

use super::client::{self, ApiError};

/// GET /favorites
pub async fn list(limit: Option<u32>) -> Result<Vec<BookSummary>, ApiError> {
    let path = match limit {
        Some(limit) => format!("/favorites?limit={limit}"),
        None => "/favorites".to_string(),
    };
    client::get_json(&path).await
}

/// POST /favorites
pub async fn add(book_id: &str) -> Result<(), ApiError> {
    let resp = client::send_json(
        client::authorize(Request::post(&client::url("/favorites"))),
        &FavoriteRequest {
            book_id: book_id.to_string(),
        },
    )
    .await?;
    client::expect_ok(resp).await
}

/// DELETE /favorites/{id}
pub async fn remove(book_id: &str) -> Result<(), ApiError> {
    let resp = client::send(client::authorize(Request::delete(&client::url(&format!(
        "/favorites/{book_id}"
    )))))
    .await?;
    client::expect_ok(resp).await
}
