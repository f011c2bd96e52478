//! Personal-collection endpoints.

use gloo_net::http::Request;

use shared::dto::books::{Collection, CollectionRequest};

use super::client::{self, ApiError};

/// GET /collections
pub async fn list() -> Result<Vec<Collection>, ApiError> {
    client::get_json("/collections").await
}

/// POST /collections
pub async fn create(name: &str) -> Result<Collection, ApiError> {
    let resp = client::send_json(
        client::authorize(Request::post(&client::url("/collections"))),
        &CollectionRequest {
            name: name.to_string(),
        },
    )
    .await?;
    client::decode_json(resp).await
}

/// POST /collections/add-from-public/{bookId} - copy a public book into the
/// personal library.
pub async fn add_from_public(book_id: &str) -> Result<(), ApiError> {
    let resp = client::send(client::authorize(Request::post(&client::url(&format!(
        "/collections/add-from-public/{book_id}"
    )))))
    .await?;
    client::expect_ok(resp).await
}
