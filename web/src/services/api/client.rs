//! # HTTP client adapter
//!
//! Every outbound request is built here so the bearer token is attached in
//! exactly one place. A request is either authenticated (token present in
//! persistent storage at send time) or anonymous; there is no mixed state.
//! Network and HTTP failures propagate to the caller as [`ApiError`]
//! without retries.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shared::dto::auth::ErrorResponse;

use crate::utils::constants::API_BASE;
use crate::utils::storage;

/// Backend communication error.
///
/// `Http` carries the backend's own `message` field when the body parses as
/// an [`ErrorResponse`], otherwise the HTTP status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Join an endpoint path onto the API base URL.
pub(crate) fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Attach `Authorization: Bearer <token>` when a token is persisted.
pub(crate) fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Send a bodyless request.
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Send a request with a JSON body.
pub(crate) async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Send a request with a multipart form body. The browser fills in the
/// boundary content type itself.
pub(crate) async fn send_form(
    builder: RequestBuilder,
    form: web_sys::FormData,
) -> Result<Response, ApiError> {
    builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Decode a 2xx JSON body, or surface the backend's error message.
pub(crate) async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.ok() {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(error_from(resp).await)
    }
}

/// Accept any 2xx response, discarding its body.
pub(crate) async fn expect_ok(resp: Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(error_from(resp).await)
    }
}

async fn error_from(resp: Response) -> ApiError {
    let status = resp.status();
    let message = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {}", status),
    };
    ApiError::Http { status, message }
}

/// Convenience for authorized GETs of a JSON resource.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = send(authorize(Request::get(&url(path)))).await?;
    decode_json(resp).await
}
