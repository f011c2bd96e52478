//! Authentication and account endpoints.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use shared::dto::auth::{
    AuthResponse, LoginRequest, PasswordChangeRequest, ProfileUpdateRequest,
    ProfileUpdateResponse, RegisterRequest,
};

use super::client::{self, ApiError};

/// POST /auth/login
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let resp = client::send_json(Request::post(&client::url("/auth/login")), request).await?;
    client::decode_json(resp).await
}

/// POST /auth/register
///
/// A successful registration does not authenticate the new account; the
/// caller redirects to the login screen. Any token in the response body is
/// deliberately ignored.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    let resp = client::send_json(Request::post(&client::url("/auth/register")), request).await?;
    client::expect_ok(resp).await
}

/// PUT /auth/profile
pub async fn update_profile(
    request: &ProfileUpdateRequest,
) -> Result<ProfileUpdateResponse, ApiError> {
    let resp = client::send_json(
        client::authorize(Request::put(&client::url("/auth/profile"))),
        request,
    )
    .await?;
    client::decode_json(resp).await
}

/// POST /auth/profile/image (multipart)
pub async fn update_profile_image(file: &File) -> Result<ProfileUpdateResponse, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob("profileImage", file).map_err(js_error)?;

    let resp = client::send_form(
        client::authorize(Request::post(&client::url("/auth/profile/image"))),
        form,
    )
    .await?;
    client::decode_json(resp).await
}

/// PUT /auth/password
pub async fn change_password(request: &PasswordChangeRequest) -> Result<(), ApiError> {
    let resp = client::send_json(
        client::authorize(Request::put(&client::url("/auth/password"))),
        request,
    )
    .await?;
    client::expect_ok(resp).await
}

/// DELETE /auth/profile
pub async fn delete_account() -> Result<(), ApiError> {
    let resp = client::send(client::authorize(Request::delete(&client::url("/auth/profile")))).await?;
    client::expect_ok(resp).await
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}
