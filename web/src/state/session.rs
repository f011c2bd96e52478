//! Session state management
//!
//! Single owner of the authenticated session: one `RwSignal<Option<Session>>`
//! provided at the application root. Every lifecycle transition (login,
//! restore, profile edits, logout) funnels through [`SessionContext`] so the
//! signal and persistent storage never disagree.

use leptos::prelude::*;

use shared::dto::auth::{
    LoginRequest, PasswordChangeRequest, ProfileUpdateRequest, RegisterRequest,
};
use web_sys::File;

use crate::services::api;
use crate::services::session::{evaluate_stored_token, Session, StoredToken};
use crate::utils::storage;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    /// True while a session-changing request is in flight.
    pub loading: RwSignal<bool>,
}

impl SessionContext {
    /// Build the context, restoring a persisted session when the stored
    /// token is still valid. An undecodable or expired token is cleared
    /// so the next startup sees a clean slate.
    pub fn new() -> Self {
        let restored = match evaluate_stored_token(storage::load_token().as_deref(), now_ms()) {
            StoredToken::Active(session) => Some(session),
            StoredToken::Invalid(err) => {
                log::warn!("Discarding stored token: {err}");
                storage::clear_token();
                None
            }
            StoredToken::Absent => None,
        };
        Self {
            session: RwSignal::new(restored),
            loading: RwSignal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.username.clone()))
    }

    /// Authenticate and install the session. Persists the token before
    /// updating the signal so a reload mid-transition still restores.
    pub async fn login(&self, email: String, password: String) -> Result<(), String> {
        self.loading.set(true);
        let result = async {
            let response = api::auth::login(&LoginRequest { email, password })
                .await
                .map_err(|e| e.to_string())?;
            let session =
                Session::from_token(&response.token, now_ms()).map_err(|e| e.to_string())?;
            storage::store_token(&response.token);
            self.session.set(Some(session));
            Ok(())
        }
        .await;
        self.loading.set(false);
        result
    }

    /// Create an account. Deliberately does not authenticate; the caller
    /// sends the user to the login page on success.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), String> {
        self.loading.set(true);
        let result = api::auth::register(&RegisterRequest {
            username,
            email,
            password,
        })
        .await
        .map_err(|e| e.to_string());
        self.loading.set(false);
        result
    }

    /// Submit profile edits. When the backend issues a fresh token the
    /// session is rebuilt from it; otherwise the submitted identity fields
    /// are merged in place.
    pub async fn update_profile(&self, update: ProfileUpdateRequest) -> Result<(), String> {
        self.loading.set(true);
        let result = async {
            let response = api::auth::update_profile(&update)
                .await
                .map_err(|e| e.to_string())?;
            match response.token {
                Some(token) => self.install_token(&token)?,
                None => self.session.update(|s| {
                    if let Some(session) = s {
                        session.merge_profile(&update);
                    }
                }),
            }
            Ok(())
        }
        .await;
        self.loading.set(false);
        result
    }

    /// Upload a new profile image.
    pub async fn update_profile_image(&self, file: &File) -> Result<(), String> {
        self.loading.set(true);
        let result = async {
            let response = api::auth::update_profile_image(file)
                .await
                .map_err(|e| e.to_string())?;
            match response.token {
                Some(token) => self.install_token(&token)?,
                None => {
                    if let Some(image) = response.profile_image {
                        self.session.update(|s| {
                            if let Some(session) = s {
                                session.profile_image = Some(image);
                            }
                        });
                    }
                }
            }
            Ok(())
        }
        .await;
        self.loading.set(false);
        result
    }

    /// Change the password. The session is untouched on success.
    pub async fn change_password(&self, current: String, new: String) -> Result<(), String> {
        self.loading.set(true);
        let result = api::auth::change_password(&PasswordChangeRequest {
            current_password: current,
            new_password: new,
        })
        .await
        .map_err(|e| e.to_string());
        self.loading.set(false);
        result
    }

    /// Delete the account, then tear the session down like a logout.
    pub async fn delete_account(&self) -> Result<(), String> {
        self.loading.set(true);
        let result = api::auth::delete_account().await.map_err(|e| e.to_string());
        self.loading.set(false);
        if result.is_ok() {
            self.logout();
        }
        result
    }

    /// Clear the session and hard-redirect to the login page. The full
    /// reload drops every in-memory list and the live-update channel.
    pub fn logout(&self) {
        storage::clear_token();
        self.session.set(None);
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href("/login") {
                log::error!("Failed to redirect after logout: {err:?}");
            }
        }
    }

    fn install_token(&self, token: &str) -> Result<(), String> {
        let session = Session::from_token(token, now_ms()).map_err(|e| e.to_string())?;
        storage::store_token(token);
        self.session.set(Some(session));
        Ok(())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
