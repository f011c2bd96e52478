//! Persisted session token access
//!
//! The token string in localStorage is the only durable client state. A
//! missing/unavailable store degrades to "no token" so private browsing
//! modes behave like a signed-out session.

use web_sys::Storage;

use crate::utils::constants::TOKEN_STORAGE_KEY;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, if any.
pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

/// Persist a freshly issued token.
pub fn store_token(token: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("Failed to persist session token");
            }
        }
        None => log::warn!("localStorage unavailable; session will not survive reload"),
    }
}

/// Remove the persisted token. Safe to call when none is stored.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
