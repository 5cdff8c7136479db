//! Session Token Storage
//!
//! The token is kept as a raw string in local storage so that it can be
//! copied into the `token` request header unchanged.

use gloo_storage::{LocalStorage, Storage};

use crate::config::TOKEN_STORAGE_KEY;

/// Token saved by the last successful login, if any
pub fn load_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Err(err) = LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, token) {
        log::error!("[AUTH] failed to persist token: {:?}", err);
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
}
