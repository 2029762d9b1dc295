//! # localStorage backend — browser-side persistence
//!
//! [`LocalStorageBackend`] is the [`StorageBackend`] implementation used on the
//! **web platform**. It persists values into `window.localStorage` via
//! [`web_sys`], giving mock collections and the session a durable home across
//! page loads.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). An unavailable or quota-exhausted localStorage
//! degrades to "no local data", and reads then fall back to the seeded
//! defaults.

use crate::backend::StorageBackend;

/// `window.localStorage`-backed StorageBackend for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!(%key, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
