//! # Mock collections — seeded CRUD over a storage backend
//!
//! [`MockStore`] provides the offline/demo data path: named collections of
//! [`Item`] records serialised as JSON arrays under versioned keys
//! (`userdeck:v1:<collection>`). The version segment keeps incompatible schema
//! generations from colliding in storage.
//!
//! Reads are self-healing: a missing or corrupt stored value is replaced by the
//! built-in seed for that collection (see [`crate::seeds`]) and written back
//! immediately. Every mutation persists the whole collection synchronously
//! before returning, and all returned values are owned copies, so callers can
//! mutate results freely without touching stored state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::backend::StorageBackend;
use crate::seeds;

const KEY_PREFIX: &str = "userdeck:v1:";

/// Errors raised by [`MockStore`] mutations.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// The mutation target does not exist. Never silently ignored.
    #[error("item not found: {id}")]
    NotFound { id: String },
}

/// A generic record in a mock collection.
///
/// `fields` carries the arbitrary payload; `created_at` and `updated_at` are
/// ISO-8601 strings, with `updated_at` refreshed on every mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Seeded CRUD over named collections.
#[derive(Clone, Debug)]
pub struct MockStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> MockStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn key(collection: &str) -> String {
        format!("{KEY_PREFIX}{collection}")
    }

    fn seed(&self, collection: &str) -> Vec<Item> {
        let items = seeds::default_seed(collection);
        self.write(collection, &items);
        items
    }

    fn read(&self, collection: &str) -> Vec<Item> {
        let Some(raw) = self.backend.get(&Self::key(collection)) else {
            return self.seed(collection);
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(%collection, %err, "failed to parse stored collection, reseeding");
                self.seed(collection)
            }
        }
    }

    fn write(&self, collection: &str, items: &[Item]) {
        match serde_json::to_string(items) {
            Ok(encoded) => self.backend.set(&Self::key(collection), &encoded),
            Err(err) => tracing::error!(%collection, %err, "failed to encode collection"),
        }
    }

    /// List every item in the collection, most recent first.
    pub fn list(&self, collection: &str) -> Vec<Item> {
        self.read(collection)
    }

    /// Create a new item from `payload` and prepend it to the collection.
    ///
    /// The identifier is always freshly generated; `createdAt`/`updatedAt` in
    /// the payload override the generated timestamps.
    pub fn create(&self, collection: &str, mut payload: Map<String, Value>) -> Item {
        let mut items = self.read(collection);
        let now = now_iso();
        payload.remove("id");
        let created_at = take_string(&mut payload, "createdAt").unwrap_or_else(|| now.clone());
        let updated_at = take_string(&mut payload, "updatedAt").unwrap_or(now);

        let item = Item {
            id: create_id(),
            created_at,
            updated_at,
            fields: payload,
        };
        items.insert(0, item.clone());
        self.write(collection, &items);
        item
    }

    /// Shallow-merge `patch` into the item with the given id.
    pub fn update(
        &self,
        collection: &str,
        id: &str,
        mut patch: Map<String, Value>,
    ) -> Result<Item, StoreError> {
        let mut items = self.read(collection);
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return Err(StoreError::NotFound { id: id.to_string() });
        };

        patch.remove("id");
        let updated_at = take_string(&mut patch, "updatedAt").unwrap_or_else(now_iso);
        let item = &mut items[index];
        item.updated_at = updated_at;
        if let Some(created_at) = take_string(&mut patch, "createdAt") {
            item.created_at = created_at;
        }
        for (key, value) in patch {
            item.fields.insert(key, value);
        }

        let updated = item.clone();
        self.write(collection, &items);
        Ok(updated)
    }

    /// Remove the item with the given id, returning it.
    pub fn delete(&self, collection: &str, id: &str) -> Result<String, StoreError> {
        let items = self.read(collection);
        let next: Vec<Item> = items.iter().filter(|item| item.id != id).cloned().collect();
        if next.len() == items.len() {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.write(collection, &next);
        Ok(id.to_string())
    }

    /// Replace the collection with its built-in seed.
    pub fn reset(&self, collection: &str) -> Vec<Item> {
        self.seed(collection)
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn now_iso() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn create_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
