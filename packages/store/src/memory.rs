use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::StorageBackend;

/// In-memory StorageBackend for testing and desktop fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{MockStore, StoreError};
    use serde_json::{json, Map, Value};

    fn payload(entries: &[(&str, &str)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_first_access_seeds_users() {
        let backend = MemoryBackend::new();
        let store = MockStore::new(backend.clone());

        let items = store.list("users");
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id, "u-1001");

        // Seeding writes back immediately
        assert!(backend.get("userdeck:v1:users").is_some());
    }

    #[test]
    fn test_unknown_collection_seeds_empty() {
        let store = MockStore::new(MemoryBackend::new());
        assert!(store.list("widgets").is_empty());
    }

    #[test]
    fn test_corrupt_value_is_reseeded() {
        let backend = MemoryBackend::new();
        backend.set("userdeck:v1:users", "{not json");

        let store = MockStore::new(backend.clone());
        let items = store.list("users");
        assert_eq!(items.len(), 4);

        // The healed value was persisted
        let raw = backend.get("userdeck:v1:users").unwrap();
        assert!(serde_json::from_str::<Vec<crate::Item>>(&raw).is_ok());
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let backend = MemoryBackend::new();
        let store = MockStore::new(backend.clone());

        let created = store.create("users", payload(&[("name", "Sam Rivera")]));
        assert!(!created.id.is_empty());
        assert!(!created.created_at.is_empty());
        assert_eq!(created.created_at, created.updated_at);

        let items = store.list("users");
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].id, created.id);

        // A fresh store over the same backend sees the write
        let reopened = MockStore::new(backend);
        assert_eq!(reopened.list("users").len(), 5);
    }

    #[test]
    fn test_create_ids_never_collide() {
        let store = MockStore::new(MemoryBackend::new());
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            let item = store.create("ids", Map::new());
            assert!(seen.insert(item.id), "duplicate id generated");
        }
    }

    #[test]
    fn test_update_merges_fields_and_refreshes_timestamp() {
        let store = MockStore::new(MemoryBackend::new());
        let created = store.create("users", payload(&[("name", "Sam"), ("role", "Viewer")]));

        let updated = store
            .update("users", &created.id, payload(&[("role", "Editor")]))
            .unwrap();
        assert_eq!(updated.fields["name"], json!("Sam"));
        assert_eq!(updated.fields["role"], json!("Editor"));
        assert_eq!(updated.created_at, created.created_at);

        let listed = store.list("users");
        let stored = listed.iter().find(|i| i.id == created.id).unwrap();
        assert_eq!(stored.fields["role"], json!("Editor"));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store = MockStore::new(MemoryBackend::new());
        let before = store.list("users");

        let err = store.update("users", "nope", Map::new()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "nope"));

        // Nothing was mutated
        assert_eq!(store.list("users"), before);
    }

    #[test]
    fn test_delete_removes_record() {
        let store = MockStore::new(MemoryBackend::new());
        let deleted = store.delete("users", "u-1002").unwrap();
        assert_eq!(deleted, "u-1002");

        let items = store.list("users");
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.id != "u-1002"));
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let store = MockStore::new(MemoryBackend::new());
        let before = store.list("users");

        let err = store.delete("users", "nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "nope"));
        assert_eq!(store.list("users"), before);
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = MockStore::new(MemoryBackend::new());
        store.create("users", payload(&[("name", "Temp")]));
        store.delete("users", "u-1001").unwrap();

        let items = store.reset("users");
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id, "u-1001");
        assert_eq!(store.list("users"), items);
    }

    #[test]
    fn test_returned_items_are_detached_copies() {
        let store = MockStore::new(MemoryBackend::new());
        let mut items = store.list("users");
        items[0]
            .fields
            .insert("name".to_string(), json!("Mutated Locally"));

        // Caller-side mutation never reaches stored state
        assert_eq!(store.list("users")[0].fields["name"], json!("Avery Thompson"));
    }

    #[test]
    fn test_session_roundtrip() {
        use crate::session::{load_session, save_session, Session};

        let backend = MemoryBackend::new();
        assert_eq!(load_session(&backend), Session::default());

        let session = Session::logged_in("a@b.com");
        save_session(&backend, &session);
        assert_eq!(load_session(&backend), session);
        assert!(load_session(&backend).is_logged_in);

        // Corrupt stored value falls back to logged out
        backend.set(crate::SESSION_KEY, "][");
        assert_eq!(load_session(&backend), Session::default());
    }
}
