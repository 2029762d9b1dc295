//! # Storage backends — durable string key/value persistence
//!
//! [`StorageBackend`] is the seam between the collection and session layers and
//! whatever durable storage the platform offers. Implementations:
//!
//! | Backend | Platform | Storage |
//! |---------|----------|---------|
//! | [`crate::MemoryBackend`] | native, tests | process-local `HashMap` |
//! | `LocalStorageBackend` | web (`web` feature) | `window.localStorage` |
//!
//! The trait is deliberately synchronous: `localStorage` is a synchronous API,
//! and every caller runs on the single UI task. It is also object safe so that
//! platform selection can hand out a `Rc<dyn StorageBackend>`.

use std::rc::Rc;

/// A durable string key/value store.
///
/// Writes must be visible to subsequent reads through any handle to the same
/// underlying storage. Implementations are expected to swallow storage-level
/// failures on write and report them as a missing value on read.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
