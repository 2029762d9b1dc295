//! Shared storage-backend constructor for all platforms.
//!
//! Returns the appropriate [`store::StorageBackend`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via
//!   [`store::LocalStorageBackend`]
//! - **Native** (tests, desktop shells): process memory via
//!   [`store::MemoryBackend`]

use std::rc::Rc;

use store::StorageBackend;

/// Create the platform-appropriate storage backend.
pub fn make_backend() -> Rc<dyn StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Rc::new(store::MemoryBackend::new())
    }
}
