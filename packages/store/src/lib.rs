pub mod backend;
pub mod collection;
pub mod seeds;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageBackend;

pub use backend::StorageBackend;
pub use collection::{Item, MockStore, StoreError};
pub use session::{load_session, save_session, Session, SESSION_KEY};
