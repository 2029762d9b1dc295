//! This crate contains all shared UI for the workspace.

mod backend;
pub use backend::make_backend;

mod session;
pub use session::{use_session, SessionHandle, SessionProvider};

mod components;
pub use components::{Alert, Field};
