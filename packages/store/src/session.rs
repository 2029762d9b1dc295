//! Session value and its durable persistence.
//!
//! The session is a small process-wide record persisted under [`SESSION_KEY`]
//! and rehydrated at startup. The client cannot independently verify it; trust
//! is delegated to the credentialed session cookie the browser carries.

use serde::{Deserialize, Serialize};

use crate::backend::StorageBackend;

/// Storage key holding the JSON-encoded session.
pub const SESSION_KEY: &str = "session";

/// The authenticated-session value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub is_logged_in: bool,
    pub name: String,
    pub email: String,
}

impl Session {
    /// A logged-in session for the given email.
    pub fn logged_in(email: &str) -> Self {
        Self {
            is_logged_in: true,
            name: String::new(),
            email: email.to_string(),
        }
    }

    /// The logged-out session.
    pub fn logged_out() -> Self {
        Self::default()
    }
}

/// Load the persisted session, falling back to logged out when the stored
/// value is missing or unreadable.
pub fn load_session<B: StorageBackend + ?Sized>(backend: &B) -> Session {
    backend
        .get(SESSION_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist the session.
pub fn save_session<B: StorageBackend + ?Sized>(backend: &B, session: &Session) {
    match serde_json::to_string(session) {
        Ok(encoded) => backend.set(SESSION_KEY, &encoded),
        Err(err) => tracing::error!(%err, "failed to encode session"),
    }
}
