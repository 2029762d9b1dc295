//! Error taxonomy for remote operations.

use thiserror::Error;

/// Failure of a remote operation.
///
/// Every variant renders to a short human-readable message suitable for inline
/// display next to the triggering action. Nothing here is retried
/// automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is extracted from
    /// a JSON `message` field in the body when one parses, otherwise a generic
    /// `"Request failed (<status>)"`.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// A 401 on a profile or listing fetch. Handled by forcing a logout
    /// instead of showing a generic error.
    #[error("not authenticated")]
    Unauthorized,

    /// A 2xx response whose body could not be parsed as JSON.
    #[error("unexpected response from server")]
    Malformed,

    /// Transport-level failure: no response at all.
    #[error("Cannot connect to server.")]
    Network(String),
}

impl ApiError {
    /// Status code of a server-reported failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
