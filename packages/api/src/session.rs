//! # Session state machine
//!
//! [`SessionManager`] owns the process-wide [`Session`] value and the only
//! three transitions that may mutate it: login, logout, and the forced logout
//! used when the server reports 401. Signup goes through here too but never
//! changes local state. Every transition persists the session through the
//! storage backend so a page reload rehydrates it.
//!
//! None of the operations throw past this boundary: login collapses every
//! failure mode (wrong credentials, server error, no connection) into `false`,
//! signup into a `{ok, message}` outcome, and logout ignores the server's
//! answer entirely.

use std::rc::Rc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use store::{load_session, save_session, Session, StorageBackend};

use crate::client::ApiClient;

/// Signup fields collected by the registration form.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

/// Structured signup result; never an error.
#[derive(Clone, Debug, PartialEq)]
pub struct SignupOutcome {
    pub ok: bool,
    pub message: String,
}

/// Owner of the authenticated-session value.
///
/// Clones share the storage backend and the HTTP client's cookie state, so a
/// transition applied to a clone persists to the same place.
#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
    backend: Rc<dyn StorageBackend>,
    session: Session,
}

impl SessionManager {
    /// Rehydrate the session from storage.
    pub fn new(client: ApiClient, backend: Rc<dyn StorageBackend>) -> Self {
        let session = load_session(&*backend);
        Self {
            client,
            backend,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    /// The HTTP client all remote calls should share.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Authenticate. `true` only on an exact 200; any other outcome,
    /// including a transport failure, leaves the session untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        let response = self
            .client
            .request(Method::POST, "/api/user/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::OK => {
                self.apply(Session::logged_in(email));
                true
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "login rejected");
                false
            }
            Err(err) => {
                tracing::warn!(%err, "login transport failure");
                false
            }
        }
    }

    /// Sign out. The server call is best effort; locally the session always
    /// transitions to logged out.
    pub async fn logout(&mut self) {
        let _ = self
            .client
            .request(Method::POST, "/api/user/logout")
            .send()
            .await;
        self.apply(Session::logged_out());
    }

    /// Drop the session locally without a server round trip. Used when a
    /// request came back 401.
    pub fn force_logout(&mut self) {
        self.apply(Session::logged_out());
    }

    /// Create an account. Does not touch the session: the new user still has
    /// to log in.
    pub async fn signup(&self, form: &SignupForm) -> SignupOutcome {
        let response = self
            .client
            .request(Method::POST, "/api/user")
            .json(form)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => SignupOutcome {
                ok: true,
                message: "Account created.".to_string(),
            },
            Ok(response) => {
                let message = response
                    .json::<Value>()
                    .await
                    .ok()
                    .and_then(|body| {
                        body.get("message")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| "Failed to create account.".to_string());
                SignupOutcome { ok: false, message }
            }
            Err(err) => {
                tracing::warn!(%err, "signup transport failure");
                SignupOutcome {
                    ok: false,
                    message: "Cannot connect to server.".to_string(),
                }
            }
        }
    }

    fn apply(&mut self, session: Session) {
        save_session(&*self.backend, &session);
        self.session = session;
    }
}
