//! Session context and hooks for the UI.

use api::{ApiClient, SessionManager, SignupForm, SignupOutcome};
use dioxus::prelude::*;
use store::Session;

/// Get a handle to the application session.
/// Reads subscribe the caller to login/logout transitions.
pub fn use_session() -> SessionHandle {
    SessionHandle {
        inner: use_context::<Signal<SessionManager>>(),
    }
}

/// Handle over the session state machine held in context.
///
/// Transitions run on a clone of the manager and the result is written back,
/// so an in-flight call never holds a signal borrow across an await.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    inner: Signal<SessionManager>,
}

impl SessionHandle {
    pub fn session(&self) -> Session {
        self.inner.read().session().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().is_logged_in()
    }

    /// The shared HTTP client; on native targets this is what carries the
    /// session cookie between calls.
    pub fn client(&self) -> ApiClient {
        self.inner.peek().client().clone()
    }

    pub async fn login(mut self, email: String, password: String) -> bool {
        let mut manager = self.inner.peek().clone();
        let ok = manager.login(&email, &password).await;
        self.inner.set(manager);
        ok
    }

    pub async fn logout(mut self) {
        let mut manager = self.inner.peek().clone();
        manager.logout().await;
        self.inner.set(manager);
    }

    pub async fn signup(&self, form: SignupForm) -> SignupOutcome {
        let manager = self.inner.peek().clone();
        manager.signup(&form).await
    }

    /// Drop the session locally; used when a fetch came back 401.
    pub fn force_logout(mut self) {
        tracing::warn!("server rejected credentials, dropping local session");
        let mut manager = self.inner.peek().clone();
        manager.force_logout();
        self.inner.set(manager);
    }
}

/// Provider component that owns the session state machine.
/// Wrap the app with this component to enable `use_session`.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let manager = use_signal(|| SessionManager::new(ApiClient::from_env(), crate::make_backend()));
    use_context_provider(|| manager);

    rsx! {
        {children}
    }
}
