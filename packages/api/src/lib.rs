//! # API crate — remote account backend client for Userdeck
//!
//! This crate is the data layer of the Userdeck front-end. It wraps an
//! unpredictable REST backend in typed operations and canonical shapes, and
//! owns the session state machine the UI drives.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: credentialed HTTP plus shared response parsing |
//! | [`normalize`] | Canonicalise heterogeneous backend payloads into [`User`]/[`Listing`] |
//! | [`users`] | Paginated list/create/update/delete against `/api/user` |
//! | [`profile`] | Current-user profile fetch/edit and multipart image upload |
//! | [`session`] | [`SessionManager`]: login/logout/signup transitions with persistence |
//! | [`reconcile`] | Pure optimistic merges applied to in-memory listings after mutations |
//! | [`error`] | [`ApiError`] taxonomy shared by every operation |
//!
//! The backend's response shapes are not guaranteed; everything read from the
//! wire goes through [`normalize`] before it reaches UI-visible state.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod profile;
pub mod reconcile;
pub mod session;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use model::{Listing, User};
pub use normalize::{normalize_listing, normalize_user};
pub use reconcile::{merge_user, reconcile_delete, reconcile_update};
pub use session::{SessionManager, SignupForm, SignupOutcome};
pub use users::{UserDraft, UserPatch};

pub use store::Session;

#[cfg(test)]
pub(crate) mod testutil;
