//! # podpanel-client - Backend API Access
//!
//! Talks to the automation backend over HTTP. Everything the backend owns
//! (image analysis, listing copy, folder monitoring, the catalog service,
//! persisted settings, run history, logs) is reached through here.
//!
//! Depends on [`podpanel_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Transport
//! - [`Transport`] - Single-attempt JSON request/response exchange
//! - [`failure_detail()`] - Error text extraction from a failed response body
//!
//! ### Typed API
//! - [`Backend`] - One async method per backend endpoint (`Send` futures)
//! - [`LocalBackend`] - The same trait without the `Send` bound
//! - [`HttpBackend`] - [`Backend`] over [`Transport`]
//! - [`DraftRequest`], [`DraftCreated`], [`QueuedItem`], [`ImagePathRequest`]

pub mod api;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod transport;

pub use api::{
    Backend, DraftCreated, DraftRequest, HttpBackend, ImagePathRequest, LocalBackend, QueuedItem,
};
pub use transport::{failure_detail, Transport, API_PREFIX};
