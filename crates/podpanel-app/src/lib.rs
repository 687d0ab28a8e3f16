//! podpanel-app - Application state and orchestration for podpanel
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the settings record and its form, the variant/mockup
//! selection rules, the operations that talk to the backend, the two status
//! polling cycles, and client configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod selection;
pub mod settings_state;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::AppState;
