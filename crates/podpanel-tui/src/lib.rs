//! podpanel-tui - Terminal UI for podpanel
//!
//! This crate provides the ratatui-based terminal interface. It wires the
//! HTTP backend and the status pollers from podpanel-app into an event loop
//! and renders the dashboard, settings, products, upload and runs/logs views.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
