//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `commands`: Backend commands and their completions
//! - `navigation`: Tabs, cursors, scrolling and form editing

pub(crate) mod commands;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use podpanel_client::DraftRequest;
use podpanel_core::Settings;

use crate::message::{Message, SaveOrigin};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update.
///
/// Variants that save first carry the settings snapshot taken at dispatch;
/// the spawned task never reads live state.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// `GET /settings`
    LoadSettings,

    /// `POST /settings` with a full snapshot
    SaveSettings {
        settings: Settings,
        origin: SaveOrigin,
    },

    /// `POST /settings/reset`, then reload
    ResetSettings,

    /// Save, then `POST /monitor/start`
    StartMonitor { settings: Settings },

    /// `POST /monitor/stop` (no save)
    StopMonitor,

    /// Save, then `POST /analyze`
    AnalyzeImage {
        settings: Settings,
        image_path: String,
    },

    /// Save, then `POST /draft` with the cached analysis
    CreateDraft {
        settings: Settings,
        request: DraftRequest,
    },

    /// `POST /queue` (no save)
    QueueImage { image_path: String },

    /// Save, then `GET /printify/variants`
    FetchVariants { settings: Settings },

    /// Save, then `GET /printify/mockups`
    FetchMockups { settings: Settings },

    /// One-off monitor status fetch outside the cycle
    RefreshMonitor,

    /// One-off dashboard fetch outside the cycle
    RefreshDashboard,

    /// `GET /health`
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
