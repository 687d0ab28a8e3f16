//! Message types for the application (TEA pattern)

use serde_json::Value;

use podpanel_client::{DraftCreated, QueuedItem};
use podpanel_core::{
    AnalysisResult, CatalogVariant, DashboardStats, HealthStatus, MockupDescriptor,
    MonitorStatus, Settings,
};

use crate::input_key::InputKey;
use crate::state::Tab;

/// Outcome of a backend call; the error side carries the failure detail
pub type Outcome<T> = std::result::Result<T, String>;

/// Who asked for a settings save; decides where the outcome is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOrigin {
    /// The explicit save command
    User,
    /// A variant or mockup selection change
    Selection,
}

/// Monitor commands share one completion message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorCommand {
    Start,
    Stop,
}

/// One dashboard cycle: counters, runs and logs fetched together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    /// Raw run records in backend order
    pub runs: Vec<Value>,
    pub logs: Vec<Value>,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Issued once by the runner before the first frame
    Startup,

    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    NextTab,
    PrevTab,
    SelectTab(Tab),
    CursorUp,
    CursorDown,
    /// Switch between the variant and mockup lists
    SwitchProductsFocus,
    /// Switch between the runs and logs dumps
    SwitchJsonView,
    PageUp,
    PageDown,
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Form editing
    // ─────────────────────────────────────────────────────────
    /// Begin editing the field under the cursor (or flip a checkbox)
    StartEdit,
    EditInput(char),
    EditBackspace,
    EditClear,
    EndEdit,
    ToggleCopyPrevious,

    // ─────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────
    SaveSettings,
    /// Fetch the settings record again, replacing the form
    ReloadSettings,
    ResetSettings,
    StartMonitor,
    StopMonitor,
    AnalyzeImage,
    CreateDraft,
    QueueImage,
    FetchVariants,
    FetchMockups,
    RefreshDashboard,
    CheckHealth,

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    ToggleVariant(i64),
    SelectAllVariants,
    ClearVariants,
    ToggleMockup(String),
    /// Toggle whatever the products cursor points at
    ToggleHighlighted,

    // ─────────────────────────────────────────────────────────
    // Backend results
    // ─────────────────────────────────────────────────────────
    SettingsLoaded {
        result: Outcome<Settings>,
    },
    SettingsSaved {
        origin: SaveOrigin,
        result: Outcome<()>,
    },
    SettingsReset {
        result: Outcome<Settings>,
    },
    MonitorStatusRefreshed {
        result: Outcome<MonitorStatus>,
    },
    DashboardRefreshed {
        result: Outcome<DashboardSnapshot>,
    },
    MonitorCommandFinished {
        command: MonitorCommand,
        result: Outcome<()>,
    },
    AnalysisFinished {
        result: Outcome<AnalysisResult>,
    },
    DraftFinished {
        result: Outcome<DraftCreated>,
    },
    QueueFinished {
        result: Outcome<QueuedItem>,
    },
    VariantsFetched {
        result: Outcome<Vec<CatalogVariant>>,
    },
    MockupsFetched {
        result: Outcome<Vec<MockupDescriptor>>,
    },
    HealthChecked {
        result: Outcome<HealthStatus>,
    },
}
