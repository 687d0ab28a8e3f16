//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use podpanel_core::{AnalysisResult, CatalogVariant, DashboardStats, MockupDescriptor, RunRecord};

use crate::message::DashboardSnapshot;
use crate::settings_state::{FormField, SettingsState};

/// Top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Settings,
    Products,
    Upload,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Settings,
        Tab::Products,
        Tab::Upload,
        Tab::Logs,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Settings => "Settings",
            Tab::Products => "Products",
            Tab::Upload => "Upload",
            Tab::Logs => "Runs & Logs",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Normal,
    /// Typing into a form field
    Editing,
    /// Modal notice awaiting dismissal
    Notice,
}

/// What an edit session writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Setting(FormField),
    ImagePath,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductsFocus {
    #[default]
    Variants,
    Mockups,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonView {
    #[default]
    Runs,
    Logs,
}

/// Styling class of a status region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Muted,
    Busy,
    Ok,
    Error,
}

/// Text plus tone shown in one status region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Ok,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    pub fn busy(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Busy,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Muted,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

/// Backend reachability as last probed by `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Up {
        service: String,
    },
    Down {
        detail: String,
    },
}

/// Number of runs shown in the dashboard preview
pub const RUN_PREVIEW_LEN: usize = 8;

/// Latest dashboard cycle as displayed
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub runs: Vec<RunRecord>,
    /// Pretty-printed JSON of the runs list
    pub runs_json: String,
    /// Pretty-printed JSON of the logs list
    pub logs_json: String,
    pub refreshed_at: Option<DateTime<Local>>,
}

impl DashboardView {
    pub fn apply(&mut self, snapshot: DashboardSnapshot) {
        self.runs_json = pretty_json(&snapshot.runs);
        self.logs_json = pretty_json(&snapshot.logs);
        self.stats = snapshot.stats;
        self.runs = snapshot.runs.iter().map(RunRecord::from_raw).collect();
        self.refreshed_at = Some(Local::now());
    }

    /// First [`RUN_PREVIEW_LEN`] runs in backend order
    pub fn preview(&self) -> &[RunRecord] {
        &self.runs[..self.runs.len().min(RUN_PREVIEW_LEN)]
    }
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub tab: Tab,
    pub ui_mode: UiMode,
    pub quitting: bool,

    /// Backend base URL, for the header
    pub api_url: String,
    pub health: BackendHealth,

    pub settings: SettingsState,
    /// Load/reload outcome; only settings handlers write it
    pub settings_status: StatusLine,
    pub settings_cursor: usize,
    pub editing: Option<EditTarget>,

    /// Image path typed on the upload view
    pub image_path: String,

    /// Catalog lists, replaced wholesale on each fetch
    pub loaded_variants: Vec<CatalogVariant>,
    pub loaded_mockups: Vec<MockupDescriptor>,
    pub products_focus: ProductsFocus,
    pub variant_cursor: usize,
    pub mockup_cursor: usize,

    /// Most recent analyze result; read, never cleared, by create-draft
    pub analysis: Option<AnalysisResult>,
    pub analysis_summary: String,

    pub monitor_status: StatusLine,
    pub monitor_refreshed_at: Option<DateTime<Local>>,
    pub upload_status: StatusLine,
    pub products_status: StatusLine,
    pub dashboard_status: StatusLine,
    pub dashboard: DashboardView,

    pub json_view: JsonView,
    pub json_scroll: u16,

    /// Message shown by the notice overlay
    pub notice: Option<String>,

    /// Frame counter for busy spinners
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_api_url(String::new())
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            tab: Tab::default(),
            ui_mode: UiMode::default(),
            quitting: false,
            api_url: api_url.into(),
            health: BackendHealth::default(),
            settings: SettingsState::default(),
            settings_status: StatusLine::busy("Loading settings..."),
            settings_cursor: 0,
            editing: None,
            image_path: String::new(),
            loaded_variants: Vec::new(),
            loaded_mockups: Vec::new(),
            products_focus: ProductsFocus::default(),
            variant_cursor: 0,
            mockup_cursor: 0,
            analysis: None,
            analysis_summary: String::new(),
            monitor_status: StatusLine::muted("Monitoring: -"),
            monitor_refreshed_at: None,
            upload_status: StatusLine::default(),
            products_status: StatusLine::default(),
            dashboard_status: StatusLine::muted("Waiting for first refresh"),
            dashboard: DashboardView::default(),
            json_view: JsonView::default(),
            json_scroll: 0,
            notice: None,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Field under the settings cursor
    pub fn selected_field(&self) -> FormField {
        FormField::ALL[self.settings_cursor.min(FormField::ALL.len() - 1)]
    }

    pub fn highlighted_variant(&self) -> Option<&CatalogVariant> {
        self.loaded_variants.get(self.variant_cursor)
    }

    pub fn highlighted_mockup(&self) -> Option<&MockupDescriptor> {
        self.loaded_mockups.get(self.mockup_cursor)
    }

    /// Text buffer of the active edit session
    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        match self.editing? {
            EditTarget::Setting(field) => self.settings.form.text_mut(field),
            EditTarget::ImagePath => Some(&mut self.image_path),
        }
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Largest useful scroll offset: the last line of the visible dump
    pub fn max_json_scroll(&self) -> u16 {
        let json = match self.json_view {
            JsonView::Runs => &self.dashboard.runs_json,
            JsonView::Logs => &self.dashboard.logs_json,
        };
        let lines = json.lines().count().saturating_sub(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    pub fn clamp_json_scroll(&mut self) {
        self.json_scroll = self.json_scroll.min(self.max_json_scroll());
    }

    /// Keep list cursors inside their lists after a fetch
    pub fn clamp_cursors(&mut self) {
        self.variant_cursor = self
            .variant_cursor
            .min(self.loaded_variants.len().saturating_sub(1));
        self.mockup_cursor = self
            .mockup_cursor
            .min(self.loaded_mockups.len().saturating_sub(1));
    }
}
