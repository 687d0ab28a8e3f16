//! Custom widget components

mod dashboard;
mod header;
mod help_bar;
mod json_dump;
pub mod modal_overlay;
mod notice;
mod products;
mod settings_form;
mod status_line;
mod tab_bar;
mod upload;

pub use dashboard::DashboardPanel;
pub use header::MainHeader;
pub use help_bar::HelpBar;
pub use json_dump::JsonDump;
pub use notice::Notice;
pub use products::ProductsPanel;
pub use settings_form::SettingsPanel;
pub use status_line::StatusText;
pub use tab_bar::TabBar;
pub use upload::UploadPanel;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner frame for busy indicators
pub(crate) fn spinner(tick: u64) -> &'static str {
    SPINNER[(tick / 2) as usize % SPINNER.len()]
}

/// Cut `text` to at most `max` display columns, ending in `…` when cut
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// First row to draw so that `cursor` stays inside a window of `height` rows
pub(crate) fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}
