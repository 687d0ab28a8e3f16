//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use podpanel_app::state::{AppState, EditTarget, JsonView, Tab, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI.
///
/// Pure with respect to state: everything drawn is read from `state`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.api_url, &state.health),
        areas.header,
    );
    frame.render_widget(widgets::TabBar::new(state.tab), areas.tabs);

    match state.tab {
        Tab::Dashboard => frame.render_widget(
            widgets::DashboardPanel::new(&state.dashboard, &state.dashboard_status)
                .tick(state.tick),
            areas.body,
        ),
        Tab::Settings => {
            let editing = match state.editing {
                Some(EditTarget::Setting(field)) => Some(field),
                _ => None,
            };
            frame.render_widget(
                widgets::SettingsPanel::new(&state.settings, state.settings_cursor)
                    .editing(editing)
                    .status(&state.settings_status, state.tick),
                areas.body,
            );
        }
        Tab::Products => frame.render_widget(widgets::ProductsPanel::new(state), areas.body),
        Tab::Upload => frame.render_widget(widgets::UploadPanel::new(state), areas.body),
        Tab::Logs => {
            let (title, json) = match state.json_view {
                JsonView::Runs => ("Runs (←→ for logs)", &state.dashboard.runs_json),
                JsonView::Logs => ("Logs (←→ for runs)", &state.dashboard.logs_json),
            };
            frame.render_widget(
                widgets::JsonDump::new(title, json).scroll(state.json_scroll),
                areas.body,
            );
        }
    }

    // Monitor line is visible from every view, unless the settings never
    // loaded: that failure blocks most commands, so it takes the row.
    if !state.settings.loaded && state.settings_status.is_error() {
        frame.render_widget(
            widgets::StatusText::new(&state.settings_status).tick(state.tick),
            areas.status,
        );
    } else {
        let refreshed = state
            .monitor_refreshed_at
            .map(|t| t.format("%H:%M:%S").to_string());
        frame.render_widget(
            widgets::StatusText::new(&state.monitor_status)
                .suffix(refreshed)
                .tick(state.tick),
            areas.status,
        );
    }
    frame.render_widget(widgets::HelpBar::new(state.tab, state.ui_mode), areas.footer);

    if state.ui_mode == UiMode::Notice {
        if let Some(text) = &state.notice {
            frame.render_widget(widgets::Notice::new(text), area);
        }
    }
}
