//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{commands, keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // Settings first, then the health probe as a follow-up
        Message::Startup => {
            UpdateResult::action_then(UpdateAction::LoadSettings, Message::CheckHealth)
        }

        Message::Quit => {
            state.quitting = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            let tab = state.tab.next();
            navigation::select_tab(state, tab)
        }
        Message::PrevTab => {
            let tab = state.tab.prev();
            navigation::select_tab(state, tab)
        }
        Message::SelectTab(tab) => navigation::select_tab(state, tab),
        Message::CursorUp => navigation::cursor_up(state),
        Message::CursorDown => navigation::cursor_down(state),
        Message::SwitchProductsFocus => navigation::switch_products_focus(state),
        Message::SwitchJsonView => navigation::switch_json_view(state),
        Message::PageUp => navigation::page_up(state),
        Message::PageDown => navigation::page_down(state),
        Message::DismissNotice => {
            state.dismiss_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form editing
        // ─────────────────────────────────────────────────────────
        Message::StartEdit => navigation::start_edit(state),
        Message::EditInput(c) => navigation::edit_input(state, c),
        Message::EditBackspace => navigation::edit_backspace(state),
        Message::EditClear => navigation::edit_clear(state),
        Message::EndEdit => navigation::end_edit(state),
        Message::ToggleCopyPrevious => {
            state.settings.form.copy_previous = !state.settings.form.copy_previous;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Commands
        // ─────────────────────────────────────────────────────────
        Message::SaveSettings => commands::save_settings(state),
        Message::ReloadSettings => commands::reload_settings(state),
        Message::ResetSettings => commands::reset_settings(state),
        Message::StartMonitor => commands::start_monitor(state),
        Message::StopMonitor => commands::stop_monitor(state),
        Message::AnalyzeImage => commands::analyze_image(state),
        Message::CreateDraft => commands::create_draft(state),
        Message::QueueImage => commands::queue_image(state),
        Message::FetchVariants => commands::fetch_variants(state),
        Message::FetchMockups => commands::fetch_mockups(state),
        Message::RefreshDashboard => UpdateResult::action(UpdateAction::RefreshDashboard),
        Message::CheckHealth => UpdateResult::action(UpdateAction::CheckHealth),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::ToggleVariant(id) => commands::toggle_variant(state, id),
        Message::SelectAllVariants => commands::select_all_variants(state),
        Message::ClearVariants => commands::clear_variants(state),
        Message::ToggleMockup(id) => commands::toggle_mockup(state, &id),
        Message::ToggleHighlighted => navigation::toggle_highlighted(state),

        // ─────────────────────────────────────────────────────────
        // Backend results
        // ─────────────────────────────────────────────────────────
        Message::SettingsLoaded { result } => commands::handle_settings_loaded(state, result),
        Message::SettingsSaved { origin, result } => {
            commands::handle_settings_saved(state, origin, result)
        }
        Message::SettingsReset { result } => commands::handle_settings_reset(state, result),
        Message::MonitorStatusRefreshed { result } => {
            commands::handle_monitor_status(state, result)
        }
        Message::DashboardRefreshed { result } => commands::handle_dashboard(state, result),
        Message::MonitorCommandFinished { command, result } => {
            commands::handle_monitor_command(state, command, result)
        }
        Message::AnalysisFinished { result } => commands::handle_analysis(state, result),
        Message::DraftFinished { result } => commands::handle_draft(state, result),
        Message::QueueFinished { result } => commands::handle_queue(state, result),
        Message::VariantsFetched { result } => commands::handle_variants(state, result),
        Message::MockupsFetched { result } => commands::handle_mockups(state, result),
        Message::HealthChecked { result } => commands::handle_health(state, result),
    }
}
