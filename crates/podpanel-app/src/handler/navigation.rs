//! Tabs, cursors, scrolling and form editing

use crate::message::Message;
use crate::settings_state::FormField;
use crate::state::{AppState, EditTarget, JsonView, ProductsFocus, Tab, UiMode};

use super::UpdateResult;

/// Lines moved by PageUp/PageDown in the JSON dumps
const PAGE_LINES: u16 = 10;

pub fn select_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    state.tab = tab;
    UpdateResult::none()
}

pub fn cursor_up(state: &mut AppState) -> UpdateResult {
    match state.tab {
        Tab::Settings => {
            state.settings_cursor = state.settings_cursor.saturating_sub(1);
        }
        Tab::Products => match state.products_focus {
            ProductsFocus::Variants => {
                state.variant_cursor = state.variant_cursor.saturating_sub(1);
            }
            ProductsFocus::Mockups => {
                state.mockup_cursor = state.mockup_cursor.saturating_sub(1);
            }
        },
        Tab::Logs => {
            state.json_scroll = state.json_scroll.saturating_sub(1);
        }
        Tab::Dashboard | Tab::Upload => {}
    }
    UpdateResult::none()
}

pub fn cursor_down(state: &mut AppState) -> UpdateResult {
    match state.tab {
        Tab::Settings => {
            state.settings_cursor = (state.settings_cursor + 1).min(FormField::ALL.len() - 1);
        }
        Tab::Products => match state.products_focus {
            ProductsFocus::Variants => {
                let last = state.loaded_variants.len().saturating_sub(1);
                state.variant_cursor = (state.variant_cursor + 1).min(last);
            }
            ProductsFocus::Mockups => {
                let last = state.loaded_mockups.len().saturating_sub(1);
                state.mockup_cursor = (state.mockup_cursor + 1).min(last);
            }
        },
        Tab::Logs => {
            state.json_scroll = state.json_scroll.saturating_add(1);
            state.clamp_json_scroll();
        }
        Tab::Dashboard | Tab::Upload => {}
    }
    UpdateResult::none()
}

pub fn page_up(state: &mut AppState) -> UpdateResult {
    state.json_scroll = state.json_scroll.saturating_sub(PAGE_LINES);
    UpdateResult::none()
}

pub fn page_down(state: &mut AppState) -> UpdateResult {
    state.json_scroll = state.json_scroll.saturating_add(PAGE_LINES);
    state.clamp_json_scroll();
    UpdateResult::none()
}

pub fn switch_products_focus(state: &mut AppState) -> UpdateResult {
    state.products_focus = match state.products_focus {
        ProductsFocus::Variants => ProductsFocus::Mockups,
        ProductsFocus::Mockups => ProductsFocus::Variants,
    };
    UpdateResult::none()
}

pub fn switch_json_view(state: &mut AppState) -> UpdateResult {
    state.json_view = match state.json_view {
        JsonView::Runs => JsonView::Logs,
        JsonView::Logs => JsonView::Runs,
    };
    state.json_scroll = 0;
    UpdateResult::none()
}

/// Toggle the variant or mockup under the products cursor
pub fn toggle_highlighted(state: &mut AppState) -> UpdateResult {
    let msg = match state.products_focus {
        ProductsFocus::Variants => state
            .highlighted_variant()
            .map(|v| Message::ToggleVariant(v.id)),
        ProductsFocus::Mockups => state
            .highlighted_mockup()
            .map(|m| Message::ToggleMockup(m.mockup_id.clone())),
    };
    match msg {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

pub fn start_edit(state: &mut AppState) -> UpdateResult {
    let target = match state.tab {
        Tab::Settings => {
            let field = state.selected_field();
            if field.is_toggle() {
                return UpdateResult::message(Message::ToggleCopyPrevious);
            }
            EditTarget::Setting(field)
        }
        Tab::Upload => EditTarget::ImagePath,
        _ => return UpdateResult::none(),
    };
    state.editing = Some(target);
    state.ui_mode = UiMode::Editing;
    UpdateResult::none()
}

pub fn edit_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(buffer) = state.edit_buffer_mut() {
        buffer.push(c);
    }
    UpdateResult::none()
}

pub fn edit_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = state.edit_buffer_mut() {
        buffer.pop();
    }
    UpdateResult::none()
}

pub fn edit_clear(state: &mut AppState) -> UpdateResult {
    if let Some(buffer) = state.edit_buffer_mut() {
        buffer.clear();
    }
    UpdateResult::none()
}

/// Leave edit mode. Edits stay in the form until the next save.
pub fn end_edit(state: &mut AppState) -> UpdateResult {
    state.editing = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}
