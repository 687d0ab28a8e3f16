//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Notice => handle_key_notice(key),
        UiMode::Editing => handle_key_editing(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Any of Enter/Esc/Space dismisses the notice
fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissNotice),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Tab => Some(Message::EndEdit),
        InputKey::Backspace => Some(Message::EditBackspace),
        InputKey::CharCtrl('u') => Some(Message::EditClear),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::EditInput(c)),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PrevTab),
        InputKey::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            return Some(Message::SelectTab(Tab::ALL[index]));
        }
        InputKey::Char('s') | InputKey::CharCtrl('s') => return Some(Message::SaveSettings),
        InputKey::Char('m') => return Some(Message::StartMonitor),
        InputKey::Char('M') => return Some(Message::StopMonitor),
        InputKey::Char('R') => return Some(Message::ResetSettings),
        InputKey::Char('L') => return Some(Message::ReloadSettings),
        InputKey::Up | InputKey::Char('k') => return Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => return Some(Message::CursorDown),
        _ => {}
    }

    match state.tab {
        Tab::Dashboard => match key {
            InputKey::Char('r') => Some(Message::RefreshDashboard),
            InputKey::Char('h') => Some(Message::CheckHealth),
            _ => None,
        },
        Tab::Settings => match key {
            InputKey::Enter | InputKey::Char('e') => Some(Message::StartEdit),
            InputKey::Char(' ') => Some(Message::ToggleCopyPrevious)
                .filter(|_| state.selected_field().is_toggle()),
            _ => None,
        },
        Tab::Products => match key {
            InputKey::Char('v') => Some(Message::FetchVariants),
            InputKey::Char('o') => Some(Message::FetchMockups),
            InputKey::Char('a') => Some(Message::SelectAllVariants),
            InputKey::Char('c') => Some(Message::ClearVariants),
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleHighlighted),
            InputKey::Left | InputKey::Right | InputKey::Char('f') => {
                Some(Message::SwitchProductsFocus)
            }
            _ => None,
        },
        Tab::Upload => match key {
            InputKey::Enter | InputKey::Char('e') => Some(Message::StartEdit),
            InputKey::Char('a') => Some(Message::AnalyzeImage),
            InputKey::Char('d') => Some(Message::CreateDraft),
            InputKey::Char('u') => Some(Message::QueueImage),
            _ => None,
        },
        Tab::Logs => match key {
            InputKey::PageUp => Some(Message::PageUp),
            InputKey::PageDown => Some(Message::PageDown),
            InputKey::Left | InputKey::Right => Some(Message::SwitchJsonView),
            _ => None,
        },
    }
}
