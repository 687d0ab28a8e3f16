//! Key hints for the active view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use podpanel_app::state::{Tab, UiMode};

use crate::theme::styles;

pub struct HelpBar {
    tab: Tab,
    mode: UiMode,
}

impl HelpBar {
    pub fn new(tab: Tab, mode: UiMode) -> Self {
        Self { tab, mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Notice => &[("Enter", "dismiss")],
            UiMode::Editing => &[("Enter", "done"), ("Ctrl+u", "clear"), ("Esc", "done")],
            UiMode::Normal => match self.tab {
                Tab::Dashboard => &[
                    ("r", "refresh"),
                    ("h", "health"),
                    ("m/M", "monitor on/off"),
                    ("Tab", "next view"),
                    ("q", "quit"),
                ],
                Tab::Settings => &[
                    ("↑↓", "field"),
                    ("Enter", "edit"),
                    ("Space", "toggle"),
                    ("s", "save"),
                    ("L", "reload"),
                    ("R", "reset"),
                    ("q", "quit"),
                ],
                Tab::Products => &[
                    ("v", "variants"),
                    ("o", "mockups"),
                    ("Space", "toggle"),
                    ("a", "all"),
                    ("c", "clear"),
                    ("←→", "focus"),
                    ("q", "quit"),
                ],
                Tab::Upload => &[
                    ("Enter", "path"),
                    ("a", "analyze"),
                    ("d", "draft"),
                    ("u", "queue"),
                    ("q", "quit"),
                ],
                Tab::Logs => &[
                    ("↑↓/PgUp/PgDn", "scroll"),
                    ("←→", "runs/logs"),
                    ("q", "quit"),
                ],
            },
        }
    }
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" [{key}]"), styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_products_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(HelpBar::new(Tab::Products, UiMode::Normal), term.area());
        assert!(term.buffer_contains("[v] variants"));
        assert!(term.buffer_contains("[a] all"));
    }

    #[test]
    fn test_editing_overrides_tab_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(HelpBar::new(Tab::Upload, UiMode::Editing), term.area());
        assert!(term.buffer_contains("[Ctrl+u] clear"));
        assert!(!term.buffer_contains("analyze"));
    }
}
