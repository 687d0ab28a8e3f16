//! View selector row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use podpanel_app::state::Tab;

use crate::theme::styles;

pub struct TabBar {
    active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), styles::keybinding()),
                    Span::raw(tab.title()),
                ])
            })
            .collect();

        Tabs::new(titles)
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::border_inactive()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_tabs_listed_with_numbers() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(TabBar::new(Tab::Dashboard), term.area());

        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert!(term.buffer_contains(tab.title()), "missing {}", tab.title());
            assert!(term.buffer_contains(&format!("{} {}", i + 1, tab.title())));
        }
    }

    #[test]
    fn test_active_tab_highlighted() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(TabBar::new(Tab::Products), term.area());

        let cell = term.cell_of("Products").expect("products tab rendered");
        assert_eq!(cell.bg, crate::theme::palette::ACCENT);

        let cell = term.cell_of("Settings").expect("settings tab rendered");
        assert_ne!(cell.bg, crate::theme::palette::ACCENT);
    }
}
