//! Header bar with app title, backend URL and backend health

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use podpanel_app::state::BackendHealth;

use crate::theme::{palette, styles};

use super::truncate;

pub struct MainHeader<'a> {
    api_url: &'a str,
    health: &'a BackendHealth,
}

impl<'a> MainHeader<'a> {
    pub fn new(api_url: &'a str, health: &'a BackendHealth) -> Self {
        Self { api_url, health }
    }

    /// `(icon, text, style)` of the health pill
    fn health_indicator(&self) -> (&'static str, String, Style) {
        match self.health {
            BackendHealth::Unknown => ("○", "checking".to_string(), styles::text_muted()),
            BackendHealth::Up { service } => (
                "●",
                if service.is_empty() {
                    "backend up".to_string()
                } else {
                    service.clone()
                },
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            BackendHealth::Down { detail } => (
                "✗",
                format!("unreachable: {detail}"),
                styles::status_red(),
            ),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, health_text, health_style) = self.health_indicator();
        let title = " podpanel ";
        let fixed = title.len() + 3 + 4; // separators and icon
        let room = (inner.width as usize).saturating_sub(fixed);
        let url_room = room / 2;
        let health_room = room - url_room.min(self.api_url.len());

        let line = Line::from(vec![
            Span::styled(title, styles::accent_bold()),
            Span::styled("│ ", styles::border_inactive()),
            Span::styled(truncate(self.api_url, url_room), styles::text_secondary()),
            Span::styled(" │ ", styles::border_inactive()),
            Span::styled(format!("{icon} "), health_style),
            Span::styled(truncate(&health_text, health_room), health_style),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
