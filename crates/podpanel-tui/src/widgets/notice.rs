//! Modal notice awaiting dismissal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

pub struct Notice<'a> {
    text: &'a str,
}

impl<'a> Notice<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for Notice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.text.chars().count() as u16 + 6).clamp(30, 70);
        let modal = centered_rect(width, 6, area);
        Clear.render(modal, buf);

        let lines = vec![
            Line::styled(self.text.to_string(), styles::status_yellow()),
            Line::default(),
            Line::styled("Enter / Esc to dismiss", styles::text_muted()),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(styles::modal_block("Notice"))
            .render(modal, buf);
    }
}
