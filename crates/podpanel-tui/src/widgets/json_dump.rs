//! Scrollable pretty-printed JSON

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct JsonDump<'a> {
    title: &'a str,
    json: &'a str,
    scroll: u16,
}

impl<'a> JsonDump<'a> {
    pub fn new(title: &'a str, json: &'a str) -> Self {
        Self {
            title,
            json,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for JsonDump<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(self.title, true);
        let total = self.json.lines().count() as u16;
        // Never scroll past the last line
        let scroll = self.scroll.min(total.saturating_sub(1));

        let text = if self.json.is_empty() {
            "No data yet"
        } else {
            self.json
        };
        Paragraph::new(text)
            .style(styles::text_primary())
            .scroll((scroll, 0))
            .block(block)
            .render(area, buf);
    }
}
