//! Single-line status region

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use podpanel_app::state::{StatusLine, Tone};

use crate::theme::styles;

use super::{spinner, truncate};

/// Renders a [`StatusLine`] in its tone, with an optional leading label
pub struct StatusText<'a> {
    line: &'a StatusLine,
    label: Option<&'a str>,
    suffix: Option<String>,
    tick: u64,
}

impl<'a> StatusText<'a> {
    pub fn new(line: &'a StatusLine) -> Self {
        Self {
            line,
            label: None,
            suffix: None,
            tick: 0,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Muted text after the status, e.g. a refresh time
    pub fn suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    /// Frame counter driving the busy spinner
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for StatusText<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if let Some(label) = self.label {
            spans.push(Span::styled(format!("{label} "), styles::text_secondary()));
        }
        if self.line.tone == Tone::Busy {
            spans.push(Span::styled(
                format!("{} ", spinner(self.tick)),
                styles::tone(Tone::Busy),
            ));
        }
        spans.push(Span::styled(
            truncate(&self.line.text, area.width as usize),
            styles::tone(self.line.tone),
        ));
        if let Some(suffix) = self.suffix {
            spans.push(Span::styled(format!("  {suffix}"), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
