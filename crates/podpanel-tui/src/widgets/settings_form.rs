//! Settings form

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use podpanel_app::settings_state::{FormField, SettingsState};
use podpanel_app::state::StatusLine;

use crate::theme::styles;

use super::StatusText;

/// Width of the label column
const LABEL_WIDTH: usize = 24;

pub struct SettingsPanel<'a> {
    settings: &'a SettingsState,
    cursor: usize,
    editing: Option<FormField>,
    status: Option<&'a StatusLine>,
    tick: u64,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(settings: &'a SettingsState, cursor: usize) -> Self {
        Self {
            settings,
            cursor,
            editing: None,
            status: None,
            tick: 0,
        }
    }

    /// Outcome of the last settings load, shown under the form
    pub fn status(mut self, status: &'a StatusLine, tick: u64) -> Self {
        self.status = Some(status);
        self.tick = tick;
        self
    }

    /// Field currently receiving keystrokes
    pub fn editing(mut self, field: Option<FormField>) -> Self {
        self.editing = field;
        self
    }

    fn value_text(&self, field: FormField) -> String {
        let form = &self.settings.form;
        match form.text(field) {
            None => {
                if form.copy_previous {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            Some(text) if field.is_secret() && self.editing != Some(field) => {
                "•".repeat(text.chars().count())
            }
            Some(text) => text.to_string(),
        }
    }

    fn row(&self, index: usize, field: FormField) -> Line<'static> {
        let focused = index == self.cursor;
        let editing = self.editing == Some(field);

        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let value_style = if editing {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(self.value_text(field), value_style),
        ];
        if editing {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Settings", true);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = FormField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| self.row(i, *field))
            .collect();

        let [form, _, footer] = Layout::vertical([
            Constraint::Length(FormField::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(lines).render(form, buf);

        match self.status {
            Some(status) => StatusText::new(status).tick(self.tick).render(footer, buf),
            None if !self.settings.loaded => Paragraph::new(Line::styled(
                "Settings not loaded from the backend yet",
                styles::text_muted(),
            ))
            .render(footer, buf),
            None => {}
        }
    }
}
