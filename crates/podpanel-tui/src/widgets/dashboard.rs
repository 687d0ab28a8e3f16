//! Dashboard view: counters, recent runs and the dashboard cycle status

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use podpanel_app::state::{DashboardView, StatusLine, RUN_PREVIEW_LEN};

use crate::theme::styles;

use super::{truncate, StatusText};

/// Shown instead of the run list when the backend has no runs
pub const EMPTY_RUNS: &str = "[ NO PRODUCTS YET ] Upload images to start creating products";

pub struct DashboardPanel<'a> {
    view: &'a DashboardView,
    status: &'a StatusLine,
    tick: u64,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(view: &'a DashboardView, status: &'a StatusLine) -> Self {
        Self {
            view,
            status,
            tick: 0,
        }
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn counters(&self) -> Line<'static> {
        let stats = &self.view.stats;
        let counter = |label: &'static str, value: u64, highlight: bool| {
            let value_style = if highlight && value > 0 {
                styles::status_red().add_modifier(Modifier::BOLD)
            } else {
                styles::accent_bold()
            };
            vec![
                Span::styled(format!("{label} "), styles::text_secondary()),
                Span::styled(value.to_string(), value_style),
                Span::raw("   "),
            ]
        };

        let mut spans = Vec::new();
        spans.extend(counter("Total products", stats.total_products, false));
        spans.extend(counter("Drafts", stats.draft_products, false));
        spans.extend(counter("Logs", stats.total_logs, false));
        spans.extend(counter("Errors", stats.error_logs, true));
        Line::from(spans)
    }

    fn run_lines(&self, width: usize) -> Vec<Line<'static>> {
        let preview = self.view.preview();
        if preview.is_empty() {
            return vec![Line::styled(EMPTY_RUNS, styles::text_muted())];
        }

        preview
            .iter()
            .map(|run| {
                let mut spans = vec![Span::styled(
                    truncate(&run.preview_line(), width),
                    styles::text_primary(),
                )];
                if let Some(err) = run.error() {
                    spans.push(Span::styled(" | ", styles::text_muted()));
                    spans.push(Span::styled(err.to_string(), styles::status_red()));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Dashboard", true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [counters, _, runs_title, runs, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.counters()).render(counters, buf);
        Paragraph::new(Line::styled(
            format!("Recent runs (latest {RUN_PREVIEW_LEN})"),
            styles::text_secondary(),
        ))
        .render(runs_title, buf);
        Paragraph::new(self.run_lines(inner.width as usize)).render(runs, buf);
        StatusText::new(self.status)
            .tick(self.tick)
            .render(status, buf);
    }
}
