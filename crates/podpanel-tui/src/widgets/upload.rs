//! Upload view: image path, analysis summary and upload status

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use podpanel_app::state::{AppState, EditTarget};

use crate::theme::styles;

use super::StatusText;

pub struct UploadPanel<'a> {
    state: &'a AppState,
}

impl<'a> UploadPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn path_line(&self) -> Line<'static> {
        let editing = self.state.editing == Some(EditTarget::ImagePath);
        let mut spans = vec![Span::styled("Image path  ", styles::text_secondary())];
        if self.state.image_path.is_empty() && !editing {
            spans.push(Span::styled(
                "(press Enter to type a path)",
                styles::text_muted(),
            ));
        } else {
            let style = if editing {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            spans.push(Span::styled(self.state.image_path.clone(), style));
        }
        if editing {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn analysis_line(&self) -> Line<'static> {
        match &self.state.analysis {
            Some(_) => Line::styled(
                "Cached analysis will be sent with the next draft",
                styles::status_green(),
            ),
            None => Line::styled(
                "No analysis yet; drafts will be analyzed by the backend",
                styles::text_muted(),
            ),
        }
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Upload", true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [path, cached, status, _, summary] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(self.path_line()).render(path, buf);
        Paragraph::new(self.analysis_line()).render(cached, buf);
        StatusText::new(&self.state.upload_status)
            .tick(self.state.tick)
            .render(status, buf);

        let summary_block = styles::titled_block("Analysis", false);
        Paragraph::new(self.state.analysis_summary.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .block(summary_block)
            .render(summary, buf);
    }
}
