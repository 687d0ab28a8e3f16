//! Products view: catalog variant chips, mockup choices and the selection
//! counter

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use podpanel_app::selection::counter_text;
use podpanel_app::state::{AppState, ProductsFocus, Tone};
use podpanel_core::{CatalogVariant, MockupDescriptor, Settings};

use crate::theme::{palette, styles, swatch::swatch_color};

use super::{scroll_offset, truncate, StatusText};

pub struct ProductsPanel<'a> {
    state: &'a AppState,
}

impl<'a> ProductsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn settings(&self) -> &Settings {
        &self.state.settings.record
    }

    fn variant_row(&self, variant: &CatalogVariant, highlighted: bool, width: usize) -> Line<'a> {
        let selected = self.settings().is_variant_selected(variant.id);
        let (marker, label_style) = if selected {
            (
                "✓ ",
                Style::default()
                    .fg(palette::CHIP_SELECTED)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", styles::text_primary())
        };
        let label_style = if highlighted {
            styles::focused_selected()
        } else {
            label_style
        };

        Line::from(vec![
            Span::styled(marker, styles::status_green()),
            Span::styled("■ ", Style::default().fg(swatch_color(variant.color_name()))),
            Span::styled(truncate(&variant.label(), width.saturating_sub(4)), label_style),
        ])
    }

    fn mockup_row(&self, mockup: &MockupDescriptor, highlighted: bool, width: usize) -> Line<'a> {
        let selected = self.settings().is_mockup_selected(&mockup.mockup_id);
        let checkbox = if selected { "[x] " } else { "[ ] " };
        let style = if highlighted {
            styles::focused_selected()
        } else if selected {
            Style::default().fg(palette::CHIP_SELECTED)
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(checkbox, styles::accent()),
            Span::styled(truncate(mockup.label(), width.saturating_sub(4)), style),
        ])
    }

    #[allow(clippy::too_many_arguments)]
    fn render_list<T>(
        &self,
        title: &str,
        items: &[T],
        cursor: usize,
        focused: bool,
        empty_hint: &'static str,
        row: impl Fn(&T, bool, usize) -> Line<'a>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = styles::titled_block(title, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if items.is_empty() {
            Paragraph::new(Line::styled(empty_hint, styles::text_muted())).render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let offset = scroll_offset(cursor, height);
        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, item)| row(item, focused && i == cursor, inner.width as usize))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for ProductsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [lists, counter, status] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [variants, mockups] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(lists);

        let state = self.state;
        let focus = state.products_focus;

        self.render_list(
            &format!("Variants ({})", state.loaded_variants.len()),
            state.loaded_variants.as_slice(),
            state.variant_cursor,
            focus == ProductsFocus::Variants,
            "Press v to load variants for the blueprint/provider",
            |v, hl, w| self.variant_row(v, hl, w),
            variants,
            buf,
        );
        self.render_list(
            &format!("Mockups ({})", state.loaded_mockups.len()),
            state.loaded_mockups.as_slice(),
            state.mockup_cursor,
            focus == ProductsFocus::Mockups,
            "Press o to load mockups",
            |m, hl, w| self.mockup_row(m, hl, w),
            mockups,
            buf,
        );

        let counter_style = if self.settings().variant_limit_reached() {
            styles::tone(Tone::Error)
        } else {
            styles::text_secondary()
        };
        Paragraph::new(Line::styled(
            format!(
                " {} | Mockups selected: {}",
                counter_text(self.settings()),
                self.settings().selected_mockups.len()
            ),
            counter_style,
        ))
        .render(counter, buf);

        StatusText::new(&state.products_status)
            .tick(state.tick)
            .render(status, buf);
    }
}
