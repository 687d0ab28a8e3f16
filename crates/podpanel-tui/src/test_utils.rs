//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend` and
//! asserted on by searching the resulting text.

use podpanel_app::AppState;
use podpanel_core::{CatalogVariant, MockupDescriptor, VariantOptions};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Wrapper around a `TestBackend` terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one line
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|&y| self.line(y).contains(text))
    }

    pub fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// All content, one terminal row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            out.push_str(&self.line(y));
            out.push('\n');
        }
        out
    }

    /// Cell at the first occurrence of `text`
    pub fn cell_of(&self, text: &str) -> Option<&ratatui::buffer::Cell> {
        let y = self.find_line(text)?;
        let line = self.line(y);
        let byte = line.find(text)?;
        let x = line[..byte].chars().count() as u16;
        Some(&self.buffer()[(x, y)])
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_state() -> AppState {
    AppState::with_api_url("http://127.0.0.1:8000")
}

pub fn variant(id: i64, title: &str, color: &str) -> CatalogVariant {
    CatalogVariant {
        id,
        title: Some(title.to_string()),
        options: VariantOptions {
            color: Some(color.to_string()),
            size: None,
        },
        price: Some(2500),
        cost: Some(1200),
    }
}

pub fn mockup(id: &str, name: &str) -> MockupDescriptor {
    MockupDescriptor {
        mockup_id: id.to_string(),
        display_name: Some(name.to_string()),
        image_url: None,
    }
}
