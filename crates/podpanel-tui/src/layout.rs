//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, backend URL and health (glass container)
    pub header: Rect,

    /// View selector
    pub tabs: Rect,

    /// Active view
    pub body: Rect,

    /// Monitor status line
    pub status: Rect,

    /// Key hints for the active view
    pub footer: Rect,
}

/// Split the terminal into header, tab row, body and the two bottom bars
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
        footer: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.body.y, 4);
        assert_eq!(layout.body.height, 18); // 24 - 3 - 1 - 1 - 1
        assert_eq!(layout.status.y, 22);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_create_layout_full_width() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(layout.body.width, 120);
        assert_eq!(layout.status.width, 120);
    }
}
