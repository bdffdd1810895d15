use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Stacked layout shared by the list and detail screens
pub struct AppLayout {
    pub header_area: Rect,
    pub main_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Header: search box, import prompt or conversation title (3 rows)
    /// - Main: conversation list or thread
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header (bordered, one line of text)
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        Self { header_area: chunks[0], main_area: chunks[1], status_area: chunks[2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.header_area.y, 0);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        assert_eq!(layout.main_area.y, 3);
        assert_eq!(layout.main_area.height, 26);
        assert_eq!(layout.main_area.width, 100);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 7);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.main_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
    }
}
