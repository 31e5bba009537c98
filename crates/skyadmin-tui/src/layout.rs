//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, signed-in user and mode tabs
    pub header: Rect,

    /// The active screen
    pub body: Rect,

    /// Last status message
    pub status: Rect,

    /// Key hints for the active screen
    pub hints: Rect,
}

/// Split the terminal into header, body, status line and hint line
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status line
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
        hints: chunks[3],
    }
}

/// Split a form area into one row per field
///
/// Multi-line fields take `tall` rows and share whatever is left over.
pub fn form_rows(area: Rect, tall: &[bool]) -> Vec<Rect> {
    let constraints: Vec<Constraint> = tall
        .iter()
        .map(|&t| {
            if t {
                Constraint::Min(4)
            } else {
                Constraint::Length(3)
            }
        })
        .collect();
    Layout::vertical(constraints).split(area).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 19); // 24 - 3 - 1 - 1
        assert_eq!(layout.status.y, 22);
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn test_create_layout_keeps_full_width() {
        let layout = create(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.width, 120);
        assert_eq!(layout.body.width, 120);
        assert_eq!(layout.hints.width, 120);
    }

    #[test]
    fn test_form_rows_gives_remaining_space_to_tall_fields() {
        let rows = form_rows(Rect::new(0, 0, 80, 20), &[false, true, false]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].height, 3);
        assert_eq!(rows[2].height, 3);
        assert_eq!(rows[1].height, 14);
    }
}
