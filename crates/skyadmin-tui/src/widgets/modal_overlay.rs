//! Shared modal overlay utilities: centering, dimming and drop shadows

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area by overriding their styles
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);

    for y in modal_rect.y.saturating_add(1)..bottom_y.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    for x in modal_rect.x.saturating_add(1)..right_x.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim the screen, then clear and shadow a centered modal of the given size
///
/// Returns the modal rect for the caller to draw into.
pub fn open_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    dim_background(buf, area);
    let modal = centered_rect(width, height, area);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let result = centered_rect(40, 10, Rect::new(0, 0, 30, 8));
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 8);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_covers_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area);
        for y in 0..5 {
            for x in 0..10 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.fg, palette::TEXT_MUTED);
                assert_eq!(cell.bg, palette::DEEPEST_BG);
            }
        }
    }

    #[test]
    fn test_shadow_at_edge_does_not_panic() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, area);
        render_shadow(&mut buf, Rect::new(2, 1, 4, 2));
        assert_eq!(buf[(6u16, 2u16)].bg, palette::SHADOW);
    }
}
