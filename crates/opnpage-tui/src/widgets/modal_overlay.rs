//! Shared modal overlay utilities
//!
//! Centering, background dimming and drop shadows for the welcome popup,
//! configuration modal, annotation popup and confirm dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Center a fixed-size rect within an area, clamped to the area
///
/// ```
/// use ratatui::layout::Rect;
/// use opnpage_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Restyle every cell in `area` with muted text on the deepest background
pub fn dim_background(buf: &mut Buffer, area: Rect, p: &Palette) {
    let dim_style = Style::default().fg(p.text_muted).bg(p.deepest_bg);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow along the right and bottom edges of `modal_rect`
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, p: &Palette) {
    let shadow_style = Style::default().fg(p.shadow).bg(p.shadow);
    let mut shade = |x: u16, y: u16| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    };

    let right_x = modal_rect.right();
    for y in modal_rect.y.saturating_add(1)..=modal_rect.bottom() {
        shade(right_x, y);
    }

    let bottom_y = modal_rect.bottom();
    for x in modal_rect.x.saturating_add(1)..=modal_rect.right() {
        shade(x, bottom_y);
    }
}

/// Dim the screen, shadow and clear a centered `width` x `height` rect
///
/// Returns the cleared rect for the caller to fill.
pub fn open_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16, p: &Palette) -> Rect {
    dim_background(buf, area, p);
    let modal = centered_rect(width, height, area);
    render_shadow(buf, modal, p);
    Clear.render(modal, buf);
    modal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_centered_rect_within_area() {
        let result = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(result, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let result = centered_rect(40, 10, Rect::new(0, 0, 30, 10));
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let result = centered_rect(40, 10, Rect::new(10, 5, 80, 24));
        assert_eq!(result, Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_offset_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, Rect::new(5, 3, 10, 5), &DARK);

        assert_eq!(buf[(5, 3)].bg, DARK.deepest_bg);
        assert_eq!(buf[(14, 7)].fg, DARK.text_muted);
        assert_ne!(buf[(4, 3)].bg, DARK.deepest_bg);
    }

    #[test]
    fn test_render_shadow_offset() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6), &LIGHT);

        assert_eq!(buf[(15, 3)].bg, LIGHT.shadow);
        assert_eq!(buf[(6, 8)].bg, LIGHT.shadow);
        assert_ne!(buf[(15, 2)].bg, LIGHT.shadow);
    }

    #[test]
    fn test_render_shadow_at_edge_does_not_panic() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2), &LIGHT);
    }

    #[test]
    fn test_open_modal_clears_center() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::filled(area, ratatui::buffer::Cell::new("X"));
        let modal = open_modal(&mut buf, area, 10, 4, &DARK);

        assert_eq!(modal, Rect::new(5, 3, 10, 4));
        assert_eq!(buf[(6, 4)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), "X");
    }
}
