//! Shared modal overlay utilities.
//!
//! Provides reusable functions for placing overlays, dimming backgrounds,
//! and rendering shadows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use segbuild_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let card = centered_rect(40, 10, area);
/// assert_eq!(card, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Full-height panel docked to the right edge of an area.
///
/// Width is `width_percent` of the area, but never less than `min_width`
/// (clamped to the area).
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use segbuild_tui::widgets::modal_overlay::side_panel_rect;
///
/// let area = Rect::new(0, 0, 100, 30);
/// assert_eq!(side_panel_rect(40, 50, area), Rect::new(50, 0, 50, 30));
/// ```
pub fn side_panel_rect(width_percent: u16, min_width: u16, area: Rect) -> Rect {
    let by_percent = (area.width as u32 * width_percent.min(100) as u32 / 100) as u16;
    let width = by_percent.max(min_width).min(area.width);
    Rect::new(
        area.x + area.width - width,
        area.y,
        width,
        area.height,
    )
}

/// Dim all cells in the given area by overriding their styles.
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

/// Render a 1-cell shadow offset to the right and bottom of a rect.
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    // Right edge
    let right_x = rect.x.saturating_add(rect.width);
    for y in rect.y.saturating_add(1)..rect.y.saturating_add(rect.height).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge
    let bottom_y = rect.y.saturating_add(rect.height);
    for x in rect.x.saturating_add(1)..rect.x.saturating_add(rect.width).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect and prepare it for overlay content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
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
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(40, 10, area), Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_side_panel_uses_percentage() {
        let area = Rect::new(0, 0, 200, 40);
        assert_eq!(side_panel_rect(40, 50, area), Rect::new(120, 0, 80, 40));
    }

    #[test]
    fn test_side_panel_min_width_and_clamp() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(side_panel_rect(40, 50, area), Rect::new(10, 0, 50, 20));

        let narrow = Rect::new(0, 0, 30, 20);
        assert_eq!(side_panel_rect(40, 50, narrow), narrow);
    }

    #[test]
    fn test_side_panel_respects_offset_area() {
        let area = Rect::new(5, 2, 100, 10);
        let panel = side_panel_rect(50, 10, area);
        assert_eq!(panel.x + panel.width, area.x + area.width);
        assert_eq!(panel.y, 2);
    }

    #[test]
    fn test_dim_background_sets_style() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area);
        assert_eq!(buf[(3, 1)].fg, palette::TEXT_MUTED);
        assert_eq!(buf[(0, 0)].bg, palette::DEEPEST_BG);
    }

    #[test]
    fn test_render_shadow_stays_in_buffer() {
        let area = Rect::new(0, 0, 10, 6);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, Rect::new(1, 1, 6, 3));
        assert_eq!(buf[(7, 2)].bg, palette::SHADOW);
        assert_eq!(buf[(3, 4)].bg, palette::SHADOW);

        // Shadows that fall outside the buffer are skipped
        render_shadow(&mut buf, Rect::new(4, 3, 6, 3));
    }
}
