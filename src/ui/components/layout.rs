//! Layout helpers and common rendering utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

/// Rows reserved at the bottom of the screen for the status and help lines.
pub const FOOTER_ROWS: u16 = 2;

/// Fixed sized layout, centered in `r`
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let available_height = r.height;
    let remainder = (available_height.saturating_sub(height)) % 2;
    let adjusted_height = height + remainder;
    let y = r.y + (available_height.saturating_sub(adjusted_height)) / 2;
    Rect::new(x, y, width.min(r.width), adjusted_height.min(r.height))
}

pub fn create_popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

pub fn fill_background(buf: &mut Buffer, x: u16, y: u16, width: u16, color: Color) {
    for px in x..x + width {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_bg(color);
        }
    }
}

/// Splits the screen into the body and the two footer rows.
pub fn split_footer(area: Rect) -> (Rect, Rect, Rect) {
    let body_height = area.height.saturating_sub(FOOTER_ROWS);
    let body = Rect::new(area.x, area.y, area.width, body_height);
    let status = Rect::new(area.x, area.y + body_height, area.width, area.height.min(1));
    let help_y = (area.y + body_height + 1).min(area.bottom().saturating_sub(1));
    let help = Rect::new(area.x, help_y, area.width, area.height.min(1));
    (body, status, help)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect_fixed(30, 8, area);
        assert_eq!(popup, Rect::new(25, 8, 30, 8));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        let popup = centered_rect_fixed(30, 8, area);
        assert_eq!(popup.width, 10);
        assert!(popup.height <= 4);
    }

    #[test]
    fn test_dialog_centered_in_body() {
        let (body, _, _) = split_footer(Rect::new(0, 0, 80, 24));
        let popup = centered_rect_fixed(30, 8, body);
        assert_eq!(popup.y - body.y, body.bottom() - popup.bottom());
    }

    #[test]
    fn test_split_footer() {
        let (body, status, help) = split_footer(Rect::new(0, 0, 80, 24));
        assert_eq!(body, Rect::new(0, 0, 80, 22));
        assert_eq!(status, Rect::new(0, 22, 80, 1));
        assert_eq!(help, Rect::new(0, 23, 80, 1));
    }
}
