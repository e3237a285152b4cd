use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{ACCENT, MUTED};

/// Glyph drawn for the close button
pub const CLOSE_GLYPH: &str = "✕";

/// Row inside the header that holds the title and close button
///
/// The bottom border is only drawn when the header has room for it plus a
/// content row.
fn content_row(area: Rect) -> Option<Rect> {
    let body_height = if area.height >= 2 {
        area.height - 1
    } else {
        area.height
    };
    if body_height == 0 || area.width < 3 {
        return None;
    }

    Some(Rect {
        x: area.x + 1,
        y: area.y + (body_height - 1) / 2,
        width: area.width - 2,
        height: 1,
    })
}

/// Cell occupied by the close button
pub fn close_button_area(area: Rect) -> Option<Rect> {
    let row = content_row(area)?;
    Some(Rect {
        x: row.right() - 1,
        width: 1,
        ..row
    })
}

/// Render the title bar: title on the left, close button on the right
pub fn render(title: &str, area: Rect, buf: &mut Buffer) {
    if area.height >= 2 {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(MUTED))
            .render(area, buf);
    }

    let Some(row) = content_row(area) else {
        return;
    };

    let title_area = Rect {
        width: row.width.saturating_sub(2),
        ..row
    };
    Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .render(title_area, buf);

    if let Some(close) = close_button_area(area) {
        Paragraph::new(Span::styled(CLOSE_GLYPH, Style::default().fg(ACCENT)))
            .render(close, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_button_position() {
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(close_button_area(area), Some(Rect::new(18, 0, 1, 1)));

        // too narrow to draw anything
        assert_eq!(close_button_area(Rect::new(0, 0, 2, 3)), None);
    }

    #[test]
    fn test_render_title_and_close() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        render("Regions", area, &mut buf);

        let row: String = (0..20).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with(" Regions"));
        assert_eq!(buf[(18, 0)].symbol(), CLOSE_GLYPH);
        // bottom border
        assert_eq!(buf[(5, 2)].symbol(), "─");
    }
}
