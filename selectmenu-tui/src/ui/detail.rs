use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use super::ACCENT;
use crate::props::DetailView;

/// Render the detail pane
pub fn render(detail: &DetailView, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let mut block = Block::default().padding(Padding::horizontal(1));
    if let Some(title) = &detail.title {
        block = block
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    }

    Paragraph::new(detail.body.clone())
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
