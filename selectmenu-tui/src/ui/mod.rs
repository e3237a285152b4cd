pub mod detail;
pub mod header;
pub mod layout;
pub mod options_list;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};
use selectmenu_core::ContentLayout;

use crate::props::MenuProps;

pub use layout::ContentAreas;
pub use options_list::OptionsList;

/// Primary accent color
pub const ACCENT: Color = Color::Cyan;
/// Border and divider color
pub const MUTED: Color = Color::DarkGray;
/// Highlight color for filter matches
pub const HIGHLIGHT: Color = Color::Yellow;
/// Dim text color
pub const DIM: Color = Color::Rgb(100, 100, 100);

/// Where each part of the pane lands for these props
pub fn content_areas(props: &MenuProps, area: Rect) -> ContentAreas {
    let layout = ContentLayout::compute(&props.view, props.visible_detail().is_some());
    ContentAreas::compute(&layout, area)
}

/// Render the whole content pane: header, options list, divider, detail
pub fn render_content(props: &MenuProps, query: &str, area: Rect, buf: &mut Buffer) {
    let areas = content_areas(props, area);

    if let Some(detail_area) = areas.detail {
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(MUTED))
            .render(areas.column, buf);

        if let Some(detail) = props.visible_detail() {
            detail::render(detail, detail_area, buf);
        }
    }

    if let Some(header_area) = areas.header {
        header::render(&props.view.title, header_area, buf);
    }

    OptionsList {
        options: &props.options,
        selected: props.list_props.selected.as_deref(),
        query,
        has_filter: props.view.has_filter,
        props: &props.list_props.list,
    }
    .render(areas.list, buf);
}
