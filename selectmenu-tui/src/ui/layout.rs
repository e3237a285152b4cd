use ratatui::layout::Rect;
use selectmenu_core::ContentLayout;

/// Screen areas for one render of the content pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentAreas {
    /// Header + list column, including the divider cell when present
    pub column: Rect,
    /// Title bar, when shown
    pub header: Option<Rect>,
    /// Options list (filter input included)
    pub list: Rect,
    /// Detail pane, when shown
    pub detail: Option<Rect>,
}

impl ContentAreas {
    /// Place a resolved layout inside `area`, clipping to what fits
    ///
    /// The column is `column_width` wide with the detail pane taking the rest
    /// of the row. Header and list stack vertically inside the column, minus
    /// one cell on the right for the divider when the detail pane fits.
    pub fn compute(layout: &ContentLayout, area: Rect) -> Self {
        let header_height = layout.header_height.unwrap_or(0);
        let pane_height = area
            .height
            .min(header_height.saturating_add(layout.list_height));

        let column = Rect {
            x: area.x,
            y: area.y,
            width: layout.column_width.min(area.width),
            height: pane_height,
        };

        // no room beside the column means no pane and no divider
        let detail = (layout.has_detail && area.width > column.width).then(|| Rect {
            x: column.right(),
            y: area.y,
            width: area.width - column.width,
            height: pane_height,
        });

        let inner = if layout.has_divider && detail.is_some() {
            Rect {
                width: column.width.saturating_sub(1),
                ..column
            }
        } else {
            column
        };

        let header = layout.header_height.map(|height| Rect {
            height: height.min(inner.height),
            ..inner
        });

        let used = header.map(|h| h.height).unwrap_or(0);
        let list = Rect {
            y: inner.y + used,
            height: inner.height - used,
            ..inner
        };

        Self {
            column,
            header,
            list,
            detail,
        }
    }
}
