//! Menu content geometry
//!
//! Sizes here are abstract units. The terminal widget treats them as cells,
//! which is why it usually lowers `header_height` from the default.

use serde::{Deserialize, Serialize};

/// Height of the title bar when shown
pub const HEADER_HEIGHT: u16 = 40;

/// Default width of the options column
pub const DEFAULT_WIDTH: u16 = 240;

/// Default height of the whole pane
pub const DEFAULT_HEIGHT: u16 = 248;

/// Host-supplied view settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Width of the options column (the detail pane takes what is left)
    pub width: u16,
    /// Height of the whole pane
    pub height: u16,
    /// Header title
    pub title: String,
    /// Show the header row
    pub has_title: bool,
    /// Show the filter input above the options
    pub has_filter: bool,
    /// Height of the header row
    pub header_height: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: String::new(),
            has_title: true,
            has_filter: true,
            header_height: HEADER_HEIGHT,
        }
    }
}

/// Resolved sizes for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    /// Header height, `None` when the header is hidden
    pub header_height: Option<u16>,
    /// Height left for the options list
    pub list_height: u16,
    /// Width of the header + list column
    pub column_width: u16,
    /// Whether the detail pane is rendered
    pub has_detail: bool,
    /// Whether a divider separates the column from the detail pane
    pub has_divider: bool,
}

impl ContentLayout {
    /// Compute the layout for a view, with or without a detail pane
    pub fn compute(view: &ViewConfig, has_detail: bool) -> Self {
        let header_height = view.has_title.then_some(view.header_height);
        let list_height = match header_height {
            Some(header) => view.height.saturating_sub(header),
            None => view.height,
        };

        Self {
            header_height,
            list_height,
            column_width: view.width,
            has_detail,
            has_divider: has_detail,
        }
    }
}
