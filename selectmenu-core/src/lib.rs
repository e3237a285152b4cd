pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod navigation;
pub mod option;

pub use config::{load_options, LoggingConfig, MenuConfig};
pub use error::{MenuError, Result};
pub use filter::{filter_options, highlight_matches, FilterMatch};
pub use layout::{ContentLayout, ViewConfig, HEADER_HEIGHT};
pub use navigation::{current_index, next_index, prev_index, resolve, MenuKey, NavAction};
pub use option::{SelectOption, Selection};
