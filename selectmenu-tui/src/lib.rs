//! Select menu content pane for ratatui
//!
//! A dropdown-style menu body with:
//! - Optional title bar with a close button
//! - Filterable options list
//! - Optional detail pane beside the list
//! - Up/Down/Enter navigation delivered through a process-wide key bus,
//!   translated into the host's `on_select` / `close` callbacks

pub mod app;
pub mod bus;
pub mod event;
pub mod props;
pub mod terminal;
pub mod tracing_setup;
pub mod ui;
pub mod view;

pub use app::App;
pub use bus::{KeyEventBus, ListenerId, Subscription};
pub use props::{DetailView, ListProps, MenuProps, OnClose, OnSelect, OptionsListProps};
pub use terminal::run;
pub use view::MenuContentView;
