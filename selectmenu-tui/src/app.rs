//! Host application for the `selectmenu` binary
//!
//! The host owns the selection. The menu's callbacks only record what the
//! user asked for; after each dispatched key the host applies it and hands
//! fresh props back to the menu, or unmounts the menu when it asked to close.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use selectmenu_core::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use selectmenu_core::{SelectOption, Selection, ViewConfig, HEADER_HEIGHT};
use tracing::{debug, info};

use crate::bus::KeyEventBus;
use crate::props::{DetailView, MenuProps};
use crate::view::MenuContentView;

/// Header height in terminal rows
pub const TERMINAL_HEADER_HEIGHT: u16 = 3;
/// Column width in terminal cells
pub const TERMINAL_WIDTH: u16 = 40;
/// Pane height in terminal rows
pub const TERMINAL_HEIGHT: u16 = 20;

/// Swap values still at the pixel-scale defaults for cell-scale ones
pub fn cell_scale(mut view: ViewConfig) -> ViewConfig {
    if view.header_height == HEADER_HEIGHT {
        view.header_height = TERMINAL_HEADER_HEIGHT;
    }
    if view.width == DEFAULT_WIDTH {
        view.width = TERMINAL_WIDTH;
    }
    if view.height == DEFAULT_HEIGHT {
        view.height = TERMINAL_HEIGHT;
    }
    view
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Main application state
pub struct App {
    bus: KeyEventBus,
    view: ViewConfig,
    options: Vec<SelectOption>,
    show_detail: bool,

    /// Selection owned by the host; written by the menu's on_select
    selected: Rc<RefCell<Selection>>,
    /// Set by on_select, cleared once the menu has new props
    selection_changed: Rc<Cell<bool>>,
    /// Set by the menu's close callback
    close_requested: Rc<Cell<bool>>,

    menu: Option<MenuContentView>,

    /// Status message (shown in the bottom line)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App with the menu closed
    pub fn new(
        bus: KeyEventBus,
        view: ViewConfig,
        options: Vec<SelectOption>,
        show_detail: bool,
    ) -> Self {
        Self {
            bus,
            view,
            options,
            show_detail,
            selected: Rc::new(RefCell::new(Vec::new())),
            selection_changed: Rc::new(Cell::new(false)),
            close_requested: Rc::new(Cell::new(false)),
            menu: None,
            status_message: None,
        }
    }

    /// Current selection
    pub fn selected(&self) -> Selection {
        self.selected.borrow().clone()
    }

    /// The mounted menu, if open
    pub fn menu(&self) -> Option<&MenuContentView> {
        self.menu.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Mount the menu (no-op when already open)
    pub fn open_menu(&mut self) {
        if self.menu.is_some() {
            return;
        }
        self.close_requested.set(false);
        self.selection_changed.set(false);
        self.menu = Some(MenuContentView::mount(&self.bus, self.props()));
        self.status_message = None;
    }

    /// Unmount the menu, releasing its key subscription
    pub fn close_menu(&mut self) {
        if self.menu.take().is_some() {
            let selected = self.selected();
            self.status_message = Some(match selected.first() {
                Some(value) => format!("Selected: {}  (o: reopen, q: quit)", value),
                None => "Nothing selected  (o: reopen, q: quit)".to_string(),
            });
        }
    }

    /// Build menu props from the host's current state
    fn props(&self) -> MenuProps {
        let selected_cell = self.selected.clone();
        let changed = self.selection_changed.clone();
        let close_requested = self.close_requested.clone();

        let mut props = MenuProps::new(self.view.clone(), self.options.clone())
            .with_selected(self.selected())
            .with_on_select(move |option| {
                *selected_cell.borrow_mut() = vec![option.value.clone()];
                changed.set(true);
            })
            .with_close(move || close_requested.set(true));

        if self.show_detail {
            if let Some(detail) = self.detail_for_selection() {
                props = props.with_detail_view(detail);
            }
        }

        props
    }

    /// Detail pane for the selected option
    fn detail_for_selection(&self) -> Option<DetailView> {
        let selected = self.selected.borrow();
        let value = selected.first()?;
        let option = self.options.iter().find(|o| &o.value == value)?;

        let mut lines = vec![Line::from(Span::raw(option.label.clone()))];
        if let Some(description) = &option.description {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::raw(description.clone())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw(format!("value: {}", option.value))));

        Some(DetailView::new(Text::from(lines)).with_title("Details"))
    }

    /// Handle a key event
    ///
    /// While the menu is open every key goes to the bus; the host itself only
    /// reacts to quit and close shortcuts.
    pub fn handle_key(&mut self, key: KeyEvent) -> HandleResult {
        if key.kind != KeyEventKind::Press {
            self.bus.dispatch(&key);
            return HandleResult::Continue;
        }

        // Global quit shortcut (Ctrl+C)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return HandleResult::Quit;
        }

        if self.menu.is_some() {
            if key.code == KeyCode::Esc {
                debug!("Esc closes the menu");
                self.close_menu();
                return HandleResult::Continue;
            }

            let delivered = self.bus.dispatch(&key);
            debug!("Key {:?} delivered to {} listener(s)", key.code, delivered);
            self.sync_menu();
            return HandleResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,
            KeyCode::Char('o') | KeyCode::Enter => {
                self.open_menu();
                HandleResult::Continue
            }
            _ => HandleResult::Continue,
        }
    }

    /// Handle a left click
    pub fn handle_click(&mut self, column: u16, row: u16, menu_area: Rect) {
        let consumed = self
            .menu
            .as_ref()
            .is_some_and(|menu| menu.handle_click(column, row, menu_area));
        if consumed {
            self.sync_menu();
        }
    }

    /// Apply what the menu's callbacks recorded
    fn sync_menu(&mut self) {
        if self.close_requested.replace(false) {
            info!("Menu requested close");
            self.close_menu();
            return;
        }

        if self.selection_changed.replace(false) {
            let props = self.props();
            if let Some(menu) = &self.menu {
                menu.set_props(props);
            }
        }
    }
}
