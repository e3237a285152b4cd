//! The select menu content pane
//!
//! [`MenuContentView`] is created when the menu opens and dropped when it
//! closes. While it lives it listens on a [`KeyEventBus`] and turns Up, Down
//! and Enter into calls to the host's `on_select` and `close` callbacks. It
//! never changes the selection itself.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use selectmenu_core::{resolve, NavAction, SelectOption};
use tracing::{debug, info};

use crate::bus::{KeyEventBus, ListenerId, Subscription};
use crate::event::{filter_edit, menu_key, FilterEdit};
use crate::props::{MenuProps, OnClose, OnSelect};
use crate::ui;

struct ViewState {
    props: MenuProps,
    /// Options-list filter query
    query: String,
}

/// Callback to run once every borrow of the view state is released
enum Request {
    Select(OnSelect, SelectOption),
    Close(OnClose),
}

/// Mounted select menu content pane
pub struct MenuContentView {
    state: Rc<RefCell<ViewState>>,
    subscription: Subscription,
}

impl MenuContentView {
    /// Mount the pane and start listening for keys on `bus`
    pub fn mount(bus: &KeyEventBus, props: MenuProps) -> Self {
        let state = Rc::new(RefCell::new(ViewState {
            props,
            query: String::new(),
        }));

        let weak = Rc::downgrade(&state);
        let subscription = bus.subscribe(move |key| handle_key(&weak, key));

        info!("Select menu mounted ({})", subscription.id());

        Self {
            state,
            subscription,
        }
    }

    /// Replace the props after the host re-renders
    ///
    /// Keeps the existing key subscription. Safe to call from inside the
    /// host's `on_select` callback.
    pub fn set_props(&self, props: MenuProps) {
        self.state.borrow_mut().props = props;
    }

    /// Current props
    pub fn props(&self) -> MenuProps {
        self.state.borrow().props.clone()
    }

    /// Current options-list filter query
    pub fn filter_query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// Id of the key subscription held by this pane
    pub fn listener_id(&self) -> ListenerId {
        self.subscription.id()
    }

    /// Handle a mouse click at `(column, row)` for a pane rendered in `area`
    ///
    /// Clicking the header's close button calls `close`. Returns whether the
    /// click was consumed.
    pub fn handle_click(&self, column: u16, row: u16, area: Rect) -> bool {
        let close = {
            let state = self.state.borrow();
            let areas = ui::content_areas(&state.props, area);

            let hit = areas
                .header
                .and_then(ui::header::close_button_area)
                .is_some_and(|button| button.contains((column, row).into()));
            if !hit {
                return false;
            }
            state.props.close.clone()
        };

        match close {
            Some(close) => {
                debug!("Close button clicked");
                close();
            }
            None => debug!("Close button clicked but no close callback is set"),
        }
        true
    }
}

impl Drop for MenuContentView {
    fn drop(&mut self) {
        info!("Select menu unmounted ({})", self.subscription.id());
    }
}

impl Widget for &MenuContentView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state.borrow();
        ui::render_content(&state.props, &state.query, area, buf);
    }
}

/// Bus listener body
///
/// Holds only a weak handle: once the pane is dropped the upgrade fails and
/// the event is ignored.
fn handle_key(state: &Weak<RefCell<ViewState>>, key: &KeyEvent) {
    let Some(state) = state.upgrade() else {
        debug!("Key event for an unmounted select menu ignored");
        return;
    };

    if let Some(menu_key) = menu_key(key) {
        let request = {
            let state = state.borrow();
            let props = &state.props;

            match resolve(menu_key, &props.options, props.list_props.selected.as_deref()) {
                Some(NavAction::Select(option)) => match &props.list_props.on_select {
                    Some(on_select) => Request::Select(on_select.clone(), option.clone()),
                    None => {
                        debug!("{} ignored: no on_select callback", menu_key);
                        return;
                    }
                },
                Some(NavAction::Close) => match &props.close {
                    Some(close) => Request::Close(close.clone()),
                    None => {
                        debug!("{} ignored: no close callback", menu_key);
                        return;
                    }
                },
                None => {
                    debug!("{} had nothing to do", menu_key);
                    return;
                }
            }
        };

        // callbacks may re-render or drop the pane, so no borrow is held here
        match request {
            Request::Select(on_select, option) => {
                debug!("{} selects '{}'", menu_key, option.value);
                on_select(&option);
            }
            Request::Close(close) => {
                debug!("{} closes the menu", menu_key);
                close();
            }
        }
        return;
    }

    let mut state = state.borrow_mut();
    if !state.props.view.has_filter {
        return;
    }
    match filter_edit(key) {
        Some(FilterEdit::Insert(c)) => state.query.push(c),
        Some(FilterEdit::Backspace) => {
            state.query.pop();
        }
        None => {}
    }
}
