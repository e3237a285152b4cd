//! Event handling for the menu

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use selectmenu_core::MenuKey;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Navigation key for a key press, if it is one
///
/// Release and repeat events are ignored so terminals that report both
/// press and release do not move the selection twice.
pub fn menu_key(key: &KeyEvent) -> Option<MenuKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(MenuKey::Up),
        KeyCode::Down => Some(MenuKey::Down),
        KeyCode::Enter => Some(MenuKey::Enter),
        _ => None,
    }
}

/// Edit applied to the options-list filter query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEdit {
    Insert(char),
    Backspace,
}

/// Filter edit for a key press, if it is one
pub fn filter_edit(key: &KeyEvent) -> Option<FilterEdit> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if !c.is_control() => Some(FilterEdit::Insert(c)),
        KeyCode::Backspace => Some(FilterEdit::Backspace),
        _ => None,
    }
}
