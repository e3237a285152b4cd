//! Keyboard navigation over an ordered option list
//!
//! Everything here is a pure function of the options and the host's
//! selection. The menu keeps no cursor of its own: the "current" option is
//! whatever the host currently has selected, and each key press turns into
//! a request for the host to change that.

use std::fmt;

use crate::option::SelectOption;

/// Keys the menu reacts to
///
/// Legacy DOM key codes: Up is 38, Down is 40, Enter is 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuKey::Up => write!(f, "Up"),
            MenuKey::Down => write!(f, "Down"),
            MenuKey::Enter => write!(f, "Enter"),
        }
    }
}

/// What the host should do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction<'a> {
    /// Ask the host to select this option
    Select(&'a SelectOption),
    /// Ask the host to close the menu
    Close,
}

/// Position of the first option whose value equals `selected[0]`
pub fn current_index(options: &[SelectOption], selected: &[String]) -> Option<usize> {
    let first = selected.first()?;
    options.iter().position(|option| &option.value == first)
}

/// Index after `current`, wrapping to the start
///
/// With no current option the walk starts at the first entry.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match current {
        Some(idx) if idx + 1 < len => Some(idx + 1),
        _ => Some(0),
    }
}

/// Index before `current`, wrapping to the end
///
/// With no current option the walk starts at the last entry.
pub fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match current {
        Some(idx) if idx > 0 && idx <= len => Some(idx - 1),
        _ => Some(len - 1),
    }
}

/// Translate a key press into a host action
///
/// Returns `None` when the key has nothing to do: no selection was supplied,
/// there are no options to walk, or Enter was pressed while an option is
/// current.
///
/// Enter closes the menu only when *nothing* matches the selection. This is
/// the long-standing behavior of the widget and is kept as-is.
pub fn resolve<'a>(
    key: MenuKey,
    options: &'a [SelectOption],
    selected: Option<&[String]>,
) -> Option<NavAction<'a>> {
    let selected = selected?;
    let current = current_index(options, selected);

    match key {
        MenuKey::Down => {
            next_index(current, options.len()).map(|idx| NavAction::Select(&options[idx]))
        }
        MenuKey::Up => {
            prev_index(current, options.len()).map(|idx| NavAction::Select(&options[idx]))
        }
        MenuKey::Enter => current.is_none().then_some(NavAction::Close),
    }
}
