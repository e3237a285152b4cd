//! Selectable options and the host-owned selection

use serde::{Deserialize, Serialize};

/// A selectable entry in the menu
///
/// Only `value` takes part in identity comparisons. `label` is what the list
/// shows, `description` is an optional subtitle that the filter also matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier compared against the selection
    pub value: String,
    /// Display text
    pub label: String,
    /// Optional secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    /// Create an option without a description
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Values currently selected by the host, in selection order
///
/// Keyboard navigation only looks at the first entry.
pub type Selection = Vec<String>;

/// Values that occur more than once, in first-seen order
///
/// Navigation treats the first match as current, so duplicates are legal but
/// make later entries unreachable by identity.
pub fn duplicate_values(options: &[SelectOption]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(options.len());
    let mut dupes: Vec<&str> = Vec::new();

    for option in options {
        let value = option.value.as_str();
        if seen.contains(&value) {
            if !dupes.contains(&value) {
                dupes.push(value);
            }
        } else {
            seen.push(value);
        }
    }

    dupes
}
