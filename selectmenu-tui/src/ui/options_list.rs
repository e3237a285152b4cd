//! Filterable options list
//!
//! Shows a one-line filter input (when enabled) above the options that match
//! the current query. The row for the host's current option is highlighted
//! and kept in view; every selected value gets a check mark.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};
use selectmenu_core::{current_index, filter_options, highlight_matches, FilterMatch, SelectOption};

use super::{ACCENT, DIM, HIGHLIGHT};
use crate::props::OptionsListProps;

/// Prompt drawn before the filter query
const FILTER_PROMPT: &str = "> ";

/// Marker for selected options
const CHECK: &str = "✓ ";

pub struct OptionsList<'a> {
    pub options: &'a [SelectOption],
    pub selected: Option<&'a [String]>,
    pub query: &'a str,
    pub has_filter: bool,
    pub props: &'a OptionsListProps,
}

impl<'a> OptionsList<'a> {
    /// Options visible under the current query
    pub fn visible(&self) -> Vec<FilterMatch> {
        let query = if self.has_filter { self.query } else { "" };
        filter_options(query, self.options)
    }

    fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected
            .is_some_and(|values| values.iter().any(|v| *v == option.value))
    }

    fn render_filter(&self, area: Rect, buf: &mut Buffer) {
        let line = if self.query.is_empty() {
            Line::from(vec![
                Span::styled(FILTER_PROMPT, Style::default().fg(ACCENT)),
                Span::styled(
                    self.props.filter_placeholder.clone(),
                    Style::default().fg(DIM),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(FILTER_PROMPT, Style::default().fg(ACCENT)),
                Span::raw(self.query.to_string()),
            ])
        };

        Paragraph::new(line).render(area, buf);
    }

    fn render_item(&self, m: &FilterMatch, is_current: bool) -> ListItem<'static> {
        let option = &self.options[m.index];

        let base = if is_current {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let marker = if self.is_selected(option) { CHECK } else { "  " };
        let mut spans = vec![Span::styled(marker, base)];

        for (segment, matched) in highlight_matches(&option.label, &m.match_indices) {
            let style = if matched && !is_current {
                base.fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(segment, style));
        }

        if let Some(description) = &option.description {
            let style = if is_current { base } else { base.fg(DIM) };
            spans.push(Span::styled(format!(" - {}", description), style));
        }

        ListItem::new(Line::from(spans)).style(base)
    }
}

impl Widget for OptionsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let list_area = if self.has_filter {
            self.render_filter(Rect { height: 1, ..area }, buf);
            Rect {
                y: area.y + 1,
                height: area.height - 1,
                ..area
            }
        } else {
            area
        };

        if list_area.is_empty() {
            return;
        }

        let visible = self.visible();
        if visible.is_empty() {
            let text = if self.options.is_empty() {
                &self.props.empty_text
            } else {
                &self.props.no_match_text
            };
            Paragraph::new(Span::styled(format!("  {}", text), Style::default().fg(DIM)))
                .render(list_area, buf);
            return;
        }

        let current = self
            .selected
            .and_then(|selected| current_index(self.options, selected));
        let current_row = current.and_then(|idx| visible.iter().position(|m| m.index == idx));

        // keep the current row on screen
        let height = list_area.height as usize;
        let offset = match current_row {
            Some(row) if row >= height => row + 1 - height,
            _ => 0,
        };

        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(row, m)| self.render_item(m, Some(row) == current_row))
            .collect();

        List::new(items).render(list_area, buf);
    }
}
