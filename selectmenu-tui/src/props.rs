//! Props the host passes to the menu content pane

use std::fmt;
use std::rc::Rc;

use ratatui::text::Text;
use selectmenu_core::{SelectOption, Selection, ViewConfig};

/// Called with the option the user moved to
pub type OnSelect = Rc<dyn Fn(&SelectOption)>;

/// Called when the menu asks to be closed
pub type OnClose = Rc<dyn Fn()>;

/// Everything the pane renders and reacts to
///
/// The host owns the selection and rebuilds these props whenever it changes,
/// then hands them back through `MenuContentView::set_props`.
#[derive(Clone, Default)]
pub struct MenuProps {
    pub view: ViewConfig,
    pub options: Vec<SelectOption>,
    pub list_props: ListProps,
    pub close: Option<OnClose>,
    /// Pane rendered to the right of the options, when non-empty
    pub detail_view: Option<DetailView>,
}

impl MenuProps {
    pub fn new(view: ViewConfig, options: Vec<SelectOption>) -> Self {
        Self {
            view,
            options,
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, selected: Selection) -> Self {
        self.list_props.selected = Some(selected);
        self
    }

    pub fn with_on_select(mut self, on_select: impl Fn(&SelectOption) + 'static) -> Self {
        self.list_props.on_select = Some(Rc::new(on_select));
        self
    }

    pub fn with_close(mut self, close: impl Fn() + 'static) -> Self {
        self.close = Some(Rc::new(close));
        self
    }

    pub fn with_detail_view(mut self, detail_view: DetailView) -> Self {
        self.detail_view = Some(detail_view);
        self
    }

    /// The detail view, if there is anything to show
    pub fn visible_detail(&self) -> Option<&DetailView> {
        self.detail_view.as_ref().filter(|detail| !detail.is_empty())
    }
}

impl fmt::Debug for MenuProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuProps")
            .field("view", &self.view)
            .field("options", &self.options.len())
            .field("list_props", &self.list_props)
            .field("close", &self.close.is_some())
            .field("detail_view", &self.detail_view.is_some())
            .finish()
    }
}

/// Selection wiring plus settings forwarded to the options list
///
/// `selected` and `on_select` are optional so a partially wired menu still
/// renders; keyboard navigation does nothing until both are present.
#[derive(Clone, Default)]
pub struct ListProps {
    pub selected: Option<Selection>,
    pub on_select: Option<OnSelect>,
    pub list: OptionsListProps,
}

impl fmt::Debug for ListProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListProps")
            .field("selected", &self.selected)
            .field("on_select", &self.on_select.is_some())
            .field("list", &self.list)
            .finish()
    }
}

/// Options list settings the pane passes through untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsListProps {
    /// Shown in the filter input while the query is empty
    pub filter_placeholder: String,
    /// Shown when there are no options at all
    pub empty_text: String,
    /// Shown when the filter hides every option
    pub no_match_text: String,
}

impl Default for OptionsListProps {
    fn default() -> Self {
        Self {
            filter_placeholder: "Filter...".to_string(),
            empty_text: "No options".to_string(),
            no_match_text: "No matches".to_string(),
        }
    }
}

/// Content of the pane beside the options list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    pub title: Option<String>,
    pub body: Text<'static>,
}

impl DetailView {
    pub fn new(body: impl Into<Text<'static>>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// No lines, or only blank ones
    pub fn is_empty(&self) -> bool {
        self.body
            .lines
            .iter()
            .all(|line| line.spans.iter().all(|span| span.content.trim().is_empty()))
    }
}
