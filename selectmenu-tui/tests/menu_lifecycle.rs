/// Lifecycle and keyboard behavior of the mounted menu pane
///
/// Key invariants:
/// - exactly one bus listener per mounted pane, none after unmount
/// - the pane never changes the selection itself, it only calls back
/// - callbacks never fire for a pane that has been dropped
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use selectmenu_core::{SelectOption, ViewConfig};
use selectmenu_tui::{KeyEventBus, MenuContentView, MenuProps};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("a", "Alpha"),
        SelectOption::new("b", "Bravo"),
        SelectOption::new("c", "Charlie"),
    ]
}

fn selection(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Records every callback the pane makes
#[derive(Default)]
struct Recorder {
    selected: RefCell<Vec<String>>,
    closed: Cell<usize>,
}

fn wired_props(recorder: &Rc<Recorder>, selected: &[&str]) -> MenuProps {
    let on_select = recorder.clone();
    let on_close = recorder.clone();
    MenuProps::new(ViewConfig::default(), options())
        .with_selected(selection(selected))
        .with_on_select(move |option| on_select.selected.borrow_mut().push(option.value.clone()))
        .with_close(move || on_close.closed.set(on_close.closed.get() + 1))
}

#[test]
fn test_subscribes_once_per_mount() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());

    let view = MenuContentView::mount(&bus, wired_props(&recorder, &["a"]));
    assert_eq!(bus.listener_count(), 1);
    let id = view.listener_id();

    // re-renders keep the same subscription
    view.set_props(wired_props(&recorder, &["b"]));
    view.set_props(wired_props(&recorder, &["c"]));
    assert_eq!(bus.listener_count(), 1);
    assert!(bus.is_subscribed(id));

    drop(view);
    assert_eq!(bus.listener_count(), 0);
    assert!(!bus.is_subscribed(id));

    // remount gets a fresh subscription
    let view = MenuContentView::mount(&bus, wired_props(&recorder, &["a"]));
    assert_eq!(bus.listener_count(), 1);
    assert_ne!(view.listener_id(), id);
}

#[test]
fn test_down_and_up_from_middle() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &["b"]));

    bus.dispatch(&key(KeyCode::Down));
    bus.dispatch(&key(KeyCode::Up));

    assert_eq!(*recorder.selected.borrow(), selection(&["c", "a"]));
    assert_eq!(recorder.closed.get(), 0);
}

#[test]
fn test_down_from_last_wraps() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &["c"]));

    bus.dispatch(&key(KeyCode::Down));
    assert_eq!(*recorder.selected.borrow(), selection(&["a"]));
}

#[test]
fn test_up_from_first_wraps() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &["a"]));

    bus.dispatch(&key(KeyCode::Up));
    assert_eq!(*recorder.selected.borrow(), selection(&["c"]));
}

#[test]
fn test_enter_with_empty_selection_closes() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &[]));

    bus.dispatch(&key(KeyCode::Enter));
    assert_eq!(recorder.closed.get(), 1);
    assert!(recorder.selected.borrow().is_empty());
}

#[test]
fn test_enter_with_current_option_does_not_close() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &["b"]));

    bus.dispatch(&key(KeyCode::Enter));
    assert_eq!(recorder.closed.get(), 0);
}

#[test]
fn test_unmatched_selection_walks_from_ends() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &["zzz"]));

    bus.dispatch(&key(KeyCode::Down));
    bus.dispatch(&key(KeyCode::Up));
    bus.dispatch(&key(KeyCode::Enter));

    assert_eq!(*recorder.selected.borrow(), selection(&["a", "c"]));
    assert_eq!(recorder.closed.get(), 1);
}

#[test]
fn test_release_events_ignored() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let _view = MenuContentView::mount(&bus, wired_props(&recorder, &["a"]));

    bus.dispatch(&KeyEvent {
        code: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    assert!(recorder.selected.borrow().is_empty());
}

#[test]
fn test_missing_wiring_is_noop() {
    let bus = KeyEventBus::new();

    // no selection, no callbacks
    let bare = MenuContentView::mount(&bus, MenuProps::new(ViewConfig::default(), options()));
    bus.dispatch(&key(KeyCode::Down));
    bus.dispatch(&key(KeyCode::Enter));
    drop(bare);

    // selection but no on_select
    let recorder = Rc::new(Recorder::default());
    let on_close = recorder.clone();
    let props = MenuProps::new(ViewConfig::default(), options())
        .with_selected(selection(&["a"]))
        .with_close(move || on_close.closed.set(on_close.closed.get() + 1));
    let _view = MenuContentView::mount(&bus, props);
    bus.dispatch(&key(KeyCode::Down));
    assert_eq!(recorder.closed.get(), 0);
}

#[test]
fn test_empty_options_navigation_is_noop() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let on_select = recorder.clone();
    let props = MenuProps::new(ViewConfig::default(), Vec::new())
        .with_selected(selection(&["a"]))
        .with_on_select(move |option| on_select.selected.borrow_mut().push(option.value.clone()));
    let _view = MenuContentView::mount(&bus, props);

    bus.dispatch(&key(KeyCode::Down));
    bus.dispatch(&key(KeyCode::Up));
    assert!(recorder.selected.borrow().is_empty());
}

#[test]
fn test_no_callbacks_after_unmount() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let view = MenuContentView::mount(&bus, wired_props(&recorder, &[]));
    drop(view);

    assert_eq!(bus.dispatch(&key(KeyCode::Down)), 0);
    assert_eq!(bus.dispatch(&key(KeyCode::Enter)), 0);
    assert!(recorder.selected.borrow().is_empty());
    assert_eq!(recorder.closed.get(), 0);
}

#[test]
fn test_close_can_unmount_during_dispatch() {
    let bus = KeyEventBus::new();
    let slot: Rc<RefCell<Option<MenuContentView>>> = Rc::new(RefCell::new(None));

    let closer = slot.clone();
    let props = MenuProps::new(ViewConfig::default(), options())
        .with_selected(Vec::new())
        .with_close(move || {
            closer.borrow_mut().take();
        });
    *slot.borrow_mut() = Some(MenuContentView::mount(&bus, props));

    bus.dispatch(&key(KeyCode::Enter));
    assert!(slot.borrow().is_none());
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn test_host_rerenders_from_on_select() {
    let bus = KeyEventBus::new();
    let host: Rc<RefCell<Weak<MenuContentView>>> = Rc::new(RefCell::new(Weak::new()));

    fn props(host: &Rc<RefCell<Weak<MenuContentView>>>, selected: Vec<String>) -> MenuProps {
        let host = host.clone();
        MenuProps::new(ViewConfig::default(), options())
            .with_selected(selected)
            .with_on_select(move |option| {
                let next = props(&host, vec![option.value.clone()]);
                if let Some(view) = host.borrow().upgrade() {
                    view.set_props(next);
                }
            })
    }

    let view = Rc::new(MenuContentView::mount(&bus, props(&host, selection(&["a"]))));
    *host.borrow_mut() = Rc::downgrade(&view);

    bus.dispatch(&key(KeyCode::Down));
    bus.dispatch(&key(KeyCode::Down));
    assert_eq!(view.props().list_props.selected, Some(selection(&["c"])));

    bus.dispatch(&key(KeyCode::Down));
    assert_eq!(view.props().list_props.selected, Some(selection(&["a"])));
}

#[test]
fn test_two_panes_both_receive_keys() {
    let bus = KeyEventBus::new();
    let first = Rc::new(Recorder::default());
    let second = Rc::new(Recorder::default());

    let _a = MenuContentView::mount(&bus, wired_props(&first, &["a"]));
    let _b = MenuContentView::mount(&bus, wired_props(&second, &["b"]));

    assert_eq!(bus.dispatch(&key(KeyCode::Down)), 2);
    assert_eq!(*first.selected.borrow(), selection(&["b"]));
    assert_eq!(*second.selected.borrow(), selection(&["c"]));
}

#[test]
fn test_typing_edits_filter_query() {
    let bus = KeyEventBus::new();
    let recorder = Rc::new(Recorder::default());
    let view = MenuContentView::mount(&bus, wired_props(&recorder, &["a"]));

    for c in "brx".chars() {
        bus.dispatch(&key(KeyCode::Char(c)));
    }
    bus.dispatch(&key(KeyCode::Backspace));
    assert_eq!(view.filter_query(), "br");

    // navigation still walks the unfiltered options
    bus.dispatch(&key(KeyCode::Down));
    assert_eq!(*recorder.selected.borrow(), selection(&["b"]));
}

#[test]
fn test_typing_ignored_without_filter() {
    let bus = KeyEventBus::new();
    let view = MenuContentView::mount(
        &bus,
        MenuProps::new(
            ViewConfig {
                has_filter: false,
                ..ViewConfig::default()
            },
            options(),
        ),
    );

    bus.dispatch(&key(KeyCode::Char('x')));
    assert_eq!(view.filter_query(), "");
}
