//! Process-wide key event fan-out
//!
//! The terminal loop reads key events and hands each one to the bus, which
//! forwards it to every subscriber regardless of focus. Subscribing returns a
//! [`Subscription`] guard; dropping the guard removes the listener, so a
//! component that owns its guard cannot leak a listener past its lifetime.
//!
//! Everything runs on the UI thread, hence `Rc` rather than `Arc`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crossterm::event::KeyEvent;
use tracing::trace;

/// Callback invoked for every dispatched key event
pub type Listener = Rc<dyn Fn(&KeyEvent)>;

/// Identifies one subscription on a bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

#[derive(Default)]
struct BusInner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

impl BusInner {
    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(lid, _)| *lid == id)
    }

    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        before != listeners.len()
    }
}

/// Fan-out of key events to subscribed listeners
///
/// Cloning a bus yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct KeyEventBus {
    inner: Rc<BusInner>,
}

thread_local! {
    static GLOBAL_BUS: KeyEventBus = KeyEventBus::new();
}

impl KeyEventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the bus shared by everything on this UI thread
    pub fn global() -> Self {
        GLOBAL_BUS.with(|bus| bus.clone())
    }

    /// Register a listener; it stays registered until the guard is dropped
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&KeyEvent) + 'static,
    {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        trace!("subscribed {}", id);

        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a key event to every listener, in subscription order
    ///
    /// Listeners may subscribe or unsubscribe while the event is being
    /// delivered. A listener removed mid-dispatch is not called; one added
    /// mid-dispatch first sees the next event.
    ///
    /// Returns how many listeners were called.
    pub fn dispatch(&self, key: &KeyEvent) -> usize {
        let snapshot: Vec<(ListenerId, Listener)> = self.inner.listeners.borrow().clone();
        let mut delivered = 0;

        for (id, listener) in snapshot {
            if !self.inner.is_registered(id) {
                continue;
            }
            listener(key);
            delivered += 1;
        }

        delivered
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Whether a subscription is still live
    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.inner.is_registered(id)
    }
}

impl fmt::Debug for KeyEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered listener; unsubscribes on drop
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    bus: Weak<BusInner>,
}

impl Subscription {
    /// Id of the guarded listener
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if inner.remove(self.id) {
                trace!("unsubscribed {}", self.id);
            }
        }
    }
}
