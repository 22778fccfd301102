//! Document-level event source.
//!
//! The document is the process-wide target that components attach
//! listeners to when they need to observe input outside their own subtree.
//! It is single-threaded: handles are `Rc` clones of the same listener list.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::PointerEvent;

/// Listener closure for pointer-down events.
pub type PointerListener = Rc<dyn Fn(&PointerEvent)>;

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__listener_{}", self.0)
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    pointer_down: Vec<(ListenerId, PointerListener)>,
}

impl Listeners {
    fn contains(&self, id: ListenerId) -> bool {
        self.pointer_down.iter().any(|(lid, _)| *lid == id)
    }
}

/// Global pointer event source.
#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pointer-down listener. It stays installed until
    /// `remove_listener` is called with the returned id.
    pub fn add_pointer_down_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&PointerEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.pointer_down.push((id, Rc::new(listener)));
        log::debug!(
            "Document::add_pointer_down_listener id={} total={}",
            id,
            inner.pointer_down.len()
        );
        id
    }

    /// Register a pointer-down listener scoped to the returned guard.
    /// Dropping the guard removes the listener.
    pub fn listen_pointer_down<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&PointerEvent) + 'static,
    {
        let id = self.add_pointer_down_listener(listener);
        ListenerGuard {
            document: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        remove_from(&self.inner, id)
    }

    /// Number of installed pointer-down listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().pointer_down.len()
    }

    /// Whether a listener is still installed.
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().contains(id)
    }

    /// Deliver a pointer-down event to every listener, in registration order.
    ///
    /// Listeners may add or remove listeners while the event is delivered.
    /// A listener removed before its turn is skipped; one added during
    /// delivery first sees the next event. Returns the number of listeners called.
    pub fn dispatch_pointer_down(&self, event: &PointerEvent) -> usize {
        let snapshot: Vec<(ListenerId, PointerListener)> = self
            .inner
            .borrow()
            .pointer_down
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        log::trace!(
            "Document::dispatch_pointer_down target={:?} listeners={}",
            event.target,
            snapshot.len()
        );

        let mut called = 0;
        for (id, listener) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            listener(event);
            called += 1;
        }
        called
    }
}

fn remove_from(inner: &RefCell<Listeners>, id: ListenerId) -> bool {
    let mut inner = inner.borrow_mut();
    let before = inner.pointer_down.len();
    inner.pointer_down.retain(|(lid, _)| *lid != id);
    let removed = inner.pointer_down.len() != before;
    if removed {
        log::debug!(
            "Document::remove_listener id={} remaining={}",
            id,
            inner.pointer_down.len()
        );
    }
    removed
}

/// Owns a document listener registration and removes it on drop.
///
/// The guard does not keep the document alive; if the document is gone
/// there is nothing left to remove.
#[must_use = "dropping the guard removes the listener immediately"]
pub struct ListenerGuard {
    document: Weak<RefCell<Listeners>>,
    id: ListenerId,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.document.upgrade() {
            remove_from(&inner, self.id);
        }
    }
}
