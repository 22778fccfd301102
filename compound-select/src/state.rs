//! Shared selection state and the channel that hands it to select parts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Selection state owned by one mounted `Select`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectState {
    /// The committed value, if any.
    pub value: Option<String>,
    /// Whether the content panel is open.
    pub is_open: bool,
}

impl SelectState {
    /// State for a freshly mounted select.
    pub fn new(default_value: Option<String>, default_open: bool) -> Self {
        Self {
            value: default_value,
            is_open: default_open,
        }
    }
}

/// Read/write handle to a mounted select's state.
///
/// Clones share the same state. The mutators are the only way to change it;
/// each one marks the channel dirty when the state actually changed.
///
/// # Example
///
/// ```
/// use compound_select::state::{SelectChannel, SelectState};
///
/// let channel = SelectChannel::new(SelectState::new(None, false));
/// channel.toggle();
/// assert!(channel.is_open());
///
/// channel.set_value("banana");
/// channel.close();
/// assert_eq!(channel.value().as_deref(), Some("banana"));
/// assert!(!channel.is_open());
/// ```
#[derive(Clone, Debug)]
pub struct SelectChannel {
    inner: Rc<RefCell<SelectState>>,
    dirty: Rc<Cell<bool>>,
}

impl SelectChannel {
    pub fn new(state: SelectState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
            dirty: Rc::new(Cell::new(false)),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SelectState {
        self.inner.borrow().clone()
    }

    /// The committed value.
    pub fn value(&self) -> Option<String> {
        self.inner.borrow().value.clone()
    }

    /// Whether the content panel is open.
    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_open
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Commit a value.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.inner.borrow_mut();
        if state.value.as_deref() != Some(value.as_str()) {
            state.value = Some(value);
            self.dirty.set(true);
        }
    }

    /// Open or close the panel.
    pub fn set_open(&self, open: bool) {
        let mut state = self.inner.borrow_mut();
        if state.is_open != open {
            state.is_open = open;
            self.dirty.set(true);
        }
    }

    /// Flip the panel between open and closed.
    pub fn toggle(&self) {
        let open = self.is_open();
        self.set_open(!open);
    }

    /// Close the panel.
    pub fn close(&self) {
        self.set_open(false);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.set(false);
    }

    /// Whether two handles refer to the same mounted state.
    pub fn same_as(&self, other: &SelectChannel) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
