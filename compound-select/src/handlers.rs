//! Activation handlers and the per-render registry that holds them.
//!
//! Parts register a handler for the element id they render. The runtime
//! builds a fresh registry on every render pass and swaps it in only when
//! the pass succeeds, so handlers always match the committed element tree.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use selectdom::ClickEvent;

/// Activation handler registered by a part for its element.
pub type Handler = Rc<dyn Fn(&ClickEvent)>;

/// Caller-supplied click callback forwarded by `SelectTrigger`.
pub type ClickCallback = Rc<dyn Fn(&ClickEvent)>;

/// Caller-supplied selection callback invoked by `SelectItem`.
pub type SelectCallback = Rc<dyn Fn(&str)>;

/// Maps element ids to activation handlers.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Rc<RefCell<HashMap<String, Handler>>>,
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.len())
            .finish()
    }
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the activation handler for an element, replacing any previous one.
    pub fn register(&self, element_id: &str, handler: Handler) {
        self.handlers
            .borrow_mut()
            .insert(element_id.to_string(), handler);
    }

    /// Get the activation handler for an element.
    pub fn get(&self, element_id: &str) -> Option<Handler> {
        self.handlers.borrow().get(element_id).cloned()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_register_replaces_previous_handler() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());

        let calls = Rc::new(Cell::new(0));
        let first = Rc::clone(&calls);
        registry.register("item-0.1", Rc::new(move |_: &ClickEvent| first.set(first.get() + 1)));
        let second = Rc::clone(&calls);
        registry.register("item-0.1", Rc::new(move |_: &ClickEvent| second.set(second.get() + 10)));
        assert_eq!(registry.len(), 1);

        let handler = registry.get("item-0.1").expect("registered");
        handler(&ClickEvent {
            target: "item-0.1".into(),
            x: 0,
            y: 0,
            button: Default::default(),
        });
        assert_eq!(calls.get(), 10);
        assert!(registry.get("item-0.2").is_none());
    }
}
