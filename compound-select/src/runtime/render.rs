//! Render pass context.

use std::collections::HashSet;

use selectdom::Document;

use super::mount::MountTable;
use crate::error::SelectError;
use crate::handlers::{Handler, HandlerRegistry};
use crate::state::{SelectChannel, SelectState};

/// Mutable state shared by every component during one render pass.
pub struct RenderCx<'a> {
    document: &'a Document,
    mounts: &'a mut MountTable,
    handlers: HandlerRegistry,
    seen: HashSet<String>,
    mounted_now: Vec<String>,
}

impl<'a> RenderCx<'a> {
    pub(crate) fn new(document: &'a Document, mounts: &'a mut MountTable) -> Self {
        Self {
            document,
            mounts,
            handlers: HandlerRegistry::new(),
            seen: HashSet::new(),
            mounted_now: Vec::new(),
        }
    }

    /// Channel for the select keyed `key`, mounting it with `initial` state
    /// the first time the key is rendered.
    ///
    /// A key may appear once per pass, since it also names the select's
    /// boundary element.
    pub fn mount_select(
        &mut self,
        key: &str,
        initial: impl FnOnce() -> SelectState,
    ) -> Result<SelectChannel, SelectError> {
        if !self.seen.insert(key.to_string()) {
            log::warn!("Select key {} rendered twice in one pass", key);
            return Err(SelectError::DuplicateKey {
                key: key.to_string(),
            });
        }
        let (channel, mounted) = self.mounts.mount(key, initial, self.document);
        if mounted {
            self.mounted_now.push(key.to_string());
        }
        Ok(channel)
    }

    /// Register the activation handler for an element rendered in this pass.
    pub fn on_activate(&self, element_id: &str, handler: Handler) {
        self.handlers.register(element_id, handler);
    }

    /// Keep the pass: unmount selects that were not rendered and hand back
    /// the handlers.
    pub(crate) fn commit(self) -> HandlerRegistry {
        self.mounts.retain(&self.seen);
        self.handlers
    }

    /// Discard the pass: unmount selects first mounted by it.
    pub(crate) fn abort(self) {
        for key in &self.mounted_now {
            self.mounts.unmount(key);
        }
    }
}
