//! Keyed table of mounted selects.
//!
//! A select is mounted the first time its key shows up in a render pass and
//! unmounted after the first successful pass that doesn't render it. Each
//! mount owns its channel and the guard of its document listener, so
//! removing the entry (or dropping the table) removes the listener.

use std::collections::{HashMap, HashSet};

use selectdom::{Document, ListenerGuard};

use crate::state::{SelectChannel, SelectState};

/// Element id of a mounted select's boundary.
pub fn boundary_id(key: &str) -> String {
    format!("select-{key}")
}

#[derive(Debug)]
struct Mounted {
    channel: SelectChannel,
    _listener: ListenerGuard,
}

#[derive(Debug)]
pub struct MountTable {
    /// Root element of the tree the selects are rendered into.
    root_id: String,
    mounted: HashMap<String, Mounted>,
}

impl MountTable {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            mounted: HashMap::new(),
        }
    }

    /// Channel for `key`, mounting a new select if the key is not mounted.
    /// Returns the channel and whether this call mounted it.
    pub fn mount(
        &mut self,
        key: &str,
        initial: impl FnOnce() -> SelectState,
        document: &Document,
    ) -> (SelectChannel, bool) {
        if let Some(mounted) = self.mounted.get(key) {
            return (mounted.channel.clone(), false);
        }

        let channel = SelectChannel::new(initial());
        let root = self.root_id.clone();
        let boundary = boundary_id(key);
        let watcher = channel.clone();
        let listener = document.listen_pointer_down(move |event| {
            let inside = event.is_within(&root) && event.is_within(&boundary);
            if !inside && watcher.is_open() {
                log::debug!(
                    "Select outside pointer-down boundary={} target={:?}",
                    boundary,
                    event.target
                );
                watcher.close();
            }
        });

        log::debug!(
            "Select mounted key={} listener={} state={:?}",
            key,
            listener.id(),
            channel.snapshot()
        );

        self.mounted.insert(
            key.to_string(),
            Mounted {
                channel: channel.clone(),
                _listener: listener,
            },
        );
        (channel, true)
    }

    /// Unmount one key. Returns true if it was mounted.
    pub fn unmount(&mut self, key: &str) -> bool {
        let removed = self.mounted.remove(key).is_some();
        if removed {
            log::debug!("Select unmounted key={}", key);
        }
        removed
    }

    /// Unmount every key not in `keep`.
    pub fn retain(&mut self, keep: &HashSet<String>) {
        let stale: Vec<String> = self
            .mounted
            .keys()
            .filter(|key| !keep.contains(*key))
            .cloned()
            .collect();
        for key in stale {
            self.unmount(&key);
        }
    }

    pub fn get(&self, key: &str) -> Option<SelectChannel> {
        self.mounted.get(key).map(|mounted| mounted.channel.clone())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mounted.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Whether any mounted state changed since the last call; clears the flags.
    pub fn take_dirty(&self) -> bool {
        let mut dirty = false;
        for mounted in self.mounted.values() {
            dirty |= mounted.channel.is_dirty();
            mounted.channel.clear_dirty();
        }
        dirty
    }

    pub fn clear(&mut self) {
        let keys: Vec<String> = self.mounted.keys().cloned().collect();
        for key in keys {
            self.unmount(&key);
        }
    }
}
