//! Render scope: the explicit context passed down a render pass.
//!
//! A `Select` derives a child scope carrying its channel; every part below it
//! reads the nearest channel from the scope it was handed. There is no global
//! lookup, so a part rendered outside any `Select` gets a `MissingProvider`
//! error instead of a default.

use crate::error::SelectError;
use crate::state::SelectChannel;

#[derive(Clone, Debug)]
pub struct Scope {
    channel: Option<SelectChannel>,
    path: String,
}

impl Default for Scope {
    fn default() -> Self {
        Self::root()
    }
}

impl Scope {
    /// Scope for the root of a view tree.
    pub fn root() -> Self {
        Self {
            channel: None,
            path: "0".into(),
        }
    }

    /// Scope for the `index`-th child of the node owning this scope.
    pub fn child(&self, index: usize) -> Self {
        Self {
            channel: self.channel.clone(),
            path: format!("{}.{}", self.path, index),
        }
    }

    /// Same position, with `channel` as the nearest provider.
    pub fn provide(&self, channel: SelectChannel) -> Self {
        Self {
            channel: Some(channel),
            path: self.path.clone(),
        }
    }

    /// Nearest enclosing channel.
    ///
    /// `component` names the caller in the error.
    pub fn channel(&self, component: &'static str) -> Result<&SelectChannel, SelectError> {
        self.channel
            .as_ref()
            .ok_or(SelectError::MissingProvider { component })
    }

    /// Structural position, e.g. `0.2.1`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Element id for a node of kind `role` rendered at this position.
    pub fn element_id(&self, role: &str) -> String {
        format!("{role}-{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectState;

    #[test]
    fn test_child_paths() {
        let root = Scope::root();
        assert_eq!(root.child(2).child(0).path(), "0.2.0");
        assert_eq!(root.child(1).element_id("item"), "item-0.1");
    }

    #[test]
    fn test_missing_provider() {
        let err = Scope::root().channel("SelectItem").unwrap_err();
        assert_eq!(err, SelectError::MissingProvider { component: "SelectItem" });
        assert_eq!(err.to_string(), "SelectItem must be rendered inside a Select");
    }

    #[test]
    fn test_nearest_provider_wins() {
        let outer = SelectChannel::new(SelectState::new(Some("outer".into()), false));
        let inner = SelectChannel::new(SelectState::new(Some("inner".into()), false));

        let scope = Scope::root().provide(outer.clone()).child(0);
        assert!(scope.channel("t").is_ok_and(|c| c.same_as(&outer)));

        let nested = scope.provide(inner.clone()).child(3);
        assert!(nested.channel("t").is_ok_and(|c| c.same_as(&inner)));
        assert_eq!(nested.path(), "0.0.3");
    }
}
