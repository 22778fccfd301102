//! Widget error types.

use thiserror::Error;

/// Errors raised while rendering a select tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// A select part was rendered with no enclosing `Select`.
    #[error("{component} must be rendered inside a Select")]
    MissingProvider {
        /// The part that looked up the channel.
        component: &'static str,
    },

    /// Two selects in one render pass resolved to the same key.
    #[error("select key {key} rendered more than once")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },
}
