//! Compound select: a `Select` container and the parts that share its state.
//!
//! ```ignore
//! Select::new()
//!     .default_value("apple")
//!     .child(
//!         SelectTrigger::new()
//!             .child(SelectValue::new().placeholder("Choose a fruit..."))
//!             .child("▼"),
//!     )
//!     .child(
//!         SelectContent::new()
//!             .child(SelectItem::new("apple").child("Apple"))
//!             .child(SelectItem::new("banana").child("Banana"))
//!             .child(SelectItem::new("cherry").on_select(|v| log::info!("picked {v}"))),
//!     )
//! ```
//!
//! The parts find their `Select` through the render scope. Rendering any of
//! them outside a `Select` fails the render with `SelectError::MissingProvider`.

mod content;
mod item;
mod trigger;
mod value;

use std::collections::HashMap;

use selectdom::Element;

pub use content::SelectContent;
pub use item::SelectItem;
pub use trigger::SelectTrigger;
pub use value::SelectValue;

use crate::error::SelectError;
use crate::runtime::{boundary_id, RenderCx};
use crate::scope::Scope;
use crate::state::SelectState;
use crate::view::{render_children, Component, View};

/// Passthrough presentation attributes shared by all parts.
#[derive(Clone, Debug, Default)]
pub(crate) struct Attrs {
    class: Option<String>,
    data: HashMap<String, String>,
}

impl Attrs {
    pub(crate) fn apply(&self, mut element: Element) -> Element {
        if let Some(class) = &self.class {
            element = element.data("class", class);
        }
        for (key, value) in &self.data {
            element = element.data(key, value);
        }
        element
    }
}

/// Select container. Owns the selection state of everything rendered below it.
#[derive(Default)]
pub struct Select {
    key: Option<String>,
    default_value: Option<String>,
    default_open: bool,
    attrs: Attrs,
    children: Vec<View>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount identity. Defaults to the select's position in the view tree.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Value committed when the select is first mounted.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Whether the panel starts open when the select is first mounted.
    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.class = Some(class.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<V: Into<View>>(mut self, children: impl IntoIterator<Item = V>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    fn resolve_key(&self, scope: &Scope) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| format!("@{}", scope.path()))
    }
}

impl Component for Select {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        let key = self.resolve_key(scope);
        let channel = cx.mount_select(&key, || {
            SelectState::new(self.default_value.clone(), self.default_open)
        })?;

        log::debug!(
            "Select::render key={} open={} value={:?}",
            key,
            channel.is_open(),
            channel.value()
        );

        let inner = scope.provide(channel);
        let children = render_children(&self.children, cx, &inner)?;

        let element = Element::col()
            .id(boundary_id(&key))
            .data("role", "select")
            .data("key", &key)
            .children(children);
        Ok(Some(self.attrs.apply(element)))
    }
}
