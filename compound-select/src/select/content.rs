use selectdom::Element;

use super::Attrs;
use crate::error::SelectError;
use crate::runtime::RenderCx;
use crate::scope::Scope;
use crate::view::{render_children, Component, View};

/// Panel holding the items. Present in the element tree only while open.
#[derive(Default)]
pub struct SelectContent {
    attrs: Attrs,
    children: Vec<View>,
}

impl SelectContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.class = Some(class.into());
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
}

impl Component for SelectContent {
    fn name(&self) -> &'static str {
        "SelectContent"
    }

    fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        if !scope.channel(self.name())?.is_open() {
            return Ok(None);
        }

        let children = render_children(&self.children, cx, scope)?;
        let element = Element::col()
            .id(scope.element_id("content"))
            .data("role", "content")
            .children(children);
        Ok(Some(self.attrs.apply(element)))
    }
}
