use std::rc::Rc;

use selectdom::{ClickEvent, Element};

use super::Attrs;
use crate::error::SelectError;
use crate::handlers::SelectCallback;
use crate::runtime::RenderCx;
use crate::scope::Scope;
use crate::view::{render_children, Component, View};

/// Selectable option.
///
/// On activation the value is committed, the panel is closed, and then
/// `on_select` is called with the value.
pub struct SelectItem {
    value: String,
    on_select: Option<SelectCallback>,
    attrs: Attrs,
    children: Vec<View>,
}

impl SelectItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_select: None,
            attrs: Attrs::default(),
            children: Vec::new(),
        }
    }

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_select = Some(Rc::new(f));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.class = Some(class.into());
        self
    }

    /// Label content. Without children the value is shown.
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for SelectItem {
    fn name(&self) -> &'static str {
        "SelectItem"
    }

    fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        let channel = scope.channel(self.name())?.clone();
        let id = scope.element_id("item");

        let mut children = render_children(&self.children, cx, scope)?;
        if self.children.is_empty() {
            children.push(Element::text(&self.value).id(scope.element_id("label")));
        }

        let value = self.value.clone();
        let on_select = self.on_select.clone();
        cx.on_activate(
            &id,
            Rc::new(move |_event: &ClickEvent| {
                channel.set_value(value.as_str());
                channel.close();
                if let Some(ref handler) = on_select {
                    handler(value.as_str());
                }
            }),
        );

        let element = Element::row()
            .id(id)
            .clickable(true)
            .data("role", "item")
            .data("value", &self.value)
            .children(children);
        Ok(Some(self.attrs.apply(element)))
    }
}
