use std::rc::Rc;

use selectdom::{ClickEvent, Element};

use super::Attrs;
use crate::error::SelectError;
use crate::handlers::ClickCallback;
use crate::runtime::RenderCx;
use crate::scope::Scope;
use crate::view::{render_children, Component, View};

/// Activation surface that opens and closes the panel.
///
/// On activation the panel is toggled first, then the caller's `on_click`
/// receives the original click.
#[derive(Default)]
pub struct SelectTrigger {
    on_click: Option<ClickCallback>,
    attrs: Attrs,
    children: Vec<View>,
}

impl SelectTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&ClickEvent) + 'static,
    {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.class = Some(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for SelectTrigger {
    fn name(&self) -> &'static str {
        "SelectTrigger"
    }

    fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        let channel = scope.channel(self.name())?.clone();
        let id = scope.element_id("trigger");
        let children = render_children(&self.children, cx, scope)?;

        let on_click = self.on_click.clone();
        cx.on_activate(
            &id,
            Rc::new(move |event: &ClickEvent| {
                channel.toggle();
                if let Some(ref handler) = on_click {
                    handler(event);
                }
            }),
        );

        let element = Element::row()
            .id(id)
            .gap(1)
            .clickable(true)
            .data("role", "trigger")
            .children(children);
        Ok(Some(self.attrs.apply(element)))
    }
}
