use selectdom::Element;

use super::Attrs;
use crate::error::SelectError;
use crate::runtime::RenderCx;
use crate::scope::Scope;
use crate::view::Component;

/// Label showing the committed value, or the placeholder when there is none.
#[derive(Clone, Debug, Default)]
pub struct SelectValue {
    placeholder: Option<String>,
    attrs: Attrs,
}

impl SelectValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.class = Some(class.into());
        self
    }
}

impl Component for SelectValue {
    fn name(&self) -> &'static str {
        "SelectValue"
    }

    fn render(&self, _cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        let channel = scope.channel(self.name())?;

        // An empty value counts as no value
        let label = channel
            .value()
            .filter(|value| !value.is_empty())
            .or_else(|| self.placeholder.clone());

        let element = match label {
            Some(label) => Element::text(label),
            None => Element::box_(),
        };
        let element = element
            .id(scope.element_id("value"))
            .data("role", "value");
        Ok(Some(self.attrs.apply(element)))
    }
}
