//! View tree: what a render pass turns into elements.
//!
//! Views are rebuilt by the caller on every pass; the runtime keeps mounted
//! state across passes by key, not by holding on to views.

use selectdom::{Direction, Element};

use crate::error::SelectError;
use crate::runtime::RenderCx;
use crate::scope::Scope;
use crate::select::{Select, SelectContent, SelectItem, SelectTrigger, SelectValue};

/// Something that renders to at most one element.
pub trait Component {
    /// Name used in logs and in `MissingProvider` errors.
    fn name(&self) -> &'static str;

    /// Render at the position described by `scope`. `Ok(None)` means the
    /// component is structurally absent for this pass.
    fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError>;
}

pub enum View {
    Text(String),
    Group(Group),
    Select(Select),
    Trigger(SelectTrigger),
    Value(SelectValue),
    Content(SelectContent),
    Item(SelectItem),
}

impl View {
    pub fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        match self {
            View::Text(text) => Ok(Some(Element::text(text).id(scope.element_id("text")))),
            View::Group(group) => group.render(cx, scope),
            View::Select(select) => select.render(cx, scope),
            View::Trigger(trigger) => trigger.render(cx, scope),
            View::Value(value) => value.render(cx, scope),
            View::Content(content) => content.render(cx, scope),
            View::Item(item) => item.render(cx, scope),
        }
    }
}

/// Render a list of child views, dropping the absent ones.
pub fn render_children(
    children: &[View],
    cx: &mut RenderCx<'_>,
    scope: &Scope,
) -> Result<Vec<Element>, SelectError> {
    let mut elements = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        if let Some(element) = child.render(cx, &scope.child(index))? {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Plain host container.
#[derive(Default)]
pub struct Group {
    direction: Direction,
    gap: u16,
    class: Option<String>,
    children: Vec<View>,
}

impl Group {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
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

impl Component for Group {
    fn name(&self) -> &'static str {
        "Group"
    }

    fn render(&self, cx: &mut RenderCx<'_>, scope: &Scope) -> Result<Option<Element>, SelectError> {
        let children = render_children(&self.children, cx, scope)?;
        let mut element = Element::box_()
            .id(scope.element_id("group"))
            .direction(self.direction)
            .gap(self.gap)
            .children(children);
        if let Some(class) = &self.class {
            element = element.data("class", class);
        }
        Ok(Some(element))
    }
}

/// Text node.
pub fn text(content: impl Into<String>) -> View {
    View::Text(content.into())
}

/// Horizontal group.
pub fn row() -> Group {
    Group::new(Direction::Row)
}

/// Vertical group.
pub fn col() -> Group {
    Group::new(Direction::Column)
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::Text(text.to_string())
    }
}

impl From<String> for View {
    fn from(text: String) -> Self {
        View::Text(text)
    }
}

impl From<Group> for View {
    fn from(group: Group) -> Self {
        View::Group(group)
    }
}

impl From<Select> for View {
    fn from(select: Select) -> Self {
        View::Select(select)
    }
}

impl From<SelectTrigger> for View {
    fn from(trigger: SelectTrigger) -> Self {
        View::Trigger(trigger)
    }
}

impl From<SelectValue> for View {
    fn from(value: SelectValue) -> Self {
        View::Value(value)
    }
}

impl From<SelectContent> for View {
    fn from(content: SelectContent) -> Self {
        View::Content(content)
    }
}

impl From<SelectItem> for View {
    fn from(item: SelectItem) -> Self {
        View::Item(item)
    }
}
