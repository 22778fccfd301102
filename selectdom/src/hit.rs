use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y)
}

fn hit_test_element(layout: &LayoutResult, element: &Element, x: u16, y: u16) -> Option<String> {
    // Check children in reverse order (last rendered = on top)
    for child in element.content.children().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y) {
            return Some(id);
        }
    }

    let rect = layout.get(&element.id)?;
    if element.clickable && rect.contains(x, y) {
        Some(element.id.clone())
    } else {
        None
    }
}

/// Ancestor chain of the deepest element at the given coordinates, from the
/// root down to the target itself. Empty when nothing contains the point.
///
/// Containment is structural: a child that lies outside its parent's rect
/// still reports the parent as an ancestor.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Vec<String> {
    let mut path = Vec::new();
    hit_path_element(layout, root, x, y, &mut path);
    path
}

fn hit_path_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    path: &mut Vec<String>,
) -> bool {
    path.push(element.id.clone());

    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if hit_path_element(layout, child, x, y, path) {
                return true;
            }
        }
    }

    if layout.get(&element.id).is_some_and(|rect| rect.contains(x, y)) {
        return true;
    }

    path.pop();
    false
}
