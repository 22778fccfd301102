use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{display_width, line_count};
use crate::types::Direction;

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out a tree. The root takes the whole `available` rect; every
/// descendant is sized to its content and flowed along its parent's direction.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    result.insert(root.id.clone(), available);
    layout_children(root, available, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let mut x = rect.x;
    let mut y = rect.y;
    for child in children {
        let (width, height) = measure(child);
        let child_rect = Rect::new(x, y, width, height);
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        match element.direction {
            Direction::Column => y = y.saturating_add(height).saturating_add(element.gap),
            Direction::Row => x = x.saturating_add(width).saturating_add(element.gap),
        }
    }
}

/// Intrinsic (width, height) of an element in cells.
pub fn measure(element: &Element) -> (u16, u16) {
    match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text), line_count(text)),
        Content::Children(children) => {
            let gaps = element
                .gap
                .saturating_mul(children.len().saturating_sub(1) as u16);
            let sizes = children.iter().map(measure);
            match element.direction {
                Direction::Column => sizes.fold((0, gaps), |(w, h), (cw, ch)| {
                    (w.max(cw), h.saturating_add(ch))
                }),
                Direction::Row => sizes.fold((gaps, 0), |(w, h), (cw, ch)| {
                    (w.saturating_add(cw), h.max(ch))
                }),
            }
        }
    }
}
