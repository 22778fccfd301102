use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, *rect, buf),
        Content::Children(children) => {
            for child in children {
                render_to_buffer(child, layout, buf);
            }
        }
    }
}

fn render_text(text: &str, rect: Rect, buf: &mut Buffer) {
    for (row, line) in text.lines().enumerate() {
        let y = rect.y.saturating_add(row as u16);
        if y >= rect.bottom() {
            break;
        }

        let mut x = rect.x;
        for c in line.chars() {
            let width = char_width(c);
            if width == 0 {
                continue;
            }
            // Don't split a wide character across the rect edge
            if x.saturating_add(width) > rect.right() {
                break;
            }
            buf.set(x, y, Cell::new(c));
            for offset in 1..width {
                buf.set(x + offset, y, Cell::continuation());
            }
            x += width;
        }
    }
}

/// Render a laid-out tree to plain text lines.
pub fn render_to_lines(element: &Element, layout: &LayoutResult, width: u16, height: u16) -> Vec<String> {
    let mut buf = Buffer::new(width, height);
    render_to_buffer(element, layout, &mut buf);
    buf.to_lines()
}
