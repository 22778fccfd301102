use crossterm::event::{
    Event as CtEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};
use selectdom::{hit_path, hit_test, Element, Input, LayoutResult, MouseButton, PointerEvent, Rect};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
}

#[test]
fn test_hit_test_clickable_ancestor_of_text() {
    // Text inside a clickable row activates the row
    let root = Element::col().id("root").child(
        Element::row()
            .id("trigger")
            .clickable(true)
            .child(Element::text("Pick").id("label")),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 5)),
        ("trigger", Rect::new(0, 0, 4, 1)),
        ("label", Rect::new(0, 0, 4, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 2, 0), Some("trigger".to_string()));
}

#[test]
fn test_hit_path_lists_ancestors() {
    let root = Element::col().id("root").child(
        Element::col()
            .id("select")
            .child(Element::text("a").id("item-a"))
            .child(Element::text("b").id("item-b")),
    );

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 10)),
        ("select", Rect::new(0, 0, 5, 2)),
        ("item-a", Rect::new(0, 0, 1, 1)),
        ("item-b", Rect::new(0, 1, 1, 1)),
    ]);

    assert_eq!(hit_path(&layout, &root, 0, 1), vec!["root", "select", "item-b"]);
    assert_eq!(hit_path(&layout, &root, 10, 8), vec!["root"]);
    assert!(hit_path(&layout, &root, 50, 50).is_empty());
}

#[test]
fn test_hit_path_overflowing_child_keeps_parent() {
    // Child drawn outside its parent's rect is still structurally inside it
    let root = Element::col()
        .id("root")
        .child(Element::col().id("parent").child(Element::text("x").id("child")));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 20, 10)),
        ("parent", Rect::new(0, 0, 2, 1)),
        ("child", Rect::new(5, 5, 1, 1)),
    ]);

    assert_eq!(hit_path(&layout, &root, 5, 5), vec!["root", "parent", "child"]);
}

#[test]
fn test_hit_path_skips_unlaid_elements() {
    let root = Element::col().id("root").child(Element::text("ghost").id("ghost"));
    let layout = create_layout(&[("root", Rect::new(0, 0, 10, 10))]);

    assert_eq!(hit_path(&layout, &root, 1, 0), vec!["root"]);
}

// ============================================================================
// Pointer Events
// ============================================================================

#[test]
fn test_pointer_event_target_is_last_in_path() {
    let event = PointerEvent::new(
        1,
        2,
        MouseButton::Left,
        vec!["root".into(), "select".into(), "item".into()],
    );

    assert_eq!(event.target.as_deref(), Some("item"));
    assert!(event.is_within("select"));
    assert!(event.is_within("item"));
    assert!(!event.is_within("other"));
}

#[test]
fn test_pointer_event_without_target() {
    let event = PointerEvent::new(0, 0, MouseButton::Right, Vec::new());
    assert_eq!(event.target, None);
    assert!(!event.is_within("root"));
}

// ============================================================================
// Crossterm Conversion
// ============================================================================

#[test]
fn test_from_crossterm_mouse_down_up() {
    assert_eq!(
        Input::from_crossterm(&mouse(MouseEventKind::Down(CtButton::Left), 3, 4)),
        Some(Input::PointerDown {
            x: 3,
            y: 4,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        Input::from_crossterm(&mouse(MouseEventKind::Up(CtButton::Middle), 7, 1)),
        Some(Input::PointerUp {
            x: 7,
            y: 1,
            button: MouseButton::Middle
        })
    );
}

#[test]
fn test_from_crossterm_ignores_moves_and_keys() {
    assert_eq!(Input::from_crossterm(&mouse(MouseEventKind::Moved, 1, 1)), None);
    assert_eq!(
        Input::from_crossterm(&mouse(MouseEventKind::Drag(CtButton::Left), 1, 1)),
        None
    );
    assert_eq!(Input::from_crossterm(&CtEvent::FocusGained), None);
}

#[test]
fn test_from_crossterm_resize() {
    assert_eq!(
        Input::from_crossterm(&CtEvent::Resize(80, 24)),
        Some(Input::Resize {
            width: 80,
            height: 24
        })
    );
}
