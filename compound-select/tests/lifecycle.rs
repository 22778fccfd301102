use std::cell::Cell;
use std::rc::Rc;

use compound_select::prelude::*;
use selectdom::Document;

fn simple_select(key: &str) -> Select {
    Select::new()
        .key(key)
        .child(SelectTrigger::new().child(SelectValue::new().placeholder(key)))
        .child(SelectContent::new().child(SelectItem::new("x")))
}

// ============================================================================
// Listener Registration
// ============================================================================

#[test]
fn test_nothing_mounted_before_first_render() {
    let rt = Runtime::new(RuntimeConfig::default(), || simple_select("s").into());
    assert_eq!(rt.mounted_count(), 0);
    assert_eq!(rt.document().listener_count(), 0);
}

#[test]
fn test_one_listener_per_mounted_select() {
    let mut rt = Runtime::new(RuntimeConfig::default(), || {
        col()
            .child(simple_select("a"))
            .child(simple_select("b"))
            .into()
    });
    rt.render().expect("render");

    assert_eq!(rt.mounted_keys(), vec!["a", "b"]);
    assert_eq!(rt.document().listener_count(), 2);
}

#[test]
fn test_rerender_does_not_reinstall_listener() {
    let mut rt = Runtime::new(RuntimeConfig::default(), || simple_select("s").into());
    rt.render().expect("render");
    let channel = rt.channel("s").expect("mounted");

    for _ in 0..5 {
        rt.render().expect("render");
    }
    let id = rt.find_role("trigger").remove(0);
    rt.click_element(&id).expect("click");

    assert_eq!(rt.document().listener_count(), 1);
    assert!(rt.channel("s").expect("mounted").same_as(&channel));
}

#[test]
fn test_state_survives_rerender() {
    let mut rt = Runtime::new(RuntimeConfig::default(), || simple_select("s").into());
    rt.render().expect("render");

    let channel = rt.channel("s").expect("mounted");
    channel.set_value("kept");
    channel.set_open(true);
    rt.render().expect("render");

    assert_eq!(rt.channel("s").map(|c| c.snapshot()), Some(SelectState {
        value: Some("kept".into()),
        is_open: true,
    }));
}

#[test]
fn test_defaults_only_apply_on_first_mount() {
    // Changing defaults after mount doesn't reset state
    let default_open = Rc::new(Cell::new(true));

    let flag = Rc::clone(&default_open);
    let mut rt = Runtime::new(RuntimeConfig::default(), move || {
        Select::new()
            .key("s")
            .default_open(flag.get())
            .child(SelectTrigger::new().child("t"))
            .into()
    });
    rt.render().expect("render");
    assert!(rt.channel("s").expect("mounted").is_open());

    default_open.set(false);
    rt.render().expect("render");
    assert!(rt.channel("s").expect("mounted").is_open());
}

// ============================================================================
// Unmount
// ============================================================================

#[test]
fn test_unmount_removes_listener() {
    let show = Rc::new(Cell::new(true));

    let visible = Rc::clone(&show);
    let mut rt = Runtime::new(RuntimeConfig::default(), move || {
        if visible.get() {
            col().child(simple_select("s")).into()
        } else {
            text("gone")
        }
    });
    rt.render().expect("render");
    assert_eq!(rt.document().listener_count(), 1);

    show.set(false);
    rt.render().expect("render");
    assert_eq!(rt.mounted_count(), 0);
    assert_eq!(rt.document().listener_count(), 0);
    assert!(rt.channel("s").is_none());
}

#[test]
fn test_remount_starts_from_defaults() {
    let show = Rc::new(Cell::new(true));

    let visible = Rc::clone(&show);
    let mut rt = Runtime::new(RuntimeConfig::default(), move || {
        if visible.get() {
            Select::new()
                .key("s")
                .default_value("initial")
                .child(SelectValue::new())
                .into()
        } else {
            text("gone")
        }
    });
    rt.render().expect("render");
    rt.channel("s").expect("mounted").set_value("changed");

    show.set(false);
    rt.render().expect("render");
    show.set(true);
    rt.render().expect("render");

    assert_eq!(rt.channel("s").and_then(|c| c.value()).as_deref(), Some("initial"));
    assert_eq!(rt.document().listener_count(), 1);
}

#[test]
fn test_closed_panel_unmounts_nested_select() {
    let mut rt = Runtime::new(RuntimeConfig::default(), || {
        Select::new()
            .key("outer")
            .default_open(true)
            .child(SelectTrigger::new().child("outer"))
            .child(SelectContent::new().child(simple_select("inner")))
            .into()
    });
    rt.render().expect("render");
    assert_eq!(rt.mounted_keys(), vec!["inner", "outer"]);

    rt.channel("outer").expect("mounted").close();
    rt.render().expect("render");
    assert_eq!(rt.mounted_keys(), vec!["outer"]);
    assert_eq!(rt.document().listener_count(), 1);
}

#[test]
fn test_drop_runtime_removes_listeners() {
    let document = Document::new();
    {
        let mut rt = Runtime::with_document(RuntimeConfig::default(), document.clone(), || {
            col()
                .child(simple_select("a"))
                .child(simple_select("b"))
                .into()
        });
        rt.render().expect("render");
        assert_eq!(document.listener_count(), 2);
    }
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn test_runtimes_sharing_document_are_independent() {
    let document = Document::new();
    let mut first = Runtime::with_document(RuntimeConfig::new("first"), document.clone(), || {
        simple_select("s").default_open(true).into()
    });
    let mut second = Runtime::with_document(RuntimeConfig::new("second"), document.clone(), || {
        simple_select("s").into()
    });
    first.render().expect("render");
    second.render().expect("render");
    assert_eq!(document.listener_count(), 2);

    let id = second.find_role("trigger").remove(0);
    second.click_element(&id).expect("click");

    assert!(second.channel("s").expect("mounted").is_open());
    // Same key, different trees: the press landed outside the first runtime's select
    assert!(!first.channel("s").expect("mounted").is_open());

    drop(second);
    assert_eq!(document.listener_count(), 1);
}

// ============================================================================
// Positional Keys
// ============================================================================

#[test]
fn test_unkeyed_selects_mount_by_position() {
    let mut rt = Runtime::new(RuntimeConfig::default(), || {
        col()
            .child(Select::new().child(SelectValue::new().placeholder("first")))
            .child(Select::new().child(SelectValue::new().placeholder("second")))
            .into()
    });
    rt.render().expect("render");

    assert_eq!(rt.mounted_keys(), vec!["@0.0", "@0.1"]);
    assert_eq!(rt.find_role("select"), vec!["select-@0.0", "select-@0.1"]);
}
