use compound_select::state::{SelectChannel, SelectState};

fn channel(value: Option<&str>, open: bool) -> SelectChannel {
    SelectChannel::new(SelectState::new(value.map(str::to_string), open))
}

// ============================================================================
// Mutators
// ============================================================================

#[test]
fn test_initial_state_from_defaults() {
    let c = channel(Some("apple"), true);
    assert_eq!(
        c.snapshot(),
        SelectState {
            value: Some("apple".into()),
            is_open: true
        }
    );
    assert!(!c.is_dirty());
}

#[test]
fn test_toggle_parity() {
    // is_open == (activations % 2 == 1) XOR default_open
    for default_open in [false, true] {
        let c = channel(None, default_open);
        for count in 1..=7 {
            c.toggle();
            assert_eq!(c.is_open(), (count % 2 == 1) ^ default_open, "after {count} toggles");
        }
    }
}

#[test]
fn test_close_is_idempotent() {
    let c = channel(None, true);
    c.close();
    assert!(!c.is_open());
    assert!(c.is_dirty());

    c.clear_dirty();
    c.close();
    assert!(!c.is_open());
    assert!(!c.is_dirty(), "closing a closed panel changes nothing");
}

#[test]
fn test_set_open() {
    let c = channel(None, false);
    c.set_open(true);
    assert!(c.is_open());
    c.set_open(false);
    assert!(!c.is_open());
}

#[test]
fn test_set_value_marks_dirty_only_on_change() {
    let c = channel(Some("a"), false);
    c.set_value("a");
    assert!(!c.is_dirty());

    c.set_value("b");
    assert!(c.is_dirty());
    assert_eq!(c.value().as_deref(), Some("b"));
}

#[test]
fn test_clones_share_state() {
    let a = channel(None, false);
    let b = a.clone();
    b.set_value("shared");
    b.toggle();

    assert_eq!(a.value().as_deref(), Some("shared"));
    assert!(a.is_open());
    assert!(a.same_as(&b));
    assert!(!a.same_as(&channel(None, false)));
}
