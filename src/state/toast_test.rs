use super::*;

// =============================================================
// ToastState defaults
// =============================================================

#[test]
fn toast_state_default_is_hidden() {
    let state = ToastState::default();
    assert!(!state.visible);
    assert!(state.message.is_empty());
    assert_eq!(state.seq, 0);
}

// =============================================================
// show
// =============================================================

#[test]
fn show_sets_message_kind_and_visibility() {
    let mut state = ToastState::default();
    state.show("Lead generated successfully!", ToastKind::Success);
    assert!(state.visible);
    assert_eq!(state.message, "Lead generated successfully!");
    assert_eq!(state.kind, ToastKind::Success);
}

#[test]
fn show_bumps_seq_each_time() {
    let mut state = ToastState::default();
    state.show("one", ToastKind::Error);
    state.show("two", ToastKind::Warning);
    assert_eq!(state.seq, 2);
    assert_eq!(state.kind, ToastKind::Warning);
}

#[test]
fn hiding_does_not_bump_seq() {
    // The dismiss timer only flips visibility; seq moves on `show` alone,
    // which is what lets a timer detect it has been superseded.
    let mut state = ToastState::default();
    state.show("one", ToastKind::Success);
    let seq = state.seq;
    state.visible = false;
    assert_eq!(state.seq, seq);
}

// =============================================================
// ToastKind
// =============================================================

#[test]
fn toast_kind_default_is_success() {
    assert_eq!(ToastKind::default(), ToastKind::Success);
}

#[test]
fn toast_kind_css_classes_are_distinct() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert_ne!(ToastKind::Error.css_class(), ToastKind::Warning.css_class());
    assert_ne!(
        ToastKind::Success.css_class(),
        ToastKind::Warning.css_class()
    );
}
