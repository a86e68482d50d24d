use super::*;

#[test]
fn ui_state_defaults() {
    let s = UiState::default();
    assert!(!s.dark_mode);
    assert!(s.toast.is_none());
}

#[test]
fn with_dark_mode_seeds_preference() {
    assert!(UiState::with_dark_mode(true).dark_mode);
}

#[test]
fn show_toast_replaces_current_one() {
    let mut s = UiState::default();
    s.show_error("first");
    s.show_success("second");

    let toast = s.toast.expect("toast");
    assert_eq!(toast.message, "second");
    assert_eq!(toast.variant, ToastVariant::Success);
}

#[test]
fn dismiss_if_current_ignores_stale_generation() {
    let mut s = UiState::default();
    let stale = s.show_error("first");
    s.show_error("second");

    s.dismiss_if_current(stale);
    assert!(s.toast.is_some());
}

#[test]
fn dismiss_if_current_removes_matching_generation() {
    let mut s = UiState::default();
    let seq = s.show_error("only");
    s.dismiss_if_current(seq);
    assert!(s.toast.is_none());
}

#[test]
fn dismiss_toast_clears_unconditionally() {
    let mut s = UiState::default();
    s.show_success("bye");
    s.dismiss_toast();
    assert!(s.toast.is_none());
}
