use super::*;

// =============================================================
// from_label
// =============================================================

#[test]
fn label_enter_and_backspace() {
    assert_eq!(Key::from_label("Enter"), Some(Key::Enter));
    assert_eq!(Key::from_label("Backspace"), Some(Key::Backspace));
}

#[test]
fn label_letters_are_uppercased() {
    assert_eq!(Key::from_label("a"), Some(Key::Letter('A')));
    assert_eq!(Key::from_label("Z"), Some(Key::Letter('Z')));
}

#[test]
fn label_rejects_non_letters() {
    for label in ["", "1", " ", "?", "AB", "é", "Shift", "enter"] {
        assert_eq!(Key::from_label(label), None, "{label:?}");
    }
}

// =============================================================
// from_keydown
// =============================================================

#[test]
fn keydown_accepts_plain_letters() {
    assert_eq!(Key::from_keydown("h", Modifiers::default()), Some(Key::Letter('H')));
}

#[test]
fn keydown_accepts_shifted_letters() {
    let shift = Modifiers { shift: true, ..Modifiers::default() };
    assert_eq!(Key::from_keydown("Q", shift), Some(Key::Letter('Q')));
}

#[test]
fn keydown_ignores_shortcuts() {
    let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
    let meta = Modifiers { meta: true, ..Modifiers::default() };
    let alt = Modifiers { alt: true, ..Modifiers::default() };
    assert_eq!(Key::from_keydown("r", ctrl), None);
    assert_eq!(Key::from_keydown("Backspace", meta), None);
    assert_eq!(Key::from_keydown("Enter", alt), None);
}

#[test]
fn keydown_ignores_navigation_keys() {
    for key in ["ArrowLeft", "Tab", "Escape", "F5", "Delete"] {
        assert_eq!(Key::from_keydown(key, Modifiers::default()), None, "{key}");
    }
}

#[test]
fn modifiers_default_is_not_shortcut() {
    assert!(!Modifiers::default().is_shortcut());
    assert!(!Modifiers { shift: true, ..Modifiers::default() }.is_shortcut());
}

#[test]
fn is_letter_only_for_letters() {
    assert!(Key::Letter('A').is_letter());
    assert!(!Key::Enter.is_letter());
    assert!(!Key::Backspace.is_letter());
}
