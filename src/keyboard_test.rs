use super::*;
use crate::consts::{EMPTY_BORDER_CLASS, FILLED_BORDER_CLASS, GUESS_LEN};
use crate::hook::Mounted;
use crate::signal::RecordingLink;
use crate::tiles::MemoryTiles;

type TestKeyboard = KeyboardInput<MemoryTiles, RecordingLink>;

fn keyboard() -> TestKeyboard {
    KeyboardInput::new(KeyboardConfig::default(), MemoryTiles::new(), RecordingLink::new())
}

fn click(kb: &mut TestKeyboard, label: &str) {
    kb.update(KeyboardMsg::KeyClicked(label.to_owned()));
}

fn type_word(kb: &mut TestKeyboard, word: &str) {
    for ch in word.chars() {
        click(kb, &ch.to_string());
    }
}

fn assert_tile(kb: &TestKeyboard, index: usize, label: &str) {
    let tile = kb.tiles().get(index).unwrap();
    assert_eq!(tile.label, label, "tile {index}");
    let expected = if label.is_empty() { EMPTY_BORDER_CLASS } else { FILLED_BORDER_CLASS };
    assert_eq!(tile.border_class, expected, "tile {index}");
}

// =============================================================
// Letters
// =============================================================

#[test]
fn typing_hello_fills_all_tiles() {
    let mut kb = keyboard();
    type_word(&mut kb, "HELLO");
    assert_eq!(kb.guess().as_str(), "HELLO");
    for (index, letter) in ["H", "E", "L", "L", "O"].iter().enumerate() {
        assert_tile(&kb, index, letter);
    }
}

#[test]
fn letters_are_uppercased() {
    let mut kb = keyboard();
    type_word(&mut kb, "abc");
    assert_eq!(kb.guess().as_str(), "ABC");
    assert_tile(&kb, 0, "A");
}

#[test]
fn letter_when_full_is_ignored() {
    let mut kb = keyboard();
    type_word(&mut kb, "HELLO");
    let paints = kb.tiles().paint_count();
    click(&mut kb, "X");
    assert_eq!(kb.guess().as_str(), "HELLO");
    assert_eq!(kb.tiles().paint_count(), paints);
}

#[test]
fn every_letter_below_capacity_grows_guess_by_one() {
    for start in 0..GUESS_LEN {
        let mut kb = keyboard();
        type_word(&mut kb, &"A".repeat(start));
        click(&mut kb, "B");
        assert_eq!(kb.guess().len(), start + 1);
    }
}

#[test]
fn unknown_labels_are_ignored() {
    let mut kb = keyboard();
    click(&mut kb, "Shift");
    click(&mut kb, "7");
    assert!(kb.guess().is_empty());
}

// =============================================================
// Backspace
// =============================================================

#[test]
fn backspace_clears_last_tile() {
    let mut kb = keyboard();
    type_word(&mut kb, "HELLO");
    click(&mut kb, "Backspace");
    assert_eq!(kb.guess().as_str(), "HELL");
    assert_tile(&kb, 3, "L");
    assert_tile(&kb, 4, "");
}

#[test]
fn backspace_on_empty_guess_is_noop() {
    let mut kb = keyboard();
    click(&mut kb, "Backspace");
    assert!(kb.guess().is_empty());
    for index in 0..GUESS_LEN {
        assert_tile(&kb, index, "");
    }
}

// =============================================================
// Enter
// =============================================================

#[test]
fn enter_submits_partial_guess_and_keeps_it() {
    let mut kb = keyboard();
    type_word(&mut kb, "ABC");
    click(&mut kb, "Enter");
    assert_eq!(kb.link().sent(), vec![("submit".to_owned(), ClientSignal::Submit { guess: "ABC".into() })]);
    assert_eq!(kb.guess().as_str(), "ABC");
}

#[test]
fn enter_on_empty_guess_still_submits() {
    let mut kb = keyboard();
    click(&mut kb, "Enter");
    assert_eq!(kb.link().sent(), vec![("submit".to_owned(), ClientSignal::Submit { guess: String::new() })]);
}

#[test]
fn enter_uses_configured_submit_event() {
    let config = KeyboardConfig { submit_event: "guess:submit".into(), ..KeyboardConfig::default() };
    let mut kb = KeyboardInput::new(config, MemoryTiles::new(), RecordingLink::new());
    kb.press(Key::Enter);
    assert_eq!(kb.link().sent()[0].0, "guess:submit");
}

// =============================================================
// Physical keys
// =============================================================

#[test]
fn keydown_types_letters() {
    let mut kb = keyboard();
    kb.update(KeyboardMsg::KeyDown { key: "w".into(), modifiers: Modifiers::default() });
    assert_eq!(kb.guess().as_str(), "W");
}

#[test]
fn keydown_shortcut_is_ignored() {
    let mut kb = keyboard();
    let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
    kb.update(KeyboardMsg::KeyDown { key: "r".into(), modifiers: ctrl });
    assert!(kb.guess().is_empty());
}

#[test]
fn keydown_enter_and_backspace_match_clicks() {
    let mut kb = keyboard();
    type_word(&mut kb, "AB");
    kb.update(KeyboardMsg::KeyDown { key: "Backspace".into(), modifiers: Modifiers::default() });
    kb.update(KeyboardMsg::KeyDown { key: "Enter".into(), modifiers: Modifiers::default() });
    assert_eq!(kb.link().sent()[0].1, ClientSignal::Submit { guess: "A".into() });
}

// =============================================================
// Reset / render
// =============================================================

#[test]
fn reset_clears_guess_and_tiles() {
    let mut kb = keyboard();
    type_word(&mut kb, "CRANE");
    kb.update(KeyboardMsg::Reset);
    assert!(kb.guess().is_empty());
    for index in 0..GUESS_LEN {
        assert_tile(&kb, index, "");
    }
}

#[test]
fn render_is_idempotent() {
    let mut kb = keyboard();
    type_word(&mut kb, "PLA");
    let before = kb.tiles().clone();
    kb.update(KeyboardMsg::Updated);
    kb.update(KeyboardMsg::Updated);
    for index in 0..GUESS_LEN {
        assert_eq!(kb.tiles().get(index), before.get(index));
    }
}

#[test]
fn missing_tile_does_not_stop_other_tiles() {
    for log_missing_tiles in [true, false] {
        let config = KeyboardConfig { log_missing_tiles, ..KeyboardConfig::default() };
        let mut kb = KeyboardInput::new(config, MemoryTiles::with_missing(&[1]), RecordingLink::new());
        type_word(&mut kb, "ABC");
        assert!(kb.tiles().get(1).is_none());
        assert_tile(&kb, 0, "A");
        assert_tile(&kb, 2, "C");
        assert_eq!(kb.guess().as_str(), "ABC");
    }
}

// =============================================================
// Hook lifecycle
// =============================================================

#[test]
fn activation_paints_empty_tiles() {
    let mounted = Mounted::mount(keyboard());
    assert_eq!(mounted.hook().tiles().paint_count(), GUESS_LEN);
    assert!(mounted.hook().guess().is_empty());
}

#[test]
fn reset_signal_clears_guess() {
    let mut mounted = Mounted::mount(keyboard());
    type_word(mounted.hook_mut(), "SPOON");
    mounted.signal(&ServerSignal::Reset);
    assert!(mounted.hook().guess().is_empty());
}

#[test]
fn session_signals_do_not_touch_guess() {
    let mut mounted = Mounted::mount(keyboard());
    type_word(mounted.hook_mut(), "AB");
    mounted.signal(&ServerSignal::SessionClear { key: "x".into() });
    assert_eq!(mounted.hook().guess().as_str(), "AB");
}

#[test]
fn external_update_repaints() {
    let mut mounted = Mounted::mount(keyboard());
    let paints = mounted.hook().tiles().paint_count();
    mounted.updated();
    assert_eq!(mounted.hook().tiles().paint_count(), paints + GUESS_LEN);
}
