use super::*;

fn buffer(letters: &str) -> GuessBuffer {
    let mut guess = GuessBuffer::new();
    for ch in letters.chars() {
        assert!(guess.push(ch));
    }
    guess
}

#[test]
fn new_buffer_is_empty() {
    let guess = GuessBuffer::new();
    assert!(guess.is_empty());
    assert_eq!(guess.len(), 0);
    assert_eq!(guess.as_str(), "");
}

#[test]
fn push_grows_by_one_until_full() {
    let mut guess = GuessBuffer::new();
    for expected in 1..=GUESS_LEN {
        assert!(guess.push('a'));
        assert_eq!(guess.len(), expected);
    }
    assert!(guess.is_full());
}

#[test]
fn push_when_full_is_noop() {
    let mut guess = buffer("HELLO");
    assert!(!guess.push('X'));
    assert_eq!(guess.as_str(), "HELLO");
    assert_eq!(guess.len(), GUESS_LEN);
}

#[test]
fn push_uppercases() {
    let guess = buffer("abc");
    assert_eq!(guess.as_str(), "ABC");
}

#[test]
fn push_rejects_non_letters() {
    let mut guess = buffer("AB");
    assert!(!guess.push('1'));
    assert!(!guess.push('é'));
    assert_eq!(guess.as_str(), "AB");
}

#[test]
fn pop_removes_last_letter() {
    let mut guess = buffer("HELLO");
    assert_eq!(guess.pop(), Some('O'));
    assert_eq!(guess.as_str(), "HELL");
}

#[test]
fn pop_on_empty_is_noop() {
    let mut guess = GuessBuffer::new();
    assert_eq!(guess.pop(), None);
    assert!(guess.is_empty());
}

#[test]
fn char_at_past_end_is_none() {
    let guess = buffer("HI");
    assert_eq!(guess.char_at(0), Some('H'));
    assert_eq!(guess.char_at(1), Some('I'));
    assert_eq!(guess.char_at(2), None);
    assert_eq!(guess.char_at(10), None);
}

#[test]
fn clear_empties_buffer() {
    let mut guess = buffer("WORD");
    guess.clear();
    assert!(guess.is_empty());
}
