//! Key classification.
//!
//! Keys reach the keyboard widget two ways: the on-screen keyboard dispatches
//! a custom event carrying a label, and physical keys arrive as raw `keydown`
//! events. Both collapse into [`Key`]; anything else is dropped here.

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;

/// A key the guess input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An uppercase ASCII letter.
    Letter(char),
    /// Submit the current guess.
    Enter,
    /// Remove the last letter.
    Backspace,
}

/// Modifier keys held during a physical key press.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether a browser/OS shortcut modifier is held. Shift is not one.
    #[must_use]
    pub fn is_shortcut(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

impl Key {
    /// Classify the label carried by an on-screen key event.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            other => letter(other).map(Self::Letter),
        }
    }

    /// Classify a physical `keydown` by its `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_keydown(key: &str, modifiers: Modifiers) -> Option<Self> {
        if modifiers.is_shortcut() {
            return None;
        }
        Self::from_label(key)
    }

    #[must_use]
    pub fn is_letter(self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

fn letter(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    let ch = chars.next()?;
    if chars.next().is_some() || !ch.is_ascii_alphabetic() {
        return None;
    }
    Some(ch.to_ascii_uppercase())
}
