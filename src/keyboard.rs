//! Guess keyboard state machine.
//!
//! Every input funnels through [`KeyboardInput::update`]:
//!
//! - letter: append when the guess has room, then redraw; ignored when full
//! - Backspace: drop the last letter (if any), then redraw
//! - Enter: push the whole guess to the server as-is; the buffer is kept
//! - reset: clear and redraw
//! - post-patch update: redraw
//!
//! Length is not checked before submitting; the server owns validation.
//! Redraws paint every tile, and a tile that cannot be painted never stops
//! the others.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use crate::config::KeyboardConfig;
use crate::guess::GuessBuffer;
use crate::hook::Hook;
use crate::key::{Key, Modifiers};
use crate::signal::{ClientSignal, ServerLink, ServerSignal};
use crate::tiles::{TileSurface, tile_views};

/// Input to the keyboard widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardMsg {
    /// On-screen key event with its label.
    KeyClicked(String),
    /// Physical key press.
    KeyDown { key: String, modifiers: Modifiers },
    /// Server asked to clear the guess.
    Reset,
    /// Server patched the DOM; tiles may need repainting.
    Updated,
}

/// Keyboard widget bound to a tile surface and a server link.
pub struct KeyboardInput<T, L> {
    config: KeyboardConfig,
    guess: GuessBuffer,
    tiles: T,
    link: L,
}

impl<T: TileSurface, L: ServerLink> KeyboardInput<T, L> {
    pub fn new(config: KeyboardConfig, tiles: T, link: L) -> Self {
        Self { config, guess: GuessBuffer::new(), tiles, link }
    }

    /// Apply one input.
    pub fn update(&mut self, msg: KeyboardMsg) {
        match msg {
            KeyboardMsg::KeyClicked(label) => match Key::from_label(&label) {
                Some(key) => self.press(key),
                None => log::debug!("ignoring on-screen key {label:?}"),
            },
            KeyboardMsg::KeyDown { key, modifiers } => {
                if let Some(key) = Key::from_keydown(&key, modifiers) {
                    self.press(key);
                }
            }
            KeyboardMsg::Reset => self.reset(),
            KeyboardMsg::Updated => self.render(),
        }
    }

    /// Apply an already classified key.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Letter(ch) => {
                if self.guess.push(ch) {
                    self.render();
                }
            }
            Key::Backspace => {
                self.guess.pop();
                self.render();
            }
            Key::Enter => self.submit(),
        }
    }

    /// Clear the guess and redraw.
    pub fn reset(&mut self) {
        self.guess.clear();
        self.render();
    }

    /// Paint every tile from the current guess.
    pub fn render(&mut self) {
        for view in tile_views(&self.guess) {
            if let Err(err) = self.tiles.paint(&view) {
                if self.config.log_missing_tiles {
                    log::warn!("skipping tile {}: {err}", view.index);
                }
            }
        }
    }

    fn submit(&self) {
        let signal = ClientSignal::Submit { guess: self.guess.as_str().to_owned() };
        self.link.push(&self.config.submit_event, &signal);
    }

    pub fn guess(&self) -> &GuessBuffer {
        &self.guess
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn tiles(&self) -> &T {
        &self.tiles
    }

    pub fn link(&self) -> &L {
        &self.link
    }
}

impl<T: TileSurface, L: ServerLink> Hook for KeyboardInput<T, L> {
    fn activate(&mut self) {
        self.reset();
    }

    fn on_external_update(&mut self) {
        self.update(KeyboardMsg::Updated);
    }

    fn handle_signal(&mut self, signal: &ServerSignal) {
        if *signal == ServerSignal::Reset {
            self.update(KeyboardMsg::Reset);
        }
    }
}
