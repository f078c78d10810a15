//! Keyboard widget configuration.
//!
//! The page passes configuration as a JSON string (typically a `data-config`
//! attribute on the hook element). Missing fields fall back to the defaults
//! below, so `{}` is a valid configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_KEY_EVENT: &str = "app:keyClicked";
pub const DEFAULT_RESET_EVENT: &str = "app:resetGuess";
pub const DEFAULT_SUBMIT_EVENT: &str = "submit";

/// Error parsing a configuration string.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid keyboard config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("keyboard config field `{0}` must not be empty")]
    EmptyEventName(&'static str),
}

/// How a keyboard widget is wired to the page.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardConfig {
    /// Custom DOM event dispatched by the on-screen keyboard; `detail.key`
    /// carries the key label.
    pub key_event: String,
    /// Server signal that clears the guess.
    pub reset_event: String,
    /// Event pushed to the server when Enter is pressed.
    pub submit_event: String,
    /// Also listen to physical `keydown` events on the window.
    pub bind_raw_keydown: bool,
    /// Log tiles that are missing from the page while rendering.
    pub log_missing_tiles: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            key_event: DEFAULT_KEY_EVENT.to_owned(),
            reset_event: DEFAULT_RESET_EVENT.to_owned(),
            submit_event: DEFAULT_SUBMIT_EVENT.to_owned(),
            bind_raw_keydown: true,
            log_missing_tiles: true,
        }
    }
}

impl KeyboardConfig {
    /// Wiring for pages that only use the on-screen keyboard: short event
    /// names, no physical key listener, missing tiles skipped silently.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            key_event: "keyClicked".to_owned(),
            reset_event: "reset".to_owned(),
            submit_event: DEFAULT_SUBMIT_EVENT.to_owned(),
            bind_raw_keydown: false,
            log_missing_tiles: false,
        }
    }

    /// Parse a JSON configuration. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and [`ConfigError::EmptyEventName`] when an event name is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("key_event", &self.key_event),
            ("reset_event", &self.reset_event),
            ("submit_event", &self.submit_event),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyEventName(field));
            }
        }
        Ok(())
    }
}
