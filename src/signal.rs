//! Signals exchanged with the server.
//!
//! | Direction | Event | Payload |
//! |-----------|-------|---------|
//! | client → server | `submit` (configurable) | `{ "guess": string }` |
//! | server → client | reset (configurable name) | none |
//! | server → client | `session:store` | `{ "key", "data" }` |
//! | server → client | `session:clear` | `{ "key" }` |
//!
//! Event names only exist at the edges; inside the crate signals are enums.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use std::cell::RefCell;

use serde::Deserialize;

use crate::consts::{SESSION_CLEAR_EVENT, SESSION_STORE_EVENT};

/// Error decoding a pushed server signal.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// The event name is not one this crate handles.
    #[error("unknown server event: {0}")]
    UnknownEvent(String),
    /// The payload did not match the event's shape.
    #[error("invalid payload for {event}: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Signal sent from a widget to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientSignal {
    /// The player pressed Enter with this guess.
    Submit { guess: String },
}

impl ClientSignal {
    /// JSON payload sent alongside the event name.
    #[must_use]
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::Submit { guess } => serde_json::json!({ "guess": guess }),
        }
    }
}

/// Signal pushed by the server to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerSignal {
    /// Clear the guess and redraw the tiles.
    Reset,
    /// Write `data` under `key` in local storage.
    SessionStore { key: String, data: String },
    /// Remove `key` from local storage.
    SessionClear { key: String },
}

#[derive(Deserialize)]
struct StorePayload {
    key: String,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct ClearPayload {
    key: String,
}

impl ServerSignal {
    /// Decode a pushed event. `reset_event` is the name the keyboard
    /// widget was configured to treat as a reset; hooks without a reset
    /// pass `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::UnknownEvent`] for unhandled names and
    /// [`SignalError::Payload`] when the payload has the wrong shape.
    pub fn decode(event: &str, payload: serde_json::Value, reset_event: Option<&str>) -> Result<Self, SignalError> {
        let payload_err = |source| SignalError::Payload { event: event.to_owned(), source };
        match event {
            SESSION_STORE_EVENT => {
                let StorePayload { key, data } = serde_json::from_value(payload).map_err(payload_err)?;
                Ok(Self::SessionStore { key, data: storage_text(data) })
            }
            SESSION_CLEAR_EVENT => {
                let ClearPayload { key } = serde_json::from_value(payload).map_err(payload_err)?;
                Ok(Self::SessionClear { key })
            }
            name if Some(name) == reset_event => Ok(Self::Reset),
            other => Err(SignalError::UnknownEvent(other.to_owned())),
        }
    }
}

/// Strings are stored verbatim; any other JSON value as its JSON text.
fn storage_text(data: serde_json::Value) -> String {
    match data {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Outbound channel to the server.
pub trait ServerLink {
    fn push(&self, event: &str, signal: &ClientSignal);
}

/// Link that keeps every pushed signal. Used without a browser.
#[derive(Debug, Default)]
pub struct RecordingLink {
    sent: RefCell<Vec<(String, ClientSignal)>>,
}

impl RecordingLink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything pushed so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, ClientSignal)> {
        self.sent.borrow().clone()
    }
}

impl ServerLink for RecordingLink {
    fn push(&self, event: &str, signal: &ClientSignal) {
        self.sent.borrow_mut().push((event.to_owned(), signal.clone()));
    }
}

/// Link that calls the host page's `pushEvent(event, payload)`.
#[cfg(feature = "hydrate")]
pub struct JsPushLink {
    push_event: js_sys::Function,
}

#[cfg(feature = "hydrate")]
impl JsPushLink {
    pub fn new(push_event: js_sys::Function) -> Self {
        Self { push_event }
    }
}

#[cfg(feature = "hydrate")]
impl ServerLink for JsPushLink {
    fn push(&self, event: &str, signal: &ClientSignal) {
        use wasm_bindgen::JsValue;

        let payload = match js_sys::JSON::parse(&signal.payload().to_string()) {
            Ok(value) => value,
            Err(err) => {
                log::error!("failed to encode {event} payload: {err:?}");
                return;
            }
        };
        if let Err(err) = self.push_event.call2(&JsValue::NULL, &JsValue::from_str(event), &payload) {
            log::error!("pushEvent({event}) failed: {err:?}");
        }
    }
}
