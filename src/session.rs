//! Server-driven `localStorage` bridge.
//!
//! The server keeps a small amount of per-browser state (for example the
//! in-progress game) in local storage by pushing `session:store` and
//! `session:clear` signals. The bridge applies them and nothing else.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best effort. A failed write (quota exceeded, storage disabled)
//! is logged and dropped; there is no retry and nothing is reported back.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use crate::hook::Hook;
use crate::signal::ServerSignal;

/// Error from the underlying key/value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Local storage is not available in this context.
    #[error("local storage is unavailable")]
    Unavailable,
    /// The store rejected the operation.
    #[error("storage {op} failed for {key}: {message}")]
    Rejected { op: &'static str, key: String, message: String },
}

/// Minimal string key/value store.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store rejects the removal.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// In-memory store for server rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }
}

/// The browser's `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] outside a window or when the
    /// browser denies storage access.
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
fn rejected(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected { op, key: key.to_owned(), message: format!("{err:?}") }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|err| rejected("set", key, &err))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|err| rejected("remove", key, &err))
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| rejected("get", key, &err))
    }
}

/// Applies session signals to a store.
pub struct SessionBridge<S> {
    store: S,
}

impl<S: KeyValueStore> SessionBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write `data` under `key`, replacing any previous value.
    pub fn store(&mut self, key: &str, data: &str) {
        if let Err(err) = self.store.set_item(key, data) {
            log::error!("session store dropped: {err}");
        }
    }

    /// Remove `key`; absent keys are fine.
    pub fn clear(&mut self, key: &str) {
        if let Err(err) = self.store.remove_item(key) {
            log::error!("session clear dropped: {err}");
        }
    }

    pub fn backing_store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> Hook for SessionBridge<S> {
    fn activate(&mut self) {}

    fn handle_signal(&mut self, signal: &ServerSignal) {
        match signal {
            ServerSignal::SessionStore { key, data } => self.store(key, data),
            ServerSignal::SessionClear { key } => self.clear(key),
            ServerSignal::Reset => {}
        }
    }
}
