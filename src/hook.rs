//! Hook lifecycle shared by every widget.
//!
//! The hosting page mounts a widget when its element appears, notifies it
//! after each server-driven DOM patch, forwards pushed signals, and destroys
//! it when the element goes away. [`Mounted`] ties the last step to scope so
//! a dropped widget always releases its timers and listeners.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

use std::cell::RefCell;

use crate::signal::ServerSignal;

/// A widget driven by the page lifecycle.
pub trait Hook {
    /// Called once when the element is attached.
    fn activate(&mut self);

    /// Called after the server patched the DOM around the element.
    fn on_external_update(&mut self) {}

    /// Called for every signal the server pushes to this hook.
    fn handle_signal(&mut self, _signal: &ServerSignal) {}

    /// Called once when the element is detached.
    fn deactivate(&mut self) {}
}

/// Scoped owner of an activated hook.
///
/// Activation happens in [`Mounted::mount`]; deactivation happens exactly
/// once, either through [`Mounted::unmount`] or on drop.
pub struct Mounted<H: Hook> {
    hook: H,
    active: bool,
}

impl<H: Hook> Mounted<H> {
    /// Activate `hook` and take ownership of it.
    pub fn mount(mut hook: H) -> Self {
        hook.activate();
        Self { hook, active: true }
    }

    /// Forward a post-patch notification.
    pub fn updated(&mut self) {
        if self.active {
            self.hook.on_external_update();
        }
    }

    /// Forward a server signal.
    pub fn signal(&mut self, signal: &ServerSignal) {
        if self.active {
            self.hook.handle_signal(signal);
        }
    }

    /// Shared access to the hook.
    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Mutable access to the hook.
    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    /// Whether the hook is still active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivate now, ahead of drop.
    pub fn unmount(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.active {
            self.active = false;
            self.hook.deactivate();
        }
    }
}

impl<H: Hook> Drop for Mounted<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Read a shared widget unless an outer call is mutating it, in which case
/// the read is logged and `R::default()` returned.
pub fn read_shared<T, R: Default>(shared: &RefCell<T>, what: &str, read: impl FnOnce(&T) -> R) -> R {
    match shared.try_borrow() {
        Ok(value) => read(&value),
        Err(_) => {
            log::warn!("{what} busy; read skipped");
            R::default()
        }
    }
}
