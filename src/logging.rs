//! Console logging setup.
//!
//! Widgets log through the `log` facade. In the browser the records go to the
//! devtools console via `console_log`, and panics are reported with a stack
//! trace instead of an opaque `unreachable` trap.

use log::Level;

/// Level used when the host does not ask for one.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Parse a level name (`"debug"`, `"WARN"`, ...), falling back to
/// [`DEFAULT_LEVEL`].
#[must_use]
pub fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|name| name.trim().parse::<Level>().ok()).unwrap_or(DEFAULT_LEVEL)
}

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init(level: Level) {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(level) {
            // A logger is already installed; keep it.
            log::debug!("console logger not installed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::set_max_level(level.to_level_filter());
    }
}
