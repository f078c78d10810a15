//! Shared constants for the game widgets.

/// Number of letters in a guess (and tiles on screen).
pub const GUESS_LEN: usize = 5;

/// Prefix of the tile element ids; tile `n` is `input-tile-{n}`.
pub const TILE_ID_PREFIX: &str = "input-tile-";

/// Border class applied to a tile holding a letter.
pub const FILLED_BORDER_CLASS: &str = "border-gray-500";

/// Border class applied to an empty tile.
pub const EMPTY_BORDER_CLASS: &str = "border-gray-300";

/// Countdown refresh cadence.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Server signal that writes a `localStorage` entry.
pub const SESSION_STORE_EVENT: &str = "session:store";

/// Server signal that removes a `localStorage` entry.
pub const SESSION_CLEAR_EVENT: &str = "session:clear";
