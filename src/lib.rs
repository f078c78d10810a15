//! # wordle-hooks
//!
//! Client-side widgets for the daily word-guessing game, compiled to
//! WebAssembly and mounted by the server-rendered page.
//!
//! The crate owns three independent behaviors, each bound to one DOM element
//! and driven by the page's hook lifecycle: a countdown to the next UTC day,
//! the guess keyboard that renders into five tiles, and a bridge that lets
//! the server write to `localStorage`. All decision logic is plain Rust and
//! testable without a browser; the `hydrate` feature adds the `web-sys` glue.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`hook`] | Lifecycle trait and the scoped [`hook::Mounted`] owner |
//! | [`countdown`] | Time-until-midnight math and the ticking widget |
//! | [`key`] | Key classification for clicked and physical keys |
//! | [`guess`] | The bounded guess buffer |
//! | [`tiles`] | Tile view model and paint surfaces |
//! | [`keyboard`] | Keyboard input state machine |
//! | [`signal`] | Typed signals exchanged with the server |
//! | [`session`] | `localStorage` bridge |
//! | [`config`] | Keyboard configuration |
//! | [`theme`] | Animation keyframes and dark mode |
//! | [`consts`] | Shared constants |
//! | [`logging`] | Console logger setup |

pub mod config;
pub mod consts;
pub mod countdown;
pub mod guess;
pub mod hook;
pub mod key;
pub mod keyboard;
pub mod logging;
pub mod session;
pub mod signal;
pub mod theme;
pub mod tiles;

#[cfg(feature = "hydrate")]
pub mod bindings;
