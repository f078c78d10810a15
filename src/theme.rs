//! Visual theme: tile animations and dark mode.
//!
//! Dark mode is class based: the `dark` class on `<html>` switches every
//! `dark:` utility on. The preference lives in `localStorage` and falls back
//! to `prefers-color-scheme`. The `flip` and `shake` animations are used by
//! the page when a row is revealed or a guess is rejected.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; without the
//! `hydrate` feature every DOM helper is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class on `<html>` that enables dark styles.
pub const DARK_MODE_CLASS: &str = "dark";

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "wordle_hooks_dark";

/// One step of a keyframe animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframeStep {
    /// Selector such as `"20%, 40%"`.
    pub offsets: &'static str,
    pub transform: &'static str,
}

/// A named keyframe animation and how it is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub name: &'static str,
    pub duration_ms: u32,
    pub easing: &'static str,
    pub steps: &'static [KeyframeStep],
}

/// Tile flip shown while a guessed row is revealed.
pub const FLIP: Animation = Animation {
    name: "flip",
    duration_ms: 800,
    easing: "ease-in-out",
    steps: &[KeyframeStep { offsets: "20%, 40%", transform: "rotateY(90deg)" }],
};

/// Row shake shown when the server rejects a guess.
pub const SHAKE: Animation = Animation {
    name: "shake",
    duration_ms: 500,
    easing: "ease-in-out",
    steps: &[
        KeyframeStep { offsets: "10%, 90%", transform: "translate3d(-1px, 0, 0)" },
        KeyframeStep { offsets: "20%, 80%", transform: "translate3d(2px, 0, 0)" },
        KeyframeStep { offsets: "30%, 50%, 70%", transform: "translate3d(-4px, 0, 0)" },
        KeyframeStep { offsets: "40%, 60%", transform: "translate3d(4px, 0, 0)" },
    ],
};

/// Every animation the page may reference.
pub const ANIMATIONS: [Animation; 2] = [SHAKE, FLIP];

impl Animation {
    /// Utility class that plays this animation.
    #[must_use]
    pub fn class(&self) -> String {
        format!("animate-{}", self.name)
    }

    /// CSS `animation` shorthand, e.g. `shake 0.5s ease-in-out`.
    #[must_use]
    pub fn shorthand(&self) -> String {
        let secs = f64::from(self.duration_ms) / 1000.0;
        format!("{} {secs}s {}", self.name, self.easing)
    }
}

/// Utility class for the animation called `name`, if it exists.
#[must_use]
pub fn animation_class(name: &str) -> Option<String> {
    ANIMATIONS.iter().find(|a| a.name == name).map(Animation::class)
}

/// Stylesheet with the `@keyframes` blocks and their utility classes.
#[must_use]
pub fn theme_css() -> String {
    let mut css = String::new();
    for animation in &ANIMATIONS {
        css.push_str(&format!("@keyframes {} {{", animation.name));
        for step in animation.steps {
            css.push_str(&format!(" {} {{ transform: {}; }}", step.offsets, step.transform));
        }
        css.push_str(" }\n");
        css.push_str(&format!(".{} {{ animation: {}; }}\n", animation.class(), animation.shorthand()));
    }
    css
}

/// Read the dark mode preference.
///
/// Returns the stored choice if there is one, otherwise whether the system
/// prefers a dark color scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        matches!(window.match_media("(prefers-color-scheme: dark)"), Ok(Some(mq)) if mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the dark class on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let classes = el.class_list();
        let result = if enabled { classes.add_1(DARK_MODE_CLASS) } else { classes.remove_1(DARK_MODE_CLASS) };
        if let Err(err) = result {
            log::warn!("failed to toggle dark class: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("dark mode {enabled} not applied without a document");
    }
}

/// Flip dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                log::warn!("failed to persist dark mode: {err:?}");
            }
        }
    }
    next
}
