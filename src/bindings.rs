//! `wasm-bindgen` surface used by the page's hook shims.
//!
//! ARCHITECTURE
//! ============
//! Each exported hook class wraps a [`Mounted`] widget. The JS shim creates
//! it from `mounted()`, forwards `updated()` and `handleEvent(...)`, and calls
//! `destroyed()` on teardown; dropping the class has the same effect. DOM
//! listeners are owned by the hook and removed when it goes away.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::config::KeyboardConfig;
use crate::countdown::{BrowserClock, Countdown, IntervalTicker};
use crate::hook::{Mounted, read_shared};
use crate::key::Modifiers;
use crate::keyboard::{KeyboardInput, KeyboardMsg};
use crate::logging;
use crate::session::{LocalStore, SessionBridge};
use crate::signal::{JsPushLink, ServerSignal};
use crate::theme;
use crate::tiles::DocumentTiles;

const CONFIG_ATTRIBUTE: &str = "data-config";

#[wasm_bindgen(start)]
pub fn start() {
    logging::init(logging::DEFAULT_LEVEL);
}

/// Change the console log level at runtime.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(logging::parse_level(Some(level)).to_level_filter());
}

/// Stylesheet with the tile animations.
#[wasm_bindgen(js_name = themeCss)]
pub fn theme_css() -> String {
    theme::theme_css()
}

/// Apply the stored (or system) dark mode preference. Returns it.
#[wasm_bindgen(js_name = applyDarkMode)]
pub fn apply_dark_mode() -> bool {
    let enabled = theme::read_preference();
    theme::apply(enabled);
    enabled
}

/// Flip dark mode and persist it. Returns the new state.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> bool {
    theme::toggle(theme::read_preference())
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsError::new(&message.to_string()).into()
}

/// Convert a JS payload into JSON via `JSON.stringify`.
fn payload_json(payload: &JsValue) -> Result<serde_json::Value, JsValue> {
    if payload.is_undefined() || payload.is_null() {
        return Ok(serde_json::Value::Null);
    }
    let text: String = js_sys::JSON::stringify(payload)?.into();
    serde_json::from_str(&text).map_err(js_error)
}

/// An event listener removed from its target on drop.
struct Listener {
    target: EventTarget,
    event: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn bind(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event: event.to_owned(), callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(&self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

/// Countdown hook: rewrites its element with the time to the next puzzle.
#[wasm_bindgen]
pub struct CountdownHook {
    mounted: Mounted<Countdown<BrowserClock, HtmlElement, IntervalTicker>>,
}

#[wasm_bindgen]
impl CountdownHook {
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement) -> CountdownHook {
        Self { mounted: Mounted::mount(Countdown::new(BrowserClock, el, IntervalTicker)) }
    }

    pub fn updated(&mut self) {
        self.mounted.updated();
    }

    pub fn destroyed(&mut self) {
        self.mounted.unmount();
    }
}

type DomKeyboard = Mounted<KeyboardInput<DocumentTiles, JsPushLink>>;

/// Run `f` on the keyboard unless it is already borrowed by an outer call.
fn with_keyboard(keyboard: &RefCell<DomKeyboard>, what: &str, f: impl FnOnce(&mut DomKeyboard)) {
    match keyboard.try_borrow_mut() {
        Ok(mut keyboard) => f(&mut keyboard),
        Err(_) => log::warn!("keyboard busy; dropped {what}"),
    }
}

fn dispatch(keyboard: &RefCell<DomKeyboard>, msg: KeyboardMsg) {
    let what = format!("{msg:?}");
    with_keyboard(keyboard, &what, |keyboard| {
        if keyboard.is_active() {
            keyboard.hook_mut().update(msg);
        }
    });
}

/// `detail.key` of an on-screen key event.
fn clicked_label(event: &Event) -> Option<String> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    js_sys::Reflect::get(&detail, &JsValue::from_str("key")).ok()?.as_string()
}

fn keydown_msg(event: &Event) -> Option<KeyboardMsg> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    let modifiers =
        Modifiers { shift: event.shift_key(), ctrl: event.ctrl_key(), alt: event.alt_key(), meta: event.meta_key() };
    Some(KeyboardMsg::KeyDown { key: event.key(), modifiers })
}

/// Keyboard hook: collects the guess and paints the input tiles.
#[wasm_bindgen]
pub struct KeyboardHook {
    keyboard: Rc<RefCell<DomKeyboard>>,
    reset_event: String,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl KeyboardHook {
    /// `push_event` is the host's `pushEvent(event, payload)`. `config` is a
    /// JSON [`KeyboardConfig`]; when absent the element's `data-config`
    /// attribute is used, then the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push_event: js_sys::Function, config: Option<String>) -> Result<KeyboardHook, JsValue> {
        let raw = config.or_else(|| el.get_attribute(CONFIG_ATTRIBUTE)).unwrap_or_default();
        let config = KeyboardConfig::from_json(&raw).map_err(js_error)?;
        let document = el.owner_document().ok_or_else(|| js_error("keyboard element is not in a document"))?;

        let input = KeyboardInput::new(config.clone(), DocumentTiles::new(document), JsPushLink::new(push_event));
        let keyboard = Rc::new(RefCell::new(Mounted::mount(input)));

        let mut listeners = Vec::new();
        let clicked = Rc::clone(&keyboard);
        listeners.push(Listener::bind(&el, &config.key_event, move |event| match clicked_label(&event) {
            Some(label) => dispatch(&clicked, KeyboardMsg::KeyClicked(label)),
            None => log::debug!("key event without detail.key"),
        })?);

        if config.bind_raw_keydown {
            let window = web_sys::window().ok_or_else(|| js_error("no window for keydown listener"))?;
            let pressed = Rc::clone(&keyboard);
            listeners.push(Listener::bind(&window, "keydown", move |event| {
                if let Some(msg) = keydown_msg(&event) {
                    dispatch(&pressed, msg);
                }
            })?);
        }

        Ok(Self { keyboard, reset_event: config.reset_event, listeners })
    }

    pub fn updated(&self) {
        dispatch(&self.keyboard, KeyboardMsg::Updated);
    }

    /// Forward a server-pushed event (the configured reset).
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&self, event: &str, payload: JsValue) -> Result<(), JsValue> {
        let signal =
            ServerSignal::decode(event, payload_json(&payload)?, Some(self.reset_event.as_str())).map_err(js_error)?;
        with_keyboard(&self.keyboard, event, |keyboard| keyboard.signal(&signal));
        Ok(())
    }

    pub fn destroyed(&mut self) {
        self.listeners.clear();
        with_keyboard(&self.keyboard, "destroy", Mounted::unmount);
    }

    /// Current guess, for debugging from the console.
    pub fn guess(&self) -> String {
        read_shared(&self.keyboard, "keyboard", |keyboard| keyboard.hook().guess().as_str().to_owned())
    }
}

/// Session hook: applies `session:store` / `session:clear` to local storage.
#[wasm_bindgen]
pub struct SessionHook {
    mounted: Mounted<SessionBridge<LocalStore>>,
}

#[wasm_bindgen]
impl SessionHook {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SessionHook, JsValue> {
        let store = LocalStore::open().map_err(js_error)?;
        Ok(Self { mounted: Mounted::mount(SessionBridge::new(store)) })
    }

    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, event: &str, payload: JsValue) -> Result<(), JsValue> {
        let signal = ServerSignal::decode(event, payload_json(&payload)?, None).map_err(js_error)?;
        self.mounted.signal(&signal);
        Ok(())
    }

    pub fn destroyed(&mut self) {
        self.mounted.unmount();
    }
}
