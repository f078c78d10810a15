//! Countdown to the next puzzle.
//!
//! A new word unlocks at UTC midnight. The widget rewrites its element once a
//! second with the time left as `HH:MM:SS`; the interval lives exactly as long
//! as the widget is mounted.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

use crate::consts::TICK_INTERVAL_MS;
use crate::hook::Hook;

/// Wall-clock time of day in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl UtcTime {
    /// Build a time of day, or `None` when a field is out of range.
    ///
    /// A leap second (`60`) is folded into `59`.
    #[must_use]
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 60 {
            return None;
        }
        Some(Self { hour, minute, second: second.min(59) })
    }

    /// Like [`UtcTime::new`], but an out-of-range reading falls back to
    /// midnight with a warning.
    #[must_use]
    pub fn or_midnight(hour: u32, minute: u32, second: u32) -> Self {
        Self::new(hour, minute, second).unwrap_or_else(|| {
            log::warn!("clock reported {hour}:{minute}:{second}; using 00:00:00");
            Self { hour: 0, minute: 0, second: 0 }
        })
    }

    /// Time left until the next UTC midnight.
    #[must_use]
    pub fn until_midnight(self) -> Remaining {
        Remaining { hours: 23 - self.hour, minutes: 59 - self.minute, seconds: 59 - self.second }
    }
}

/// Time left until the next puzzle, rendered as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Formatted countdown text for `now`.
#[must_use]
pub fn countdown_text(now: UtcTime) -> String {
    now.until_midnight().to_string()
}

/// Source of the current UTC time of day.
pub trait UtcClock {
    fn now(&self) -> UtcTime;
}

/// Clock pinned to a fixed time. Used for server rendering and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub UtcTime);

impl UtcClock for FixedClock {
    fn now(&self) -> UtcTime {
        self.0
    }
}

/// Clock backed by the browser's `Date`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
impl UtcClock for BrowserClock {
    fn now(&self) -> UtcTime {
        let date = js_sys::Date::new_0();
        UtcTime::or_midnight(date.get_utc_hours(), date.get_utc_minutes(), date.get_utc_seconds())
    }
}

/// Element whose text the countdown rewrites.
pub trait TextSurface {
    fn set_text(&self, text: &str);
}

#[cfg(feature = "hydrate")]
impl TextSurface for web_sys::HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }
}

/// Callback run on every tick.
pub type TickFn = Box<dyn FnMut()>;

/// Schedules a repeating callback.
///
/// The returned handle owns the schedule: dropping it cancels the callback.
pub trait Ticker {
    type Handle;

    fn start(&self, interval_ms: u32, tick: TickFn) -> Self::Handle;
}

/// Ticker backed by `setInterval`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTicker;

#[cfg(feature = "hydrate")]
impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn start(&self, interval_ms: u32, tick: TickFn) -> Interval {
        Interval::new(interval_ms, tick)
    }
}

type TickSlot = Rc<RefCell<Option<TickFn>>>;

/// Ticker advanced by hand with [`ManualTicker::fire`]. Used without a
/// browser.
#[derive(Clone, Default)]
pub struct ManualTicker {
    started: Rc<RefCell<Vec<(u32, TickSlot)>>>,
}

/// Schedule started by a [`ManualTicker`]; dropping it disarms the callback.
pub struct ManualHandle {
    slot: TickSlot,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every live callback once. Returns how many ran.
    pub fn fire(&self) -> usize {
        let started = self.started.borrow();
        let mut fired = 0;
        for (_, slot) in started.iter() {
            if let Some(tick) = slot.borrow_mut().as_mut() {
                tick();
                fired += 1;
            }
        }
        fired
    }

    /// Schedules whose handle is still alive.
    #[must_use]
    pub fn live(&self) -> usize {
        self.started.borrow().iter().filter(|(_, slot)| slot.borrow().is_some()).count()
    }

    /// Interval of every schedule ever started, oldest first.
    #[must_use]
    pub fn intervals(&self) -> Vec<u32> {
        self.started.borrow().iter().map(|(ms, _)| *ms).collect()
    }
}

impl Ticker for ManualTicker {
    type Handle = ManualHandle;

    fn start(&self, interval_ms: u32, tick: TickFn) -> ManualHandle {
        let slot = Rc::new(RefCell::new(Some(tick)));
        self.started.borrow_mut().push((interval_ms, Rc::clone(&slot)));
        ManualHandle { slot }
    }
}

/// The ticking countdown widget.
pub struct Countdown<C, S, T: Ticker> {
    clock: Rc<C>,
    surface: Rc<S>,
    ticker: T,
    schedule: Option<T::Handle>,
}

impl<C: UtcClock + 'static, S: TextSurface + 'static, T: Ticker> Countdown<C, S, T> {
    pub fn new(clock: C, surface: S, ticker: T) -> Self {
        Self { clock: Rc::new(clock), surface: Rc::new(surface), ticker, schedule: None }
    }

    /// Write the current remaining time and return it.
    pub fn tick(&self) -> String {
        write_remaining(self.clock.as_ref(), self.surface.as_ref())
    }

    /// Whether the repeating timer is running.
    pub fn is_ticking(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn start_timer(&mut self) {
        // At most one schedule: cancel the old one before starting anew.
        self.schedule = None;
        let clock = Rc::clone(&self.clock);
        let surface = Rc::clone(&self.surface);
        let tick: TickFn = Box::new(move || {
            write_remaining(clock.as_ref(), surface.as_ref());
        });
        self.schedule = Some(self.ticker.start(TICK_INTERVAL_MS, tick));
    }

    fn stop_timer(&mut self) {
        self.schedule = None;
    }
}

fn write_remaining<C: UtcClock + ?Sized, S: TextSurface + ?Sized>(clock: &C, surface: &S) -> String {
    let text = countdown_text(clock.now());
    surface.set_text(&text);
    text
}

impl<C: UtcClock + 'static, S: TextSurface + 'static, T: Ticker> Hook for Countdown<C, S, T> {
    fn activate(&mut self) {
        self.tick();
        self.start_timer();
    }

    fn deactivate(&mut self) {
        self.stop_timer();
    }
}
