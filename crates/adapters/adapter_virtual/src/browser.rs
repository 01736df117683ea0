//! Virtual window — storage, viewport, location, event loop, timers, clock.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use folio_app::ports::{
    Click, Clock, DomElement, EventSource, KeyValueStore, PageLocation, ScrollBehavior, Scheduler,
    Viewport,
};
use folio_domain::error::StorageError;
use folio_domain::time::{Timestamp, from_epoch_millis};

use crate::document::VirtualElement;

// -- storage ---------------------------------------------------------------

/// `localStorage` stand-in.
#[derive(Debug, Clone, Default)]
pub struct VirtualStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    blocked: Rc<Cell<bool>>,
}

impl VirtualStorage {
    /// Storage that rejects every access, as in a locked-down private window.
    #[must_use]
    pub fn blocked() -> Self {
        let storage = Self::default();
        storage.blocked.set(true);
        storage
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for VirtualStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.blocked.get() {
            return Err(StorageError::ReadRejected {
                key: key.to_string(),
            });
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.blocked.get() {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}

// -- viewport --------------------------------------------------------------

/// A programmatic scroll request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRecord {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Window scroll position. Programmatic scrolls land instantly, whatever
/// their behaviour, and are recorded.
#[derive(Debug, Clone, Default)]
pub struct VirtualViewport {
    scroll_x: Rc<Cell<f64>>,
    scroll_y: Rc<Cell<f64>>,
    history: Rc<RefCell<Vec<ScrollRecord>>>,
}

impl VirtualViewport {
    /// Move the page as the user would, without recording a request.
    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_scroll_x(&self, x: f64) {
        self.scroll_x.set(x);
    }

    #[must_use]
    pub fn scroll_x(&self) -> f64 {
        self.scroll_x.get()
    }

    #[must_use]
    pub fn history(&self) -> Vec<ScrollRecord> {
        self.history.borrow().clone()
    }

    #[must_use]
    pub fn last_scroll(&self) -> Option<ScrollRecord> {
        self.history.borrow().last().copied()
    }
}

impl Viewport for VirtualViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.scroll_y.set(top);
        self.history.borrow_mut().push(ScrollRecord { top, behavior });
    }

    fn reset_to_origin(&self) {
        self.scroll_x.set(0.0);
        self.scroll_to(0.0, ScrollBehavior::Instant);
    }
}

// -- location --------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollRestoration {
    #[default]
    Auto,
    Manual,
}

/// URL fragment and history state.
#[derive(Debug, Clone, Default)]
pub struct VirtualLocation {
    hash: Rc<RefCell<String>>,
    restoration: Rc<Cell<ScrollRestoration>>,
    replacements: Rc<Cell<usize>>,
}

impl VirtualLocation {
    /// Location whose URL carries `hash` (`"#contact"`, or `""`).
    #[must_use]
    pub fn with_hash(hash: &str) -> Self {
        let location = Self::default();
        *location.hash.borrow_mut() = hash.to_string();
        location
    }

    #[must_use]
    pub fn current_hash(&self) -> String {
        self.hash.borrow().clone()
    }

    #[must_use]
    pub fn scroll_restoration(&self) -> ScrollRestoration {
        self.restoration.get()
    }

    /// Number of `history.replaceState` calls.
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl PageLocation for VirtualLocation {
    fn hash(&self) -> Option<String> {
        let hash = self.hash.borrow();
        (!hash.is_empty()).then(|| hash.clone())
    }

    fn strip_hash(&self) {
        self.hash.borrow_mut().clear();
        self.replacements.set(self.replacements.get() + 1);
    }

    fn disable_scroll_restoration(&self) {
        self.restoration.set(ScrollRestoration::Manual);
    }
}

// -- events ----------------------------------------------------------------

type ClickListener = (VirtualElement, Box<dyn FnMut(&mut Click)>);

#[derive(Default)]
struct Listeners {
    scroll: Vec<Box<dyn FnMut()>>,
    load: Vec<Box<dyn FnOnce()>>,
    loaded: bool,
    click: Vec<ClickListener>,
}

/// Window and element listeners, fired by the caller.
#[derive(Clone, Default)]
pub struct VirtualEvents(Rc<RefCell<Listeners>>);

impl VirtualEvents {
    pub fn dispatch_scroll(&self) {
        let mut handlers = std::mem::take(&mut self.0.borrow_mut().scroll);
        for handler in &mut handlers {
            handler();
        }
        let mut listeners = self.0.borrow_mut();
        handlers.append(&mut listeners.scroll);
        listeners.scroll = handlers;
    }

    /// Fire `load`. Later `on_load` registrations run immediately.
    pub fn dispatch_load(&self) {
        let handlers = {
            let mut listeners = self.0.borrow_mut();
            listeners.loaded = true;
            std::mem::take(&mut listeners.load)
        };
        for handler in handlers {
            handler();
        }
    }

    /// Click `target`. The click bubbles: listeners on `target` run first,
    /// then those on each ancestor.
    pub fn click(&self, target: &VirtualElement) -> Click {
        let mut path = vec![target.clone()];
        while let Some(parent) = path.last().and_then(VirtualElement::parent) {
            path.push(parent);
        }

        let mut listeners = std::mem::take(&mut self.0.borrow_mut().click);
        let mut click = Click::new();
        for element in &path {
            for (registered, handler) in &mut listeners {
                if registered.is_same(element) {
                    handler(&mut click);
                }
            }
        }
        let mut state = self.0.borrow_mut();
        listeners.append(&mut state.click);
        state.click = listeners;
        click
    }

    #[must_use]
    pub fn click_listeners(&self) -> usize {
        self.0.borrow().click.len()
    }

    #[must_use]
    pub fn scroll_listeners(&self) -> usize {
        self.0.borrow().scroll.len()
    }
}

impl EventSource for VirtualEvents {
    type Element = VirtualElement;

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        self.0.borrow_mut().scroll.push(handler);
    }

    fn on_load(&self, handler: Box<dyn FnOnce()>) {
        let mut listeners = self.0.borrow_mut();
        if listeners.loaded {
            drop(listeners);
            handler();
        } else {
            listeners.load.push(handler);
        }
    }

    fn on_click(&self, target: &VirtualElement, handler: Box<dyn FnMut(&mut Click)>) {
        self.0.borrow_mut().click.push((target.clone(), handler));
    }
}

// -- timers ----------------------------------------------------------------

struct Timer {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

/// Virtual `setTimeout`. Time only moves through [`advance`](Self::advance).
#[derive(Clone, Default)]
pub struct VirtualScheduler(Rc<RefCell<Timeline>>);

impl VirtualScheduler {
    /// Move time forward by `by`, running due timers in order.
    pub fn advance(&self, by: Duration) {
        let target = self.0.borrow().now + by;
        loop {
            let next = {
                let mut timeline = self.0.borrow_mut();
                let index = timeline
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.seq))
                    .map(|(index, _)| index);
                index.map(|index| {
                    let timer = timeline.timers.remove(index);
                    timeline.now = timer.due;
                    timer.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.0.borrow_mut().now = target;
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.0.borrow().timers.len()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.0.borrow().now
    }
}

impl Scheduler for VirtualScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut timeline = self.0.borrow_mut();
        let timer = Timer {
            due: timeline.now + delay,
            seq: timeline.next_seq,
            task,
        };
        timeline.next_seq += 1;
        timeline.timers.push(timer);
    }
}

// -- clock -----------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct VirtualClock(Rc<Cell<Timestamp>>);

impl Default for VirtualClock {
    fn default() -> Self {
        Self(Rc::new(Cell::new(from_epoch_millis(0.0))))
    }
}

impl VirtualClock {
    pub fn set(&self, now: Timestamp) {
        self.0.set(now);
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Timestamp {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reset_both_axes_when_returning_to_origin() {
        let viewport = VirtualViewport::default();
        viewport.set_scroll_x(120.0);
        viewport.set_scroll_y(900.0);

        viewport.reset_to_origin();

        assert!(viewport.scroll_x().abs() < f64::EPSILON);
        assert!(viewport.scroll_y().abs() < f64::EPSILON);
        assert_eq!(
            viewport.last_scroll(),
            Some(ScrollRecord {
                top: 0.0,
                behavior: ScrollBehavior::Instant,
            })
        );
    }

    #[test]
    fn should_reject_access_when_storage_blocked() {
        let storage = VirtualStorage::blocked();
        assert!(matches!(
            storage.get("folio-theme"),
            Err(StorageError::ReadRejected { .. })
        ));
        assert!(storage.set("folio-theme", "dark").is_err());
        assert_eq!(storage.value("folio-theme"), None);
    }

    #[test]
    fn should_report_empty_hash_as_none() {
        let location = VirtualLocation::with_hash("#about");
        assert_eq!(location.hash().as_deref(), Some("#about"));

        location.strip_hash();
        assert_eq!(location.hash(), None);
        assert_eq!(location.replacements(), 1);
    }

    #[test]
    fn should_bubble_click_to_ancestor_listeners() {
        let icon = VirtualElement::new("i");
        let button = VirtualElement::new("button").with_child(icon.clone());
        let events = VirtualEvents::default();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        events.on_click(
            &button,
            Box::new(move |click| {
                counter.set(counter.get() + 1);
                click.prevent_default();
            }),
        );

        assert!(events.click(&icon).default_prevented());
        assert!(!events.click(&VirtualElement::new("a")).default_prevented());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn should_run_late_load_listener_immediately() {
        let events = VirtualEvents::default();
        events.dispatch_load();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);

        events.on_load(Box::new(move || flag.set(true)));

        assert!(ran.get());
    }

    #[test]
    fn should_run_timers_in_due_order() {
        let scheduler = VirtualScheduler::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, ms) in [("late", 300), ("early", 100), ("same", 100)] {
            let order = Rc::clone(&order);
            scheduler.defer(
                Duration::from_millis(ms),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }

        scheduler.advance(Duration::from_millis(99));
        assert!(order.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*order.borrow(), vec!["early", "same"]);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*order.borrow(), vec!["early", "same", "late"]);
        assert_eq!(scheduler.elapsed(), Duration::from_millis(1100));
    }
}
