//! Window-level ports: storage, scrolling, location, events, timers, clock.

use std::time::Duration;

use folio_app::ports::{
    Click, Clock, EventSource, KeyValueStore, PageLocation, ScrollBehavior, Scheduler, Viewport,
};
use folio_domain::error::StorageError;
use folio_domain::time::{Timestamp, from_epoch_millis};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, ScrollRestoration, ScrollToOptions, Storage, Window};

use crate::dom::WebElement;

/// `window.localStorage`. Resolved once; browsers can refuse access entirely
/// (privacy settings, sandboxed frames).
#[derive(Debug, Clone)]
pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, preferences will not persist");
        }
        Self(storage)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.0.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::ReadRejected {
            key: key.to_string(),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.0.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }
}

#[derive(Debug, Clone)]
pub struct WindowViewport(pub Window);

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.0.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.0.scroll_to_with_scroll_to_options(&options);
    }

    fn reset_to_origin(&self) {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Instant);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Debug, Clone)]
pub struct WindowLocation(pub Window);

impl PageLocation for WindowLocation {
    fn hash(&self) -> Option<String> {
        self.0
            .location()
            .hash()
            .ok()
            .filter(|hash| !hash.is_empty())
    }

    fn strip_hash(&self) {
        let location = self.0.location();
        let url = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        let result = self.0.history().and_then(|history| {
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
        });
        if let Err(err) = result {
            tracing::warn!(error = ?err, "could not strip the URL fragment");
        }
    }

    fn disable_scroll_restoration(&self) {
        let result = self
            .0
            .history()
            .and_then(|history| history.set_scroll_restoration(ScrollRestoration::Manual));
        if let Err(err) = result {
            tracing::warn!(error = ?err, "could not disable scroll restoration");
        }
    }
}

/// Listeners on `window` and page elements.
///
/// Listeners stay attached for the life of the page; their closures are
/// leaked with `forget`.
#[derive(Debug, Clone)]
pub struct WindowEvents {
    pub window: Window,
    pub document: Document,
}

impl EventSource for WindowEvents {
    type Element = WebElement;

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        let closure = Closure::wrap(handler);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "scroll listener not attached");
        }
        closure.forget();
    }

    fn on_load(&self, handler: Box<dyn FnOnce()>) {
        if self.document.ready_state() == "complete" {
            handler();
            return;
        }
        let callback = Closure::once_into_js(move || handler());
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("load", callback.unchecked_ref())
        {
            tracing::warn!(error = ?err, "load listener not attached");
        }
    }

    fn on_click(&self, target: &WebElement, mut handler: Box<dyn FnMut(&mut Click)>) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let mut click = Click::new();
            handler(&mut click);
            if click.default_prevented() {
                event.prevent_default();
            }
        });
        if let Err(err) = target
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?err, "click listener not attached");
        }
        closure.forget();
    }
}

/// `setTimeout`, through `gloo-timers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

/// `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now(&self) -> Timestamp {
        from_epoch_millis(js_sys::Date::now())
    }
}
