//! # folio-adapter-virtual
//!
//! In-memory browser for running the page controllers without a browser:
//! integration tests, and headless checks of a page's markup contract.
//!
//! ## Provided ports
//!
//! | Port | Type | Behaviour |
//! |------|------|-----------|
//! | `ElementLookup` | [`VirtualDocument`] | Element tree with a small CSS selector engine |
//! | `KeyValueStore` | [`VirtualStorage`] | In-memory, can be blocked |
//! | `Viewport` | [`VirtualViewport`] | Records programmatic scrolls |
//! | `PageLocation` | [`VirtualLocation`] | Fragment, history replacements, scroll restoration |
//! | `EventSource` | [`VirtualEvents`] | Caller-dispatched scroll, load and bubbling clicks |
//! | `Scheduler` | [`VirtualScheduler`] | Virtual time, advanced by the caller |
//! | widget ports | [`widgets`] | Recorders; libraries can be unloaded |
//!
//! ## Dependency rule
//!
//! Depends on `folio-app` (port traits) and `folio-domain` only.

mod browser;
mod document;
mod selector;
pub mod widgets;

pub use browser::{
    ScrollRecord, ScrollRestoration, VirtualClock, VirtualEvents, VirtualLocation,
    VirtualScheduler, VirtualStorage, VirtualViewport,
};
pub use document::{VirtualDocument, VirtualElement};
pub use selector::SelectorError;

use folio_app::ports::{Platform, Viewport};
use folio_domain::time::Timestamp;

use widgets::{
    Scripts, VirtualAnimation, VirtualLayout, VirtualLightbox, VirtualObserver, VirtualSlider,
    VirtualTyped,
};

/// Height of the virtual window, used when scanning for visible elements.
pub const WINDOW_HEIGHT: f64 = 800.0;

/// A browser tab: one document and the window around it.
///
/// Fields are shared handles; cloning the platform shares the same page.
#[derive(Clone)]
pub struct VirtualPlatform {
    pub document: VirtualDocument,
    pub storage: VirtualStorage,
    pub viewport: VirtualViewport,
    pub location: VirtualLocation,
    pub events: VirtualEvents,
    pub scheduler: VirtualScheduler,
    pub clock: VirtualClock,
    pub scripts: Scripts,
    pub typed: VirtualTyped,
    pub animation: VirtualAnimation,
    pub layout: VirtualLayout,
    pub lightbox: VirtualLightbox,
    pub slider: VirtualSlider,
    pub observer: VirtualObserver,
}

impl Default for VirtualPlatform {
    fn default() -> Self {
        let scripts = Scripts::default();
        Self {
            document: VirtualDocument::new(),
            storage: VirtualStorage::default(),
            viewport: VirtualViewport::default(),
            location: VirtualLocation::default(),
            events: VirtualEvents::default(),
            scheduler: VirtualScheduler::default(),
            clock: VirtualClock::default(),
            typed: VirtualTyped::new(scripts.clone()),
            animation: VirtualAnimation::new(scripts.clone()),
            layout: VirtualLayout::new(scripts.clone()),
            lightbox: VirtualLightbox::new(scripts.clone()),
            slider: VirtualSlider::new(scripts.clone()),
            observer: VirtualObserver::new(scripts.clone()),
            scripts,
        }
    }
}

impl VirtualPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the page at a URL carrying `hash`.
    #[must_use]
    pub fn with_hash(self, hash: &str) -> Self {
        Self {
            location: VirtualLocation::with_hash(hash),
            ..self
        }
    }

    #[must_use]
    pub fn with_storage(self, storage: VirtualStorage) -> Self {
        Self { storage, ..self }
    }

    #[must_use]
    pub fn with_time(self, now: Timestamp) -> Self {
        self.clock.set(now);
        self
    }

    /// Scroll the window as the user would, then fire `scroll` and let the
    /// visibility observer look at the new viewport.
    pub fn user_scroll(&self, y: f64) {
        self.viewport.set_scroll_y(y);
        self.events.dispatch_scroll();
        self.observer.scan(self.viewport.scroll_y(), WINDOW_HEIGHT);
    }

    /// Fire `load`, as the browser does once every resource is in.
    pub fn finish_loading(&self) {
        self.events.dispatch_load();
    }
}

impl Platform for VirtualPlatform {
    type Element = VirtualElement;
    type Dom = VirtualDocument;
    type Storage = VirtualStorage;
    type Viewport = VirtualViewport;
    type Location = VirtualLocation;
    type Events = VirtualEvents;
    type Scheduler = VirtualScheduler;
    type Clock = VirtualClock;
    type TypedText = VirtualTyped;
    type Animation = VirtualAnimation;
    type Layout = VirtualLayout;
    type Lightbox = VirtualLightbox;
    type Slider = VirtualSlider;
    type Observer = VirtualObserver;

    fn dom(&self) -> VirtualDocument {
        self.document.clone()
    }

    fn storage(&self) -> VirtualStorage {
        self.storage.clone()
    }

    fn viewport(&self) -> VirtualViewport {
        self.viewport.clone()
    }

    fn location(&self) -> VirtualLocation {
        self.location.clone()
    }

    fn events(&self) -> VirtualEvents {
        self.events.clone()
    }

    fn scheduler(&self) -> VirtualScheduler {
        self.scheduler.clone()
    }

    fn clock(&self) -> VirtualClock {
        self.clock.clone()
    }

    fn typed_text(&self) -> VirtualTyped {
        self.typed.clone()
    }

    fn animation(&self) -> VirtualAnimation {
        self.animation.clone()
    }

    fn layout(&self) -> VirtualLayout {
        self.layout.clone()
    }

    fn lightbox(&self) -> VirtualLightbox {
        self.lightbox.clone()
    }

    fn slider(&self) -> VirtualSlider {
        self.slider.clone()
    }

    fn observer(&self) -> VirtualObserver {
        self.observer.clone()
    }
}
