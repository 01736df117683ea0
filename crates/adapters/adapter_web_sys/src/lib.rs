//! # folio-adapter-web-sys
//!
//! Browser implementation of the page ports, on `web-sys` and `js-sys`.
//!
//! | Port | Type | Backed by |
//! |------|------|-----------|
//! | `ElementLookup` | [`WebDocument`] | `document.querySelector(All)` |
//! | `KeyValueStore` | [`LocalStorage`] | `window.localStorage` |
//! | `Viewport` | [`WindowViewport`] | `window.scrollY` / `window.scrollTo` |
//! | `PageLocation` | [`WindowLocation`] | `location.hash`, `history.replaceState` |
//! | `EventSource` | [`WindowEvents`] | `addEventListener` |
//! | `Scheduler` | [`TimeoutScheduler`] | `setTimeout` via `gloo-timers` |
//! | widget ports | [`widgets`] | Typed, AOS, Isotope, GLightbox, Swiper, `IntersectionObserver` |
//!
//! ## Dependency rule
//!
//! Depends on `folio-app` (port traits) and `folio-domain` only.

mod dom;
pub mod widgets;
mod window;

pub use dom::{WebDocument, WebElement};
pub use window::{
    JsClock, LocalStorage, TimeoutScheduler, WindowEvents, WindowLocation, WindowViewport,
};

use folio_app::ports::Platform;
use web_sys::{Document, Window};

use widgets::{WebAnimation, WebLayout, WebLightbox, WebObserver, WebSlider, WebTyped};

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
}

/// The current browser tab.
#[derive(Debug, Clone)]
pub struct WebPlatform {
    window: Window,
    document: Document,
    storage: LocalStorage,
    layout: WebLayout,
}

impl WebPlatform {
    /// # Errors
    ///
    /// Returns [`BrowserError`] when not running in a browser window.
    pub fn current() -> Result<Self, BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let document = window.document().ok_or(BrowserError::NoDocument)?;
        let storage = LocalStorage::new(&window);
        Ok(Self {
            window,
            document,
            storage,
            layout: WebLayout::default(),
        })
    }

    #[must_use]
    pub fn document(&self) -> WebDocument {
        WebDocument(self.document.clone())
    }
}

impl Platform for WebPlatform {
    type Element = WebElement;
    type Dom = WebDocument;
    type Storage = LocalStorage;
    type Viewport = WindowViewport;
    type Location = WindowLocation;
    type Events = WindowEvents;
    type Scheduler = TimeoutScheduler;
    type Clock = JsClock;
    type TypedText = WebTyped;
    type Animation = WebAnimation;
    type Layout = WebLayout;
    type Lightbox = WebLightbox;
    type Slider = WebSlider;
    type Observer = WebObserver;

    fn dom(&self) -> WebDocument {
        self.document()
    }

    fn storage(&self) -> LocalStorage {
        self.storage.clone()
    }

    fn viewport(&self) -> WindowViewport {
        WindowViewport(self.window.clone())
    }

    fn location(&self) -> WindowLocation {
        WindowLocation(self.window.clone())
    }

    fn events(&self) -> WindowEvents {
        WindowEvents {
            window: self.window.clone(),
            document: self.document.clone(),
        }
    }

    fn scheduler(&self) -> TimeoutScheduler {
        TimeoutScheduler
    }

    fn clock(&self) -> JsClock {
        JsClock
    }

    fn typed_text(&self) -> WebTyped {
        WebTyped
    }

    fn animation(&self) -> WebAnimation {
        WebAnimation
    }

    fn layout(&self) -> WebLayout {
        self.layout.clone()
    }

    fn lightbox(&self) -> WebLightbox {
        WebLightbox
    }

    fn slider(&self) -> WebSlider {
        WebSlider
    }

    fn observer(&self) -> WebObserver {
        WebObserver
    }
}
