//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the page controllers and the browser.
//! They are defined here (in `app`) so that both the controller layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is synchronous: the page runs on a single event loop and every
//! handler completes within one turn of it.

pub mod clock;
pub mod dom;
pub mod events;
pub mod platform;
pub mod scheduler;
pub mod storage;
pub mod viewport;
pub mod widgets;

pub use clock::Clock;
pub use dom::{DomElement, ElementLookup};
pub use events::{Click, EventSource};
pub use platform::Platform;
pub use scheduler::Scheduler;
pub use storage::KeyValueStore;
pub use viewport::{PageLocation, ScrollBehavior, Viewport};
pub use widgets::{GridLayout, Lightbox, ScrollAnimation, Slider, TypedText, VisibilityObserver};
