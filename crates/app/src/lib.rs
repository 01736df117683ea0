//! # folio-app
//!
//! Application layer — page controllers and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ElementLookup` / `DomElement` — querying and restyling the document
//!   - `KeyValueStore` — persisted preferences
//!   - `Viewport` / `PageLocation` — scroll position and URL fragment
//!   - `EventSource` / `Scheduler` / `Clock` — page events and timers
//!   - widget ports for the third-party scripts (typed text, scroll
//!     animation, grid layout, lightbox, slider, visibility observer)
//!   - `Platform` — one bundle of all of the above
//! - Provide the **controllers** that own the page's interaction state:
//!   theme, navigation and mobile menu, viewport tracking, load-time landing,
//!   gallery filter, widget bootstrap
//! - Wire them into a [`page::PageSession`] with the named event handlers
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `serde` for settings and `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod page;
pub mod ports;
pub mod selectors;
pub mod services;
pub mod settings;

#[cfg(test)]
mod testing;
