//! Page controllers — the stateful behaviours of the page.
//!
//! Each controller accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from the browser.
//! Controllers that own state keep it in `Cell`/`RefCell` and expose `&self`
//! methods, so they can be shared between event handlers through `Rc`.

pub mod footer_year;
pub mod gallery_filter;
pub mod load_scroll_resolver;
pub mod navigation_controller;
pub mod preference_store;
pub mod reveal;
pub mod theme_controller;
pub mod viewport_tracker;
pub mod widget_bootstrap;
