//! Markup contract — selectors and class names the page is expected to use.

/// In-page links that scroll instead of navigating.
pub const SCROLL_LINK: &str = ".scrollto";
/// Navigation links whose `active` class tracks the visible section.
pub const NAV_LINK: &str = "#navbar .scrollto";
/// Navbar restyled on scroll, marked by id or by class.
pub const NAVBAR: &str = "#navbar, .navbar";
/// Fixed header whose height offsets programmatic scrolls.
pub const HEADER: &str = "#header";
pub const MOBILE_NAV_TOGGLE: &str = ".mobile-nav-toggle";
pub const BACK_TO_TOP: &str = ".back-to-top";
pub const THEME_TOGGLE: &str = "#theme-toggle";
pub const THEME_ICON: &str = "i";
pub const PORTFOLIO_CONTAINER: &str = ".portfolio-container";
/// Filter controls; items without a `data-filter` are not controls.
pub const PORTFOLIO_FILTER: &str = "#portfolio-flters li[data-filter]";
pub const TYPED: &str = ".typed";
pub const CURRENT_YEAR: &str = "#current-year";

pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_ACTIVE_CLASS: &str = "filter-active";
pub const MOBILE_NAV_ACTIVE_CLASS: &str = "mobile-nav-active";

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const FILTER_ATTRIBUTE: &str = "data-filter";
pub const TYPED_ITEMS_ATTRIBUTE: &str = "data-typed-items";
