//! Scroll snapshot — everything derived from a single scroll position.

use serde::Deserialize;

/// Pixel thresholds applied to the vertical scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollThresholds {
    /// The navbar is raised once the page scrolls strictly past this.
    pub navbar_raise: f64,
    /// The back-to-top button shows once the page scrolls strictly past this.
    pub back_to_top: f64,
    /// Added to the scroll position before testing section containment.
    pub probe_offset: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            navbar_raise: 50.0,
            back_to_top: 100.0,
            probe_offset: 200.0,
        }
    }
}

/// Visual emphasis of the fixed navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarEmphasis {
    /// At the top of the page: translucent, no shadow.
    Flat,
    /// Scrolled: denser background and a drop shadow.
    Raised,
}

/// State derived from one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub navbar: NavbarEmphasis,
    pub back_to_top_visible: bool,
    /// Position tested against section ranges.
    pub probe: f64,
}

impl ScrollSnapshot {
    /// Derive the snapshot for `scroll_y`.
    #[must_use]
    pub fn capture(scroll_y: f64, thresholds: &ScrollThresholds) -> Self {
        let navbar = if scroll_y > thresholds.navbar_raise {
            NavbarEmphasis::Raised
        } else {
            NavbarEmphasis::Flat
        };
        Self {
            scroll_y,
            navbar,
            back_to_top_visible: scroll_y > thresholds.back_to_top,
            probe: scroll_y + thresholds.probe_offset,
        }
    }
}
