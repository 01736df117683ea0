//! Page settings — tunables of the controllers.
//!
//! Every field has a default matching the stock portfolio template, so an
//! empty configuration is valid.

use serde::Deserialize;

use folio_domain::fragment::Fragment;
use folio_domain::scroll::ScrollThresholds;
use folio_domain::widget::{
    AnimationOptions, LayoutOptions, LightboxOptions, SliderOptions, TypedOptions,
};

/// All controller settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub theme: ThemeSettings,
    pub scroll: ScrollSettings,
    pub navbar: NavbarSettings,
    pub reveal: RevealSettings,
    pub widgets: WidgetSettings,
}

/// Theme persistence and toggle button.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Key of the persisted preference.
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: "folio-theme".to_string(),
        }
    }
}

/// Scroll tracking and load-time landing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    #[serde(flatten)]
    pub thresholds: ScrollThresholds,
    /// Header offset used when no `#header` element can be measured.
    pub header_offset: f64,
    /// Landing section, treated like "no hash".
    pub home_hash: String,
    /// Delay after the `load` event before the landing scroll.
    pub settle_delay_ms: u64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            thresholds: ScrollThresholds::default(),
            header_offset: 0.0,
            home_hash: "#hero".to_string(),
            settle_delay_ms: 100,
        }
    }
}

impl ScrollSettings {
    /// The home fragment. A blank home hash falls back to `#hero`.
    #[must_use]
    pub fn home(&self) -> Fragment {
        Fragment::parse(&self.home_hash).unwrap_or_else(Fragment::hero)
    }
}

/// Navbar emphasis styles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavbarSettings {
    pub raised_class: String,
    pub raised_shadow: String,
    pub raised_background: String,
    pub flat_shadow: String,
    pub flat_background: String,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        Self {
            raised_class: "navbar-scrolled".to_string(),
            raised_shadow: "0 10px 30px -10px rgba(0, 0, 0, 0.5)".to_string(),
            raised_background: "rgba(15, 23, 42, 0.95)".to_string(),
            flat_shadow: "none".to_string(),
            flat_background: "rgba(15, 23, 42, 0.85)".to_string(),
        }
    }
}

/// One-shot fade-in of content blocks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub selector: String,
    pub visible_class: String,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            selector: ".fade-in-up".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
        }
    }
}

/// Options forwarded to the external widgets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub typed: TypedOptions,
    pub animation: AnimationOptions,
    pub layout: LayoutOptions,
    pub lightbox: LightboxOptions,
    pub slider: SliderOptions,
}
