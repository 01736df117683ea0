//! Static options for the external visual widgets.
//!
//! Each struct deserializes from `snake_case` configuration and serializes to
//! the `camelCase` option objects the JavaScript libraries expect.

use serde::{Deserialize, Serialize};

/// Global names of the widget libraries, as reported in errors.
pub mod library {
    pub const TYPED: &str = "Typed";
    pub const ANIMATION: &str = "AOS";
    pub const LAYOUT: &str = "Isotope";
    pub const LIGHTBOX: &str = "GLightbox";
    pub const SLIDER: &str = "Swiper";
    pub const OBSERVER: &str = "IntersectionObserver";
}

/// Typed-text hero effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct TypedOptions {
    /// Phrases to cycle through; read from the page, never from configuration.
    #[serde(skip_deserializing)]
    pub strings: Vec<String>,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
}

impl Default for TypedOptions {
    fn default() -> Self {
        Self {
            strings: Vec::new(),
            looped: true,
            type_speed: 100,
            back_speed: 50,
            back_delay: 2000,
        }
    }
}

impl TypedOptions {
    /// Copy of these options cycling through `strings`.
    #[must_use]
    pub fn with_strings(&self, strings: Vec<String>) -> Self {
        Self {
            strings,
            ..self.clone()
        }
    }
}

/// Split a `data-typed-items` attribute into phrases.
///
/// Entries are comma separated and trimmed; empty entries are dropped.
#[must_use]
pub fn parse_typed_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Animate-on-scroll library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct AnimationOptions {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
    pub mirror: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: "ease-in-out".to_string(),
            once: true,
            mirror: false,
        }
    }
}

/// Masonry/grid layout over the gallery items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct LayoutOptions {
    pub item_selector: String,
    pub layout_mode: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            item_selector: ".portfolio-item".to_string(),
            layout_mode: "fitRows".to_string(),
        }
    }
}

/// Lightbox over gallery links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct LightboxOptions {
    pub selector: String,
}

impl Default for LightboxOptions {
    fn default() -> Self {
        Self {
            selector: ".portfolio-lightbox".to_string(),
        }
    }
}

/// Carousel on project detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SliderOptions {
    /// Anchor element; not forwarded to the library.
    #[serde(skip_serializing)]
    pub selector: String,
    pub speed: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: SliderAutoplay,
    pub pagination: SliderPagination,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            selector: ".portfolio-details-slider".to_string(),
            speed: 400,
            looped: true,
            autoplay: SliderAutoplay::default(),
            pagination: SliderPagination::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SliderAutoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

impl Default for SliderAutoplay {
    fn default() -> Self {
        Self {
            delay: 5000,
            disable_on_interaction: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SliderPagination {
    pub el: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub clickable: bool,
}

impl Default for SliderPagination {
    fn default() -> Self {
        Self {
            el: ".swiper-pagination".to_string(),
            kind: "bullets".to_string(),
            clickable: true,
        }
    }
}
