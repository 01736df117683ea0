//! Widget ports — the narrow contracts of the external visual libraries.
//!
//! The controllers never depend on how these libraries work internally;
//! they only initialise them and, for the layout widget, ask for a relayout.

use folio_domain::error::WidgetError;
use folio_domain::filter::FilterCategory;
use folio_domain::widget::{
    AnimationOptions, LayoutOptions, LightboxOptions, SliderOptions, TypedOptions,
};

/// Typed-text hero effect.
pub trait TypedText {
    type Element;

    /// Start cycling `options.strings` inside `target`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the library is missing or throws.
    fn start(&self, target: &Self::Element, options: &TypedOptions) -> Result<(), WidgetError>;
}

/// Animate-on-scroll library.
pub trait ScrollAnimation {
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the library is missing or throws.
    fn init(&self, options: &AnimationOptions) -> Result<(), WidgetError>;

    /// Recompute element positions so newly revealed elements animate.
    fn refresh(&self);
}

/// Masonry/grid layout managing the gallery items.
pub trait GridLayout {
    type Element;

    /// Take over layout of the items inside `container`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the library is missing or throws.
    fn mount(&self, container: &Self::Element, options: &LayoutOptions) -> Result<(), WidgetError>;

    /// Show only the items matching `filter`. `on_complete` runs once, when
    /// the resulting layout transition has finished.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the layout is not mounted or throws.
    fn arrange(
        &self,
        filter: &FilterCategory,
        on_complete: Box<dyn FnOnce()>,
    ) -> Result<(), WidgetError>;
}

/// Lightbox over gallery links.
pub trait Lightbox {
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the library is missing or throws.
    fn init(&self, options: &LightboxOptions) -> Result<(), WidgetError>;
}

/// Carousel on project detail pages.
pub trait Slider {
    type Element;

    /// # Errors
    ///
    /// Returns [`WidgetError`] when the library is missing or throws.
    fn init(&self, target: &Self::Element, options: &SliderOptions) -> Result<(), WidgetError>;
}

/// Notifies when elements first become visible in the viewport.
pub trait VisibilityObserver {
    type Element;

    /// Watch `targets`; call `on_visible` the first time each one intersects
    /// the viewport by at least `threshold` (0.0–1.0), then stop watching it.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] when the platform cannot observe visibility.
    fn observe_once(
        &self,
        targets: Vec<Self::Element>,
        threshold: f64,
        on_visible: Box<dyn FnMut(&Self::Element)>,
    ) -> Result<(), WidgetError>;
}
