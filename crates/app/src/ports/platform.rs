//! Platform port — the full set of capabilities a page session runs on.

use super::{
    Clock, DomElement, ElementLookup, EventSource, GridLayout, KeyValueStore, Lightbox,
    PageLocation, ScrollAnimation, Scheduler, Slider, TypedText, Viewport, VisibilityObserver,
};

/// Bundle of port implementations for one environment (a browser tab, or an
/// in-memory page in tests).
///
/// Accessors hand out owned handles; implementations are expected to be
/// cheap clones sharing the same underlying page.
pub trait Platform {
    type Element: DomElement + 'static;
    type Dom: ElementLookup<Element = Self::Element> + Clone + 'static;
    type Storage: KeyValueStore + 'static;
    type Viewport: Viewport + Clone + 'static;
    type Location: PageLocation + 'static;
    type Events: EventSource<Element = Self::Element>;
    type Scheduler: Scheduler + 'static;
    type Clock: Clock;
    type TypedText: TypedText<Element = Self::Element>;
    type Animation: ScrollAnimation + Clone + 'static;
    type Layout: GridLayout<Element = Self::Element> + 'static;
    type Lightbox: Lightbox;
    type Slider: Slider<Element = Self::Element>;
    type Observer: VisibilityObserver<Element = Self::Element>;

    fn dom(&self) -> Self::Dom;
    fn storage(&self) -> Self::Storage;
    fn viewport(&self) -> Self::Viewport;
    fn location(&self) -> Self::Location;
    fn events(&self) -> Self::Events;
    fn scheduler(&self) -> Self::Scheduler;
    fn clock(&self) -> Self::Clock;
    fn typed_text(&self) -> Self::TypedText;
    fn animation(&self) -> Self::Animation;
    fn layout(&self) -> Self::Layout;
    fn lightbox(&self) -> Self::Lightbox;
    fn slider(&self) -> Self::Slider;
    fn observer(&self) -> Self::Observer;
}
