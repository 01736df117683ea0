//! Widget bootstrap — one-time initialisation of the external widgets.

use folio_domain::error::WidgetError;
use folio_domain::widget::parse_typed_items;

use crate::ports::{DomElement, ElementLookup, Lightbox, ScrollAnimation, Slider, TypedText};
use crate::selectors;
use crate::settings::WidgetSettings;

/// Which widgets were started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub typed: bool,
    pub animation: bool,
    pub lightbox: bool,
    pub slider: bool,
}

/// Starts every widget whose anchor element is on the page.
///
/// Widgets are independent: a missing library or a throwing constructor is
/// logged and the remaining widgets still start.
pub struct WidgetBootstrap<T, A, L, S> {
    pub typed: T,
    pub animation: A,
    pub lightbox: L,
    pub slider: S,
}

impl<E, T, A, L, S> WidgetBootstrap<T, A, L, S>
where
    E: DomElement,
    T: TypedText<Element = E>,
    A: ScrollAnimation,
    L: Lightbox,
    S: Slider<Element = E>,
{
    pub fn run<D>(&self, dom: &D, settings: &WidgetSettings) -> BootstrapReport
    where
        D: ElementLookup<Element = E>,
    {
        let report = BootstrapReport {
            typed: self.start_typed(dom, settings),
            animation: started("animation", self.animation.init(&settings.animation)),
            lightbox: dom.find(&settings.lightbox.selector).is_some()
                && started("lightbox", self.lightbox.init(&settings.lightbox)),
            slider: dom.find(&settings.slider.selector).is_some_and(|target| {
                started("slider", self.slider.init(&target, &settings.slider))
            }),
        };
        tracing::debug!(?report, "widgets bootstrapped");
        report
    }

    /// The phrase list is forwarded as-is, even when empty; the library
    /// decides what an empty list means.
    fn start_typed<D>(&self, dom: &D, settings: &WidgetSettings) -> bool
    where
        D: ElementLookup<Element = E>,
    {
        let Some(target) = dom.find(selectors::TYPED) else {
            return false;
        };
        let strings = target
            .attribute(selectors::TYPED_ITEMS_ATTRIBUTE)
            .map(|raw| parse_typed_items(&raw))
            .unwrap_or_default();
        let options = settings.typed.with_strings(strings);
        started("typed", self.typed.start(&target, &options))
    }
}

fn started(widget: &'static str, result: Result<(), WidgetError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(widget, error = %err, "widget not started");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAnimation, FakeDom, FakeElement, FakeLightbox, FakeTyped, MissingSlider};

    fn bootstrap() -> WidgetBootstrap<FakeTyped, FakeAnimation, FakeLightbox, MissingSlider> {
        WidgetBootstrap {
            typed: FakeTyped::default(),
            animation: FakeAnimation::default(),
            lightbox: FakeLightbox::default(),
            slider: MissingSlider,
        }
    }

    #[test]
    fn should_start_typed_with_phrases_from_page() {
        let dom = FakeDom::new();
        dom.insert(
            selectors::TYPED,
            FakeElement::new().with_attribute(
                selectors::TYPED_ITEMS_ATTRIBUTE,
                "Designer, Developer, Photographer",
            ),
        );
        let widgets = bootstrap();

        let report = widgets.run(&dom, &WidgetSettings::default());

        assert!(report.typed);
        let started = widgets.typed.started.borrow();
        assert_eq!(started[0].strings, vec!["Designer", "Developer", "Photographer"]);
        assert_eq!(started[0].type_speed, 100);
    }

    #[test]
    fn should_forward_empty_phrase_list_to_library() {
        let dom = FakeDom::new();
        dom.insert(selectors::TYPED, FakeElement::new());
        let widgets = bootstrap();

        widgets.run(&dom, &WidgetSettings::default());

        assert!(widgets.typed.started.borrow()[0].strings.is_empty());
    }

    #[test]
    fn should_skip_widgets_whose_anchor_is_missing() {
        let widgets = bootstrap();

        let report = widgets.run(&FakeDom::new(), &WidgetSettings::default());

        assert_eq!(
            report,
            BootstrapReport {
                typed: false,
                animation: true,
                lightbox: false,
                slider: false,
            }
        );
        assert!(widgets.lightbox.selectors.borrow().is_empty());
        assert_eq!(widgets.animation.inits.get(), 1);
    }

    #[test]
    fn should_continue_when_one_library_is_missing() {
        let dom = FakeDom::new();
        dom.insert(".portfolio-lightbox", FakeElement::new());
        dom.insert(".portfolio-details-slider", FakeElement::new());
        let widgets = bootstrap();

        let report = widgets.run(&dom, &WidgetSettings::default());

        assert!(!report.slider);
        assert!(report.lightbox);
        assert_eq!(
            *widgets.lightbox.selectors.borrow(),
            vec![".portfolio-lightbox".to_string()]
        );
    }
}
