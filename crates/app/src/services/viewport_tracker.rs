//! Viewport tracker — derives navbar emphasis, back-to-top visibility, and
//! the active section from the scroll position.

use std::cell::Cell;
use std::rc::Rc;

use folio_domain::scroll::{NavbarEmphasis, ScrollSnapshot, ScrollThresholds};

use crate::ports::{DomElement, ElementLookup, Viewport};
use crate::selectors;
use crate::services::navigation_controller::NavigationController;
use crate::settings::NavbarSettings;

/// Scroll listener state.
///
/// [`on_scroll`](Self::on_scroll) runs on every scroll event, so it reads the
/// scroll position once per call, caches the static elements it restyles,
/// and skips navbar style writes when the emphasis did not change.
pub struct ViewportTracker<D: ElementLookup, V> {
    viewport: V,
    navigation: Rc<NavigationController<D, V>>,
    thresholds: ScrollThresholds,
    navbar_styles: NavbarSettings,
    navbar: Option<D::Element>,
    back_to_top: Option<D::Element>,
    emphasis: Cell<Option<NavbarEmphasis>>,
}

impl<D, V> ViewportTracker<D, V>
where
    D: ElementLookup,
    V: Viewport,
{
    pub fn new(
        dom: &D,
        viewport: V,
        navigation: Rc<NavigationController<D, V>>,
        thresholds: ScrollThresholds,
        navbar_styles: NavbarSettings,
    ) -> Self {
        Self {
            viewport,
            navigation,
            thresholds,
            navbar_styles,
            navbar: dom.find(selectors::NAVBAR),
            back_to_top: dom.find(selectors::BACK_TO_TOP),
            emphasis: Cell::new(None),
        }
    }

    /// Recompute everything derived from the current scroll position.
    pub fn on_scroll(&self) -> ScrollSnapshot {
        let snapshot = ScrollSnapshot::capture(self.viewport.scroll_y(), &self.thresholds);

        self.apply_navbar(snapshot.navbar);
        if let Some(button) = &self.back_to_top {
            button.set_class(selectors::ACTIVE_CLASS, snapshot.back_to_top_visible);
        }
        self.navigation.highlight_section(snapshot.probe);

        snapshot
    }

    fn apply_navbar(&self, emphasis: NavbarEmphasis) {
        if self.emphasis.replace(Some(emphasis)) == Some(emphasis) {
            return;
        }
        let Some(navbar) = &self.navbar else {
            return;
        };
        let styles = &self.navbar_styles;
        let (shadow, background) = match emphasis {
            NavbarEmphasis::Raised => (&styles.raised_shadow, &styles.raised_background),
            NavbarEmphasis::Flat => (&styles.flat_shadow, &styles.flat_background),
        };
        navbar.set_class(&styles.raised_class, emphasis == NavbarEmphasis::Raised);
        navbar.set_style("box-shadow", shadow);
        navbar.set_style("background", background);
    }
}
