//! Navigation controller — in-page scrolling, active link highlighting, and
//! the mobile menu.

use std::cell::Cell;

use folio_domain::fragment::Fragment;
use folio_domain::menu::{MenuGlyph, MobileMenuState};
use folio_domain::section::{Section, active_section};

use crate::ports::{Click, DomElement, ElementLookup, ScrollBehavior, Viewport};
use crate::selectors;

/// A navigation link and the section it scrolls to.
#[derive(Debug, Clone)]
pub struct NavLink<E> {
    pub target: Fragment,
    pub element: E,
}

/// Owner of the mobile menu state and the navigation link set.
pub struct NavigationController<D: ElementLookup, V> {
    dom: D,
    viewport: V,
    links: Vec<NavLink<D::Element>>,
    body: Option<D::Element>,
    toggle: Option<D::Element>,
    menu: Cell<MobileMenuState>,
    header_offset: f64,
}

impl<D, V> NavigationController<D, V>
where
    D: ElementLookup,
    V: Viewport,
{
    /// Collect the navigation links once; they are static for the session.
    ///
    /// `header_offset` is used when the page has no `#header` to measure.
    pub fn new(dom: D, viewport: V, header_offset: f64) -> Self {
        let links: Vec<_> = dom
            .find_all(selectors::NAV_LINK)
            .into_iter()
            .filter_map(|element| {
                let target = Fragment::from_href(&element.attribute("href")?)?;
                Some(NavLink { target, element })
            })
            .collect();
        let body = dom.body();
        let toggle = dom.find(selectors::MOBILE_NAV_TOGGLE);
        tracing::debug!(links = links.len(), "navigation links collected");

        Self {
            dom,
            viewport,
            links,
            body,
            toggle,
            menu: Cell::new(MobileMenuState::Closed),
            header_offset,
        }
    }

    pub fn links(&self) -> &[NavLink<D::Element>] {
        &self.links
    }

    pub fn menu_state(&self) -> MobileMenuState {
        self.menu.get()
    }

    /// Smooth-scroll so the target's top sits just below the fixed header.
    ///
    /// Returns `false`, without scrolling, when no element has that id.
    pub fn scroll_to(&self, target: &Fragment) -> bool {
        let Some(element) = self.dom.find(&target.selector()) else {
            tracing::debug!(%target, "scroll target missing");
            return false;
        };
        let top = (element.offset_top() - self.header_offset()).max(0.0);
        self.viewport.scroll_to(top, ScrollBehavior::Smooth);
        true
    }

    pub fn scroll_to_top(&self) {
        self.viewport.scroll_to(0.0, ScrollBehavior::Smooth);
    }

    /// Handle a click on an in-page link.
    ///
    /// When the link's target exists, the browser's jump is suppressed, an
    /// open mobile menu is closed, and the page scrolls to the target.
    /// Otherwise the click is left to the browser.
    pub fn on_scroll_to_link_click(&self, link: &D::Element, click: &mut Click) {
        let Some(target) = link
            .attribute("href")
            .and_then(|href| Fragment::from_href(&href))
        else {
            return;
        };
        if self.dom.find(&target.selector()).is_none() {
            return;
        }

        click.prevent_default();
        if self.menu.get().is_open() {
            self.toggle_mobile_menu();
        }
        self.scroll_to(&target);
    }

    /// Open or close the mobile menu.
    pub fn toggle_mobile_menu(&self) -> MobileMenuState {
        let state = self.menu.get().toggled();
        self.menu.set(state);
        self.render_menu(state);
        tracing::debug!(open = state.is_open(), "mobile menu toggled");
        state
    }

    /// Mark active the link whose section contains `probe`, clear the others.
    ///
    /// Links whose target element is missing are skipped. Returns the index
    /// of the active link.
    pub fn highlight_section(&self, probe: f64) -> Option<usize> {
        let sections = self.links.iter().enumerate().filter_map(|(index, link)| {
            let element = self.dom.find(&link.target.selector())?;
            Some((
                index,
                Section::new(element.offset_top(), element.offset_height()),
            ))
        });
        let active = active_section(sections, probe);
        for (index, link) in self.links.iter().enumerate() {
            link.element
                .set_class(selectors::ACTIVE_CLASS, Some(index) == active);
        }
        active
    }

    /// Mark active exactly the links pointing at `target`.
    pub fn set_active(&self, target: &Fragment) {
        for link in &self.links {
            link.element
                .set_class(selectors::ACTIVE_CLASS, &link.target == target);
        }
    }

    fn header_offset(&self) -> f64 {
        self.dom
            .find(selectors::HEADER)
            .map_or(self.header_offset, |header| header.offset_height())
    }

    /// Body class and hamburger glyph are derived from the same state.
    fn render_menu(&self, state: MobileMenuState) {
        if let Some(body) = &self.body {
            body.set_class(selectors::MOBILE_NAV_ACTIVE_CLASS, state.is_open());
        }
        if let Some(toggle) = &self.toggle {
            for glyph in MenuGlyph::ALL {
                toggle.remove_class(glyph.class());
            }
            toggle.add_class(state.glyph().class());
        }
    }
}
