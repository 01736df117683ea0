//! Page session — every controller of one page load, wired to its events.
//!
//! [`PageSession::mount`] builds each controller once and registers the
//! named handlers below on the platform's [`EventSource`]. The handlers are
//! plain functions, so tests can drive them directly.

use std::rc::Rc;
use std::time::Duration;

use crate::ports::{
    Click, ElementLookup, EventSource, GridLayout, KeyValueStore, PageLocation, Platform,
    ScrollAnimation, Scheduler, Viewport,
};
use crate::selectors;
use crate::services::footer_year::render_copyright_year;
use crate::services::gallery_filter::GalleryFilterController;
use crate::services::load_scroll_resolver::LoadScrollResolver;
use crate::services::navigation_controller::NavigationController;
use crate::services::preference_store::PreferenceStore;
use crate::services::reveal::mount_reveal;
use crate::services::theme_controller::ThemeController;
use crate::services::viewport_tracker::ViewportTracker;
use crate::services::widget_bootstrap::{BootstrapReport, WidgetBootstrap};
use crate::settings::PageSettings;

pub type Theme<P> = ThemeController<<P as Platform>::Dom, <P as Platform>::Storage>;
pub type Navigation<P> = NavigationController<<P as Platform>::Dom, <P as Platform>::Viewport>;
pub type Tracker<P> = ViewportTracker<<P as Platform>::Dom, <P as Platform>::Viewport>;
pub type Resolver<P> = LoadScrollResolver<
    <P as Platform>::Dom,
    <P as Platform>::Viewport,
    <P as Platform>::Location,
    <P as Platform>::Scheduler,
>;
pub type Gallery<P> = GalleryFilterController<
    <P as Platform>::Element,
    <P as Platform>::Layout,
    <P as Platform>::Animation,
>;

/// Controllers of one page load.
pub struct PageSession<P: Platform> {
    pub theme: Rc<Theme<P>>,
    pub navigation: Rc<Navigation<P>>,
    pub tracker: Rc<Tracker<P>>,
    pub resolver: Rc<Resolver<P>>,
    pub gallery: Option<Rc<Gallery<P>>>,
    pub widgets: BootstrapReport,
    /// Number of elements waiting for their fade-in.
    pub reveal_targets: usize,
}

impl<P: Platform> PageSession<P> {
    /// Build every controller and attach the page handlers.
    ///
    /// Runs synchronously at startup: the theme and the landing reset are
    /// applied before the browser gets a chance to paint.
    pub fn mount(platform: &P, settings: &PageSettings) -> Self {
        let dom = platform.dom();
        let viewport = platform.viewport();

        let theme = Rc::new(ThemeController::new(
            dom.clone(),
            PreferenceStore::new(platform.storage(), settings.theme.storage_key.clone()),
        ));
        theme.initialize();

        let navigation = Rc::new(NavigationController::new(
            dom.clone(),
            viewport.clone(),
            settings.scroll.header_offset,
        ));

        let resolver = Rc::new(LoadScrollResolver::new(
            platform.location(),
            viewport.clone(),
            platform.scheduler(),
            Rc::clone(&navigation),
            settings.scroll.home(),
            Duration::from_millis(settings.scroll.settle_delay_ms),
        ));
        resolver.prepare();

        let tracker = Rc::new(ViewportTracker::new(
            &dom,
            viewport,
            Rc::clone(&navigation),
            settings.scroll.thresholds,
            settings.navbar.clone(),
        ));

        let gallery = GalleryFilterController::mount(
            &dom,
            platform.layout(),
            platform.animation(),
            &settings.widgets.layout,
        )
        .map(Rc::new);

        let widgets = WidgetBootstrap {
            typed: platform.typed_text(),
            animation: platform.animation(),
            lightbox: platform.lightbox(),
            slider: platform.slider(),
        }
        .run(&dom, &settings.widgets);
        let reveal_targets = mount_reveal(&dom, &platform.observer(), &settings.reveal);
        render_copyright_year(&dom, &platform.clock());

        let session = Self {
            theme,
            navigation,
            tracker,
            resolver,
            gallery,
            widgets,
            reveal_targets,
        };
        session.register(&platform.events(), &dom);
        tracing::info!("page session mounted");
        session
    }

    fn register(&self, events: &P::Events, dom: &P::Dom) {
        let tracker = Rc::clone(&self.tracker);
        events.on_scroll(Box::new(move || handle_scroll(&tracker)));

        let tracker = Rc::clone(&self.tracker);
        let resolver = Rc::clone(&self.resolver);
        events.on_load(Box::new(move || handle_load(&tracker, &resolver)));

        if let Some(button) = dom.find(selectors::THEME_TOGGLE) {
            let theme = Rc::clone(&self.theme);
            events.on_click(&button, Box::new(move |click| handle_theme_click(&theme, click)));
        }

        if let Some(toggle) = dom.find(selectors::MOBILE_NAV_TOGGLE) {
            let navigation = Rc::clone(&self.navigation);
            events.on_click(
                &toggle,
                Box::new(move |click| handle_menu_toggle_click(&navigation, click)),
            );
        }

        for link in dom.find_all(selectors::SCROLL_LINK) {
            let navigation = Rc::clone(&self.navigation);
            let target = link.clone();
            events.on_click(
                &link,
                Box::new(move |click| handle_scroll_link_click(&navigation, &target, click)),
            );
        }

        if let Some(button) = dom.find(selectors::BACK_TO_TOP) {
            let navigation = Rc::clone(&self.navigation);
            events.on_click(
                &button,
                Box::new(move |click| handle_back_to_top_click(&navigation, click)),
            );
        }

        if let Some(gallery) = &self.gallery {
            for control in gallery.controls() {
                let gallery = Rc::clone(gallery);
                let target = control.clone();
                events.on_click(
                    control,
                    Box::new(move |click| handle_filter_click(&gallery, &target, click)),
                );
            }
        }
    }
}

/// Window scroll.
pub fn handle_scroll<D, V>(tracker: &ViewportTracker<D, V>)
where
    D: ElementLookup,
    V: Viewport,
{
    tracker.on_scroll();
}

/// Window load: sync the scroll-derived state once, then queue the landing.
pub fn handle_load<D, V, L, S>(
    tracker: &ViewportTracker<D, V>,
    resolver: &Rc<LoadScrollResolver<D, V, L, S>>,
) where
    D: ElementLookup + 'static,
    V: Viewport + 'static,
    L: PageLocation + 'static,
    S: Scheduler + 'static,
{
    tracker.on_scroll();
    resolver.schedule_settle();
}

/// Theme toggle button.
pub fn handle_theme_click<D, S>(theme: &ThemeController<D, S>, click: &mut Click)
where
    D: ElementLookup,
    S: KeyValueStore,
{
    click.prevent_default();
    theme.toggle();
}

/// Hamburger button.
pub fn handle_menu_toggle_click<D, V>(navigation: &NavigationController<D, V>, click: &mut Click)
where
    D: ElementLookup,
    V: Viewport,
{
    click.prevent_default();
    navigation.toggle_mobile_menu();
}

/// Any `.scrollto` link.
pub fn handle_scroll_link_click<D, V>(
    navigation: &NavigationController<D, V>,
    link: &D::Element,
    click: &mut Click,
) where
    D: ElementLookup,
    V: Viewport,
{
    navigation.on_scroll_to_link_click(link, click);
}

/// Back-to-top button.
pub fn handle_back_to_top_click<D, V>(navigation: &NavigationController<D, V>, click: &mut Click)
where
    D: ElementLookup,
    V: Viewport,
{
    click.prevent_default();
    navigation.scroll_to_top();
}

/// Gallery filter control.
pub fn handle_filter_click<E, L, A>(
    gallery: &GalleryFilterController<E, L, A>,
    control: &E,
    click: &mut Click,
) where
    E: crate::ports::DomElement,
    L: GridLayout<Element = E>,
    A: ScrollAnimation + Clone + 'static,
{
    click.prevent_default();
    gallery.select_filter(control);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DomElement, ScrollBehavior};
    use crate::testing::{FakeElement, FakePlatform};
    use folio_domain::menu::MobileMenuState;
    use folio_domain::theme::ThemePreference;

    fn platform() -> FakePlatform {
        let platform = FakePlatform::with_hash("#about");
        let dom = &platform.dom;
        dom.insert(
            selectors::THEME_TOGGLE,
            FakeElement::new().with_child(selectors::THEME_ICON, FakeElement::new()),
        );
        dom.insert(selectors::MOBILE_NAV_TOGGLE, FakeElement::new().with_class("bi-list"));
        dom.insert(selectors::BACK_TO_TOP, FakeElement::new());
        dom.insert(selectors::NAVBAR, FakeElement::new());
        for (id, top) in [("hero", 0.0), ("about", 800.0)] {
            dom.insert(&format!("#{id}"), FakeElement::new().with_geometry(top, 800.0));
            let link = FakeElement::new().with_attribute("href", &format!("#{id}"));
            dom.insert(selectors::NAV_LINK, link.clone());
            dom.insert(selectors::SCROLL_LINK, link);
        }
        dom.insert(selectors::PORTFOLIO_CONTAINER, FakeElement::new());
        for filter in ["*", ".filter-app"] {
            dom.insert(
                selectors::PORTFOLIO_FILTER,
                FakeElement::new().with_attribute(selectors::FILTER_ATTRIBUTE, filter),
            );
        }
        platform
    }

    #[test]
    fn should_apply_theme_and_reset_scroll_when_mounted() {
        let platform = platform();
        platform.storage.put("folio-theme", "dark");

        let session = PageSession::mount(&platform, &PageSettings::default());

        assert_eq!(session.theme.current(), ThemePreference::Dark);
        assert!(platform.location.restoration_disabled());
        assert_eq!(platform.location.current_hash(), None);
        assert_eq!(platform.viewport.scrolls(), vec![(0.0, ScrollBehavior::Instant)]);
        assert!(session.gallery.is_some());
    }

    #[test]
    fn should_register_one_click_handler_per_control() {
        let platform = platform();
        PageSession::mount(&platform, &PageSettings::default());

        // theme + hamburger + 2 scroll links + back-to-top + 2 filters
        assert_eq!(platform.events.click_handlers(), 7);
        assert!(platform.events.has_scroll_handler());
    }

    #[test]
    fn should_track_viewport_on_scroll_events() {
        let platform = platform();
        PageSession::mount(&platform, &PageSettings::default());
        let navbar = platform.dom.find(selectors::NAVBAR).unwrap();
        let back_to_top = platform.dom.find(selectors::BACK_TO_TOP).unwrap();

        platform.viewport.set_scroll_y(900.0);
        platform.events.fire_scroll();

        assert!(navbar.has_class("navbar-scrolled"));
        assert!(back_to_top.has_class(selectors::ACTIVE_CLASS));
    }

    #[test]
    fn should_land_on_requested_section_after_load() {
        let platform = platform();
        PageSession::mount(&platform, &PageSettings::default());

        platform.events.fire_load();
        assert_eq!(platform.scheduler.pending(), vec![Duration::from_millis(100)]);
        platform.scheduler.run_all();

        assert_eq!(
            platform.viewport.scrolls().last(),
            Some(&(800.0, ScrollBehavior::Smooth))
        );
    }

    #[test]
    fn should_route_clicks_to_controllers() {
        let platform = platform();
        let session = PageSession::mount(&platform, &PageSettings::default());
        let toggle = platform.dom.find(selectors::MOBILE_NAV_TOGGLE).unwrap();

        let click = platform.events.click(&toggle);

        assert!(click.default_prevented());
        assert_eq!(session.navigation.menu_state(), MobileMenuState::Open);
        assert!(toggle.has_class("bi-x"));
    }

    #[test]
    fn should_toggle_theme_by_direct_handler_call() {
        let platform = platform();
        let session = PageSession::mount(&platform, &PageSettings::default());

        let mut click = Click::new();
        handle_theme_click(&session.theme, &mut click);

        assert_eq!(session.theme.current(), ThemePreference::Dark);
        assert_eq!(platform.storage.value("folio-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_scroll_to_top_when_back_to_top_clicked() {
        let platform = platform();
        let session = PageSession::mount(&platform, &PageSettings::default());
        platform.viewport.set_scroll_y(1500.0);

        let mut click = Click::new();
        handle_back_to_top_click(&session.navigation, &mut click);

        assert!(click.default_prevented());
        assert_eq!(
            platform.viewport.scrolls().last(),
            Some(&(0.0, ScrollBehavior::Smooth))
        );
    }
}
