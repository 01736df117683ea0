//! Load-time scroll resolver — decides where the page lands on first load.
//!
//! Browsers restore the previous scroll position, or jump to the URL
//! fragment, before any script runs. The resolver takes both decisions away
//! from the browser:
//!
//! 1. [`prepare`](LoadScrollResolver::prepare), synchronously at startup:
//!    disable scroll restoration, strip a non-home fragment from the URL
//!    (history replaced, not pushed), and reset to the top.
//! 2. [`settle`](LoadScrollResolver::settle), shortly after the `load` event:
//!    land on the home section or scroll to the requested one.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_domain::fragment::{self, Fragment};

use crate::ports::{ElementLookup, PageLocation, Scheduler, Viewport};
use crate::services::navigation_controller::NavigationController;

/// Where [`LoadScrollResolver::settle`] left the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Landing {
    /// Top of the page, home link active.
    Home,
    /// Scrolled to the requested section.
    Section(Fragment),
    /// The requested section does not exist; the page stays where it is.
    Unresolved(Fragment),
}

pub struct LoadScrollResolver<D: ElementLookup, V, L, S> {
    location: L,
    viewport: V,
    scheduler: S,
    navigation: Rc<NavigationController<D, V>>,
    home: Fragment,
    settle_delay: Duration,
    requested: RefCell<Option<Fragment>>,
}

impl<D, V, L, S> LoadScrollResolver<D, V, L, S>
where
    D: ElementLookup + 'static,
    V: Viewport + 'static,
    L: PageLocation + 'static,
    S: Scheduler + 'static,
{
    pub fn new(
        location: L,
        viewport: V,
        scheduler: S,
        navigation: Rc<NavigationController<D, V>>,
        home: Fragment,
        settle_delay: Duration,
    ) -> Self {
        Self {
            location,
            viewport,
            scheduler,
            navigation,
            home,
            settle_delay,
            requested: RefCell::new(None),
        }
    }

    /// Phase one. Must run before the first render.
    ///
    /// Returns the fragment that will be resolved in phase two.
    pub fn prepare(&self) -> Option<Fragment> {
        self.location.disable_scroll_restoration();

        let requested = self.location.hash().and_then(|raw| Fragment::parse(&raw));
        if !fragment::is_home(requested.as_ref(), &self.home) {
            self.location.strip_hash();
        }
        self.viewport.reset_to_origin();

        tracing::debug!(requested = ?requested.as_ref().map(ToString::to_string), "landing prepared");
        self.requested.replace(requested.clone());
        requested
    }

    /// Queue phase two after the settle delay, giving layout time to finish.
    pub fn schedule_settle(self: &Rc<Self>) {
        let resolver = Rc::clone(self);
        self.scheduler.defer(
            self.settle_delay,
            Box::new(move || {
                resolver.settle();
            }),
        );
    }

    /// Phase two: land on the requested section.
    pub fn settle(&self) -> Landing {
        let requested = self.requested.borrow().clone();
        let landing = match requested {
            Some(target) if target != self.home => {
                if self.navigation.scroll_to(&target) {
                    Landing::Section(target)
                } else {
                    Landing::Unresolved(target)
                }
            }
            _ => {
                self.viewport.reset_to_origin();
                self.navigation.set_active(&self.home);
                Landing::Home
            }
        };
        tracing::debug!(?landing, "landing settled");
        landing
    }
}
