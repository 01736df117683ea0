//! Widget recorders — stand-ins for the third-party scripts.
//!
//! Each recorder keeps what it was asked to do so tests can inspect it. A
//! library can be removed from the page with [`Scripts::unload`]; its
//! recorder then fails with [`WidgetError::MissingLibrary`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use folio_app::ports::{
    DomElement, GridLayout, Lightbox, ScrollAnimation, Slider, TypedText, VisibilityObserver,
};
use folio_domain::error::WidgetError;
use folio_domain::filter::FilterCategory;
use folio_domain::widget::{
    AnimationOptions, LayoutOptions, LightboxOptions, SliderOptions, TypedOptions, library,
};

use crate::document::VirtualElement;
use crate::selector::SelectorList;

/// Libraries missing from the page.
#[derive(Debug, Clone, Default)]
pub struct Scripts(Rc<RefCell<BTreeSet<&'static str>>>);

impl Scripts {
    pub fn unload(&self, name: &'static str) {
        self.0.borrow_mut().insert(name);
    }

    fn require(&self, name: &'static str) -> Result<(), WidgetError> {
        if self.0.borrow().contains(name) {
            Err(WidgetError::MissingLibrary { name })
        } else {
            Ok(())
        }
    }
}

/// Shows the first phrase; records every start.
#[derive(Debug, Clone, Default)]
pub struct VirtualTyped {
    scripts: Scripts,
    started: Rc<RefCell<Vec<TypedOptions>>>,
}

impl VirtualTyped {
    #[must_use]
    pub fn new(scripts: Scripts) -> Self {
        Self {
            scripts,
            started: Rc::default(),
        }
    }

    #[must_use]
    pub fn started(&self) -> Vec<TypedOptions> {
        self.started.borrow().clone()
    }
}

impl TypedText for VirtualTyped {
    type Element = VirtualElement;

    fn start(&self, target: &VirtualElement, options: &TypedOptions) -> Result<(), WidgetError> {
        self.scripts.require(library::TYPED)?;
        if let Some(first) = options.strings.first() {
            target.set_text(first);
        }
        self.started.borrow_mut().push(options.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VirtualAnimation {
    scripts: Scripts,
    options: Rc<RefCell<Option<AnimationOptions>>>,
    refreshes: Rc<Cell<usize>>,
}

impl VirtualAnimation {
    #[must_use]
    pub fn new(scripts: Scripts) -> Self {
        Self {
            scripts,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<AnimationOptions> {
        self.options.borrow().clone()
    }

    #[must_use]
    pub fn refreshes(&self) -> usize {
        self.refreshes.get()
    }
}

impl ScrollAnimation for VirtualAnimation {
    fn init(&self, options: &AnimationOptions) -> Result<(), WidgetError> {
        self.scripts.require(library::ANIMATION)?;
        self.options.replace(Some(options.clone()));
        Ok(())
    }

    fn refresh(&self) {
        if self.options.borrow().is_some() {
            self.refreshes.set(self.refreshes.get() + 1);
        }
    }
}

#[derive(Default)]
struct LayoutState {
    container: Option<VirtualElement>,
    items: Option<SelectorList>,
    arrangements: Vec<FilterCategory>,
    transitions: Vec<Box<dyn FnOnce()>>,
}

/// Grid layout. Arranging hides non-matching items with `display: none`;
/// completion callbacks wait for [`finish_transitions`](Self::finish_transitions).
#[derive(Clone, Default)]
pub struct VirtualLayout {
    scripts: Scripts,
    state: Rc<RefCell<LayoutState>>,
}

impl VirtualLayout {
    #[must_use]
    pub fn new(scripts: Scripts) -> Self {
        Self {
            scripts,
            state: Rc::default(),
        }
    }

    #[must_use]
    pub fn arrangements(&self) -> Vec<FilterCategory> {
        self.state.borrow().arrangements.clone()
    }

    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.state.borrow().transitions.len()
    }

    pub fn finish_transitions(&self) {
        let done = std::mem::take(&mut self.state.borrow_mut().transitions);
        for callback in done {
            callback();
        }
    }

    /// Items currently shown, in document order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<VirtualElement> {
        self.items()
            .into_iter()
            .filter(|item| !item.is_hidden())
            .collect()
    }

    fn items(&self) -> Vec<VirtualElement> {
        let state = self.state.borrow();
        let (Some(container), Some(items)) = (&state.container, &state.items) else {
            return Vec::new();
        };
        container
            .descendants()
            .into_iter()
            .filter(|element| items.matches(element))
            .collect()
    }
}

impl GridLayout for VirtualLayout {
    type Element = VirtualElement;

    fn mount(&self, container: &VirtualElement, options: &LayoutOptions) -> Result<(), WidgetError> {
        self.scripts.require(library::LAYOUT)?;
        let items =
            SelectorList::parse(&options.item_selector).map_err(|err| WidgetError::Failed {
                name: library::LAYOUT,
                reason: err.to_string(),
            })?;
        let mut state = self.state.borrow_mut();
        state.container = Some(container.clone());
        state.items = Some(items);
        Ok(())
    }

    fn arrange(
        &self,
        filter: &FilterCategory,
        on_complete: Box<dyn FnOnce()>,
    ) -> Result<(), WidgetError> {
        if self.state.borrow().container.is_none() {
            return Err(WidgetError::NotMounted {
                name: library::LAYOUT,
            });
        }
        for item in self.items() {
            let classes = item.classes();
            let shown = filter.matches(classes.iter().map(String::as_str));
            item.set_style("display", if shown { "" } else { "none" });
        }
        let mut state = self.state.borrow_mut();
        state.arrangements.push(filter.clone());
        state.transitions.push(on_complete);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VirtualLightbox {
    scripts: Scripts,
    selectors: Rc<RefCell<Vec<String>>>,
}

impl VirtualLightbox {
    #[must_use]
    pub fn new(scripts: Scripts) -> Self {
        Self {
            scripts,
            selectors: Rc::default(),
        }
    }

    #[must_use]
    pub fn selectors(&self) -> Vec<String> {
        self.selectors.borrow().clone()
    }
}

impl Lightbox for VirtualLightbox {
    fn init(&self, options: &LightboxOptions) -> Result<(), WidgetError> {
        self.scripts.require(library::LIGHTBOX)?;
        self.selectors.borrow_mut().push(options.selector.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VirtualSlider {
    scripts: Scripts,
    mounted: Rc<RefCell<Vec<SliderOptions>>>,
}

impl VirtualSlider {
    #[must_use]
    pub fn new(scripts: Scripts) -> Self {
        Self {
            scripts,
            mounted: Rc::default(),
        }
    }

    #[must_use]
    pub fn mounted(&self) -> Vec<SliderOptions> {
        self.mounted.borrow().clone()
    }
}

impl Slider for VirtualSlider {
    type Element = VirtualElement;

    fn init(&self, _target: &VirtualElement, options: &SliderOptions) -> Result<(), WidgetError> {
        self.scripts.require(library::SLIDER)?;
        self.mounted.borrow_mut().push(options.clone());
        Ok(())
    }
}

struct Watch {
    targets: Vec<VirtualElement>,
    threshold: f64,
    on_visible: Box<dyn FnMut(&VirtualElement)>,
}

/// Visibility observer driven by element geometry.
#[derive(Clone, Default)]
pub struct VirtualObserver {
    scripts: Scripts,
    watches: Rc<RefCell<Vec<Watch>>>,
}

impl VirtualObserver {
    #[must_use]
    pub fn new(scripts: Scripts) -> Self {
        Self {
            scripts,
            watches: Rc::default(),
        }
    }

    /// Elements still waiting to become visible.
    #[must_use]
    pub fn watched(&self) -> usize {
        self.watches.borrow().iter().map(|w| w.targets.len()).sum()
    }

    /// Report every watched element intersecting the viewport
    /// `[top, top + height)` by at least its threshold. Returns how many
    /// fired.
    pub fn scan(&self, top: f64, height: f64) -> usize {
        let mut fired = 0;
        for watch in self.watches.borrow_mut().iter_mut() {
            // A zero threshold still needs some overlap.
            let threshold = watch.threshold.max(f64::MIN_POSITIVE);
            let (visible, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut watch.targets)
                .into_iter()
                .partition(|target| intersection_ratio(target, top, height) >= threshold);
            watch.targets = waiting;
            for target in &visible {
                (watch.on_visible)(target);
            }
            fired += visible.len();
        }
        fired
    }
}

impl VisibilityObserver for VirtualObserver {
    type Element = VirtualElement;

    fn observe_once(
        &self,
        targets: Vec<VirtualElement>,
        threshold: f64,
        on_visible: Box<dyn FnMut(&VirtualElement)>,
    ) -> Result<(), WidgetError> {
        self.scripts.require(library::OBSERVER)?;
        self.watches.borrow_mut().push(Watch {
            targets,
            threshold,
            on_visible,
        });
        Ok(())
    }
}

fn intersection_ratio(element: &VirtualElement, top: f64, height: f64) -> f64 {
    let start = element.offset_top();
    let extent = element.offset_height();
    let overlap = ((start + extent).min(top + height) - start.max(top)).max(0.0);
    if extent <= 0.0 {
        return if start >= top && start < top + height { 1.0 } else { 0.0 };
    }
    overlap / extent
}
