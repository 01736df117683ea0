//! In-memory port doubles shared by the controller tests.
//!
//! The fake DOM does no selector matching: elements are registered under the
//! exact selector strings the controllers query.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use folio_domain::error::{StorageError, WidgetError};
use folio_domain::filter::FilterCategory;
use folio_domain::time::{Timestamp, from_epoch_millis};
use folio_domain::widget::{
    AnimationOptions, LayoutOptions, LightboxOptions, SliderOptions, TypedOptions,
};

use crate::ports::{
    Click, Clock, DomElement, ElementLookup, EventSource, GridLayout, KeyValueStore, Lightbox,
    PageLocation, Platform, ScrollAnimation, ScrollBehavior, Scheduler, Slider, TypedText,
    Viewport, VisibilityObserver,
};

#[derive(Debug, Default)]
struct Node {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    top: f64,
    height: f64,
    children: Vec<(String, FakeElement)>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_geometry(self, top: f64, height: f64) -> Self {
        {
            let mut node = self.0.borrow_mut();
            node.top = top;
            node.height = height;
        }
        self
    }

    pub fn with_child(self, selector: &str, child: FakeElement) -> Self {
        self.0
            .borrow_mut()
            .children
            .push((selector.to_string(), child));
        self
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }
}

impl DomElement for FakeElement {
    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().height
    }

    fn find_child(&self, selector: &str) -> Option<Self> {
        self.0
            .borrow()
            .children
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, child)| child.clone())
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Default)]
struct DomState {
    by_selector: HashMap<String, Vec<FakeElement>>,
    root: FakeElement,
    body: FakeElement,
    lookups: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeDom(Rc<RefCell<DomState>>);

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `element` as a match for `selector` (appended in document order).
    pub fn insert(&self, selector: &str, element: FakeElement) -> FakeElement {
        self.0
            .borrow_mut()
            .by_selector
            .entry(selector.to_string())
            .or_default()
            .push(element.clone());
        element
    }

    pub fn root_element(&self) -> FakeElement {
        self.0.borrow().root.clone()
    }

    pub fn body_element(&self) -> FakeElement {
        self.0.borrow().body.clone()
    }

    /// Number of `find`/`find_all` calls so far.
    pub fn lookups(&self) -> usize {
        self.0.borrow().lookups
    }
}

impl ElementLookup for FakeDom {
    type Element = FakeElement;

    fn find(&self, selector: &str) -> Option<FakeElement> {
        let mut state = self.0.borrow_mut();
        state.lookups += 1;
        state
            .by_selector
            .get(selector)
            .and_then(|els| els.first().cloned())
    }

    fn find_all(&self, selector: &str) -> Vec<FakeElement> {
        let mut state = self.0.borrow_mut();
        state.lookups += 1;
        state.by_selector.get(selector).cloned().unwrap_or_default()
    }

    fn root(&self) -> Option<FakeElement> {
        Some(self.root_element())
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body_element())
    }
}

/// Key/value store that can be switched into a failing mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.set(true);
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn put(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
            });
        }
        self.put(key, value);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeViewport {
    scroll_y: Rc<Cell<f64>>,
    scrolls: Rc<RefCell<Vec<(f64, ScrollBehavior)>>>,
    reads: Rc<Cell<usize>>,
    origin_resets: Rc<Cell<usize>>,
}

impl FakeViewport {
    pub fn at(scroll_y: f64) -> Self {
        let viewport = Self::default();
        viewport.scroll_y.set(scroll_y);
        viewport
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scrolls(&self) -> Vec<(f64, ScrollBehavior)> {
        self.scrolls.borrow().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn origin_resets(&self) -> usize {
        self.origin_resets.get()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.reads.set(self.reads.get() + 1);
        self.scroll_y.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.scroll_y.set(top);
        self.scrolls.borrow_mut().push((top, behavior));
    }

    fn reset_to_origin(&self) {
        self.origin_resets.set(self.origin_resets.get() + 1);
        self.scroll_to(0.0, ScrollBehavior::Instant);
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeLocation {
    hash: Rc<RefCell<Option<String>>>,
    restoration_disabled: Rc<Cell<bool>>,
    replacements: Rc<Cell<usize>>,
}

impl FakeLocation {
    pub fn with_hash(hash: &str) -> Self {
        let location = Self::default();
        *location.hash.borrow_mut() = Some(hash.to_string());
        location
    }

    pub fn current_hash(&self) -> Option<String> {
        self.hash.borrow().clone()
    }

    pub fn restoration_disabled(&self) -> bool {
        self.restoration_disabled.get()
    }

    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl PageLocation for FakeLocation {
    fn hash(&self) -> Option<String> {
        self.current_hash()
    }

    fn strip_hash(&self) {
        *self.hash.borrow_mut() = None;
        self.replacements.set(self.replacements.get() + 1);
    }

    fn disable_scroll_restoration(&self) {
        self.restoration_disabled.set(true);
    }
}

type Task = (Duration, Box<dyn FnOnce()>);

/// Scheduler that only runs tasks when asked to.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<Vec<Task>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(d, _)| *d).collect()
    }

    pub fn run_all(&self) {
        let tasks: Vec<Task> = self.pending.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, task));
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeAnimation {
    pub inits: Rc<Cell<usize>>,
    pub refreshes: Rc<Cell<usize>>,
}

impl ScrollAnimation for FakeAnimation {
    fn init(&self, _options: &AnimationOptions) -> Result<(), WidgetError> {
        self.inits.set(self.inits.get() + 1);
        Ok(())
    }

    fn refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }
}

/// Layout that records arrange requests and holds their completions until
/// [`complete_all`](Self::complete_all).
#[derive(Clone, Default)]
pub struct FakeLayout {
    pub mounted: Rc<Cell<bool>>,
    pub refuse_mount: Rc<Cell<bool>>,
    pub arranged: Rc<RefCell<Vec<FilterCategory>>>,
    /// For each `arrange`, which watched controls carried the active class
    /// at the time of the call.
    pub active_at_arrange: Rc<RefCell<Vec<Vec<bool>>>>,
    watched: Rc<RefCell<Vec<FakeElement>>>,
    completions: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
}

impl FakeLayout {
    pub fn watch(&self, controls: &[FakeElement]) {
        self.watched.replace(controls.to_vec());
    }

    pub fn complete_all(&self) {
        let pending: Vec<Box<dyn FnOnce()>> = self.completions.borrow_mut().drain(..).collect();
        for done in pending {
            done();
        }
    }
}

impl GridLayout for FakeLayout {
    type Element = FakeElement;

    fn mount(&self, _container: &FakeElement, _options: &LayoutOptions) -> Result<(), WidgetError> {
        if self.refuse_mount.get() {
            return Err(WidgetError::MissingLibrary { name: "Isotope" });
        }
        self.mounted.set(true);
        Ok(())
    }

    fn arrange(
        &self,
        filter: &FilterCategory,
        on_complete: Box<dyn FnOnce()>,
    ) -> Result<(), WidgetError> {
        self.arranged.borrow_mut().push(filter.clone());
        let active = self
            .watched
            .borrow()
            .iter()
            .map(|control| control.has_class(crate::selectors::FILTER_ACTIVE_CLASS))
            .collect();
        self.active_at_arrange.borrow_mut().push(active);
        self.completions.borrow_mut().push(on_complete);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeTyped {
    pub started: Rc<RefCell<Vec<TypedOptions>>>,
}

impl TypedText for FakeTyped {
    type Element = FakeElement;

    fn start(&self, _target: &FakeElement, options: &TypedOptions) -> Result<(), WidgetError> {
        self.started.borrow_mut().push(options.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeLightbox {
    pub selectors: Rc<RefCell<Vec<String>>>,
}

impl Lightbox for FakeLightbox {
    fn init(&self, options: &LightboxOptions) -> Result<(), WidgetError> {
        self.selectors.borrow_mut().push(options.selector.clone());
        Ok(())
    }
}

/// Slider whose library is never loaded.
#[derive(Debug, Clone, Default)]
pub struct MissingSlider;

impl Slider for MissingSlider {
    type Element = FakeElement;

    fn init(&self, _target: &FakeElement, _options: &SliderOptions) -> Result<(), WidgetError> {
        Err(WidgetError::MissingLibrary { name: "Swiper" })
    }
}

type VisibleCallback = Box<dyn FnMut(&FakeElement)>;

/// Observer that reveals elements on demand.
#[derive(Clone, Default)]
pub struct FakeObserver {
    watched: Rc<RefCell<Vec<FakeElement>>>,
    callback: Rc<RefCell<Option<VisibleCallback>>>,
    pub threshold: Rc<Cell<f64>>,
}

impl FakeObserver {
    pub fn watched(&self) -> usize {
        self.watched.borrow().len()
    }

    /// Report `element` as intersecting; ignored unless still watched.
    pub fn intersect(&self, element: &FakeElement) {
        let was_watched = {
            let mut watched = self.watched.borrow_mut();
            let before = watched.len();
            watched.retain(|w| !w.is_same(element));
            watched.len() != before
        };
        if was_watched {
            if let Some(callback) = self.callback.borrow_mut().as_mut() {
                callback(element);
            }
        }
    }
}

impl VisibilityObserver for FakeObserver {
    type Element = FakeElement;

    fn observe_once(
        &self,
        targets: Vec<FakeElement>,
        threshold: f64,
        on_visible: Box<dyn FnMut(&FakeElement)>,
    ) -> Result<(), WidgetError> {
        self.watched.borrow_mut().extend(targets);
        self.threshold.set(threshold);
        *self.callback.borrow_mut() = Some(on_visible);
        Ok(())
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub fn at_millis(millis: f64) -> Self {
        Self(from_epoch_millis(millis))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

type ClickHandler = (FakeElement, Box<dyn FnMut(&mut Click)>);

#[derive(Default)]
struct Listeners {
    scroll: Vec<Box<dyn FnMut()>>,
    load: Vec<Box<dyn FnOnce()>>,
    click: Vec<ClickHandler>,
}

/// Event source whose events are fired by the test.
#[derive(Clone, Default)]
pub struct FakeEvents(Rc<RefCell<Listeners>>);

impl FakeEvents {
    pub fn click_handlers(&self) -> usize {
        self.0.borrow().click.len()
    }

    pub fn has_scroll_handler(&self) -> bool {
        !self.0.borrow().scroll.is_empty()
    }

    pub fn fire_scroll(&self) {
        for handler in &mut self.0.borrow_mut().scroll {
            handler();
        }
    }

    pub fn fire_load(&self) {
        let handlers: Vec<_> = self.0.borrow_mut().load.drain(..).collect();
        for handler in handlers {
            handler();
        }
    }

    /// Deliver a click to every handler attached to `target`.
    pub fn click(&self, target: &FakeElement) -> Click {
        let mut click = Click::new();
        for (element, handler) in &mut self.0.borrow_mut().click {
            if element.is_same(target) {
                handler(&mut click);
            }
        }
        click
    }
}

impl EventSource for FakeEvents {
    type Element = FakeElement;

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        self.0.borrow_mut().scroll.push(handler);
    }

    fn on_load(&self, handler: Box<dyn FnOnce()>) {
        self.0.borrow_mut().load.push(handler);
    }

    fn on_click(&self, target: &FakeElement, handler: Box<dyn FnMut(&mut Click)>) {
        self.0.borrow_mut().click.push((target.clone(), handler));
    }
}

/// Every fake bundled behind [`Platform`].
#[derive(Clone, Default)]
pub struct FakePlatform {
    pub dom: FakeDom,
    pub storage: MemoryStore,
    pub viewport: FakeViewport,
    pub location: FakeLocation,
    pub events: FakeEvents,
    pub scheduler: ManualScheduler,
    pub typed: FakeTyped,
    pub animation: FakeAnimation,
    pub layout: FakeLayout,
    pub lightbox: FakeLightbox,
    pub observer: FakeObserver,
}

impl FakePlatform {
    pub fn with_hash(hash: &str) -> Self {
        Self {
            location: FakeLocation::with_hash(hash),
            ..Self::default()
        }
    }
}

impl Platform for FakePlatform {
    type Element = FakeElement;
    type Dom = FakeDom;
    type Storage = MemoryStore;
    type Viewport = FakeViewport;
    type Location = FakeLocation;
    type Events = FakeEvents;
    type Scheduler = ManualScheduler;
    type Clock = FixedClock;
    type TypedText = FakeTyped;
    type Animation = FakeAnimation;
    type Layout = FakeLayout;
    type Lightbox = FakeLightbox;
    type Slider = MissingSlider;
    type Observer = FakeObserver;

    fn dom(&self) -> FakeDom {
        self.dom.clone()
    }

    fn storage(&self) -> MemoryStore {
        self.storage.clone()
    }

    fn viewport(&self) -> FakeViewport {
        self.viewport.clone()
    }

    fn location(&self) -> FakeLocation {
        self.location.clone()
    }

    fn events(&self) -> FakeEvents {
        self.events.clone()
    }

    fn scheduler(&self) -> ManualScheduler {
        self.scheduler.clone()
    }

    fn clock(&self) -> FixedClock {
        // 2026-06-01T00:00:00Z
        FixedClock::at_millis(1_780_272_000_000.0)
    }

    fn typed_text(&self) -> FakeTyped {
        self.typed.clone()
    }

    fn animation(&self) -> FakeAnimation {
        self.animation.clone()
    }

    fn layout(&self) -> FakeLayout {
        self.layout.clone()
    }

    fn lightbox(&self) -> FakeLightbox {
        self.lightbox.clone()
    }

    fn slider(&self) -> MissingSlider {
        MissingSlider
    }

    fn observer(&self) -> FakeObserver {
        self.observer.clone()
    }
}
