//! Bindings to the page's widget libraries.
//!
//! The libraries are plain `<script>` globals. Every call is made through a
//! `catch` binding, and the global is checked first so a missing script is
//! reported as [`WidgetError::MissingLibrary`] rather than a thrown
//! `ReferenceError`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_app::ports::{
    GridLayout, Lightbox, ScrollAnimation, Slider, TypedText, VisibilityObserver,
};
use folio_domain::error::WidgetError;
use folio_domain::filter::FilterCategory;
use folio_domain::widget::{
    AnimationOptions, LayoutOptions, LightboxOptions, SliderOptions, TypedOptions, library,
};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::WebElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Typed)]
    type TypedJs;

    #[wasm_bindgen(catch, constructor, js_class = "Typed")]
    fn new(target: &Element, options: &JsValue) -> Result<TypedJs, JsValue>;

    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = AOS, js_name = refresh)]
    fn aos_refresh() -> Result<(), JsValue>;

    #[derive(Debug, Clone)]
    #[wasm_bindgen(js_name = Isotope)]
    type IsotopeJs;

    #[wasm_bindgen(catch, constructor, js_class = "Isotope")]
    fn new(container: &Element, options: &JsValue) -> Result<IsotopeJs, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn arrange(this: &IsotopeJs, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn once(this: &IsotopeJs, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(catch, js_name = GLightbox)]
    fn glightbox(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = Swiper)]
    type SwiperJs;

    #[wasm_bindgen(catch, constructor, js_class = "Swiper")]
    fn new(target: &Element, options: &JsValue) -> Result<SwiperJs, JsValue>;
}

fn require(name: &'static str) -> Result<(), WidgetError> {
    let loaded = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .is_ok_and(|value| !value.is_undefined());
    if loaded {
        Ok(())
    } else {
        Err(WidgetError::MissingLibrary { name })
    }
}

/// Plain JS object for `options`, as the libraries expect.
fn to_js<T: Serialize>(name: &'static str, options: &T) -> Result<JsValue, WidgetError> {
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|_| WidgetError::Options { name })
}

fn failed(name: &'static str, err: &JsValue) -> WidgetError {
    let reason = err
        .dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{err:?}"), |error| String::from(error.message()));
    WidgetError::Failed { name, reason }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebTyped;

impl TypedText for WebTyped {
    type Element = WebElement;

    fn start(&self, target: &WebElement, options: &TypedOptions) -> Result<(), WidgetError> {
        require(library::TYPED)?;
        let options = to_js(library::TYPED, options)?;
        TypedJs::new(&target.0, &options)
            .map(drop)
            .map_err(|err| failed(library::TYPED, &err))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebAnimation;

impl ScrollAnimation for WebAnimation {
    fn init(&self, options: &AnimationOptions) -> Result<(), WidgetError> {
        require(library::ANIMATION)?;
        let options = to_js(library::ANIMATION, options)?;
        aos_init(&options).map_err(|err| failed(library::ANIMATION, &err))
    }

    fn refresh(&self) {
        if require(library::ANIMATION).is_err() {
            return;
        }
        if let Err(err) = aos_refresh() {
            tracing::warn!(error = %failed(library::ANIMATION, &err), "animation refresh failed");
        }
    }
}

/// Isotope instance over the gallery, once mounted.
#[derive(Debug, Clone, Default)]
pub struct WebLayout(Rc<RefCell<Option<IsotopeJs>>>);

#[derive(Serialize)]
struct ArrangeOptions {
    filter: String,
}

impl GridLayout for WebLayout {
    type Element = WebElement;

    fn mount(&self, container: &WebElement, options: &LayoutOptions) -> Result<(), WidgetError> {
        require(library::LAYOUT)?;
        let options = to_js(library::LAYOUT, options)?;
        let isotope =
            IsotopeJs::new(&container.0, &options).map_err(|err| failed(library::LAYOUT, &err))?;
        self.0.replace(Some(isotope));
        Ok(())
    }

    fn arrange(
        &self,
        filter: &FilterCategory,
        on_complete: Box<dyn FnOnce()>,
    ) -> Result<(), WidgetError> {
        let isotope = self.0.borrow();
        let isotope = isotope.as_ref().ok_or(WidgetError::NotMounted {
            name: library::LAYOUT,
        })?;
        let options = to_js(
            library::LAYOUT,
            &ArrangeOptions {
                filter: filter.selector(),
            },
        )?;
        let callback = Closure::once_into_js(move || on_complete());
        isotope.once("arrangeComplete", callback.unchecked_ref());
        isotope
            .arrange(&options)
            .map_err(|err| failed(library::LAYOUT, &err))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebLightbox;

impl Lightbox for WebLightbox {
    fn init(&self, options: &LightboxOptions) -> Result<(), WidgetError> {
        require(library::LIGHTBOX)?;
        let options = to_js(library::LIGHTBOX, options)?;
        glightbox(&options)
            .map(drop)
            .map_err(|err| failed(library::LIGHTBOX, &err))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebSlider;

impl Slider for WebSlider {
    type Element = WebElement;

    fn init(&self, target: &WebElement, options: &SliderOptions) -> Result<(), WidgetError> {
        require(library::SLIDER)?;
        let options = to_js(library::SLIDER, options)?;
        SwiperJs::new(&target.0, &options)
            .map(drop)
            .map_err(|err| failed(library::SLIDER, &err))
    }
}

/// `IntersectionObserver` that unobserves each target after its first
/// intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebObserver;

impl VisibilityObserver for WebObserver {
    type Element = WebElement;

    fn observe_once(
        &self,
        targets: Vec<WebElement>,
        threshold: f64,
        mut on_visible: Box<dyn FnMut(&WebElement)>,
    ) -> Result<(), WidgetError> {
        require(library::OBSERVER)?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_visible(&WebElement(target));
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| failed(library::OBSERVER, &err))?;
        callback.forget();

        for target in &targets {
            observer.observe(&target.0);
        }
        Ok(())
    }
}
