//! `ElementLookup` and `DomElement` over the live document.

use folio_app::ports::{DomElement, ElementLookup};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A live DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(pub Element);

impl WebElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl DomElement for WebElement {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            tracing::warn!(class, error = ?err, "classList.add failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            tracing::warn!(class, error = ?err, "classList.remove failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn classes(&self) -> Vec<String> {
        let list = self.0.class_list();
        (0..list.length()).filter_map(|index| list.item(index)).collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            tracing::warn!(name, error = ?err, "setAttribute failed");
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.html() else {
            return;
        };
        let style = html.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            tracing::warn!(property, error = ?err, "inline style update failed");
        }
    }

    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.html().map_or(0.0, |html| f64::from(html.offset_height()))
    }

    fn find_child(&self, selector: &str) -> Option<Self> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(WebElement),
            Err(err) => {
                tracing::warn!(selector, error = ?err, "invalid selector");
                None
            }
        }
    }

    fn is_same(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument(pub Document);

impl WebDocument {
    /// Text content of the first element matching `selector`.
    #[must_use]
    pub fn text_of(&self, selector: &str) -> Option<String> {
        self.find(selector).and_then(|element| element.0.text_content())
    }
}

impl ElementLookup for WebDocument {
    type Element = WebElement;

    fn find(&self, selector: &str) -> Option<WebElement> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(WebElement),
            Err(err) => {
                tracing::warn!(selector, error = ?err, "invalid selector");
                None
            }
        }
    }

    fn find_all(&self, selector: &str) -> Vec<WebElement> {
        let nodes = match self.0.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "invalid selector");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn root(&self) -> Option<WebElement> {
        self.0.document_element().map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.0.body().map(|body| WebElement(body.into()))
    }
}
