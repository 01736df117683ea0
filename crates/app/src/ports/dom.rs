//! DOM ports — element lookup and the element operations controllers need.

/// Handle to a live element.
///
/// Handles are cheap to clone and refer to the same underlying node; every
/// mutation goes through `&self`.
pub trait DomElement: Clone {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// All classes currently on the element, in document order.
    fn classes(&self) -> Vec<String>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn set_text(&self, text: &str);

    /// Set an inline style property. An empty `value` removes the property.
    fn set_style(&self, property: &str, value: &str);

    /// Distance from the top of the document to the element, in pixels.
    fn offset_top(&self) -> f64;

    /// Rendered height of the element, in pixels.
    fn offset_height(&self) -> f64;

    /// First descendant matching `selector`.
    fn find_child(&self, selector: &str) -> Option<Self>;

    /// Whether both handles refer to the same node.
    fn is_same(&self, other: &Self) -> bool;

    /// Add or remove `class` depending on `enabled`.
    fn set_class(&self, class: &str, enabled: bool) {
        if enabled {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Selector-based access to the document.
///
/// A selector that matches nothing is not an error: optional page regions
/// are expected to be absent.
pub trait ElementLookup {
    type Element: DomElement;

    /// First element matching `selector`.
    fn find(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self::Element>;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Element>;
}
