//! Virtual document — an element tree with classes, attributes, inline
//! styles and fixed geometry.
//!
//! There is no layout engine: each element's `offset_top` and
//! `offset_height` are whatever the page author set.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use folio_app::ports::{DomElement, ElementLookup};

use crate::selector::{SelectorError, SelectorList};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    top: f64,
    height: f64,
    parent: Weak<RefCell<Node>>,
    children: Vec<VirtualElement>,
}

/// Handle to a node of the virtual document.
#[derive(Debug, Clone)]
pub struct VirtualElement(Rc<RefCell<Node>>);

impl VirtualElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        })))
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attribute("id", id)
    }

    /// Add one or more whitespace-separated classes.
    #[must_use]
    pub fn with_class(self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_geometry(self, top: f64, height: f64) -> Self {
        {
            let mut node = self.0.borrow_mut();
            node.top = top;
            node.height = height;
        }
        self
    }

    #[must_use]
    pub fn with_child(self, child: VirtualElement) -> Self {
        self.append(child);
        self
    }

    /// Append `child` as the last child and return it.
    pub fn append(&self, child: VirtualElement) -> VirtualElement {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        child
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    /// Hidden by an inline `display: none`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.style("display").as_deref() == Some("none")
    }

    #[must_use]
    pub fn parent(&self) -> Option<VirtualElement> {
        self.0.borrow().parent.upgrade().map(VirtualElement)
    }

    /// Every descendant in document order.
    #[must_use]
    pub fn descendants(&self) -> Vec<VirtualElement> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<VirtualElement>) {
        for child in &self.0.borrow().children {
            out.push(child.clone());
            child.collect_descendants(out);
        }
    }

    /// Descendants matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] if the selector cannot be parsed.
    pub fn query(&self, selector: &str) -> Result<Vec<VirtualElement>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .descendants()
            .into_iter()
            .filter(|element| list.matches(element))
            .collect())
    }

    pub(crate) fn attribute_value(&self, name: &str) -> Option<String> {
        let node = self.0.borrow();
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    pub(crate) fn has_class_name(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }
}

impl DomElement for VirtualElement {
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
        self.has_class_name(class)
    }

    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attribute_value(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text(&self, text: &str) {
        let mut node = self.0.borrow_mut();
        node.text = text.to_string();
        node.children.clear();
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
        match self.query(selector) {
            Ok(found) => found.into_iter().next(),
            Err(err) => {
                tracing::warn!(error = %err, "child lookup failed");
                None
            }
        }
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A document: `<html>` with a `<body>`.
#[derive(Debug, Clone)]
pub struct VirtualDocument {
    root: VirtualElement,
    body: VirtualElement,
}

impl Default for VirtualDocument {
    fn default() -> Self {
        let root = VirtualElement::new("html");
        let body = root.append(VirtualElement::new("body"));
        Self { root, body }
    }
}

impl VirtualDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn root_element(&self) -> VirtualElement {
        self.root.clone()
    }

    #[must_use]
    pub fn body_element(&self) -> VirtualElement {
        self.body.clone()
    }

    /// Append `element` to the body and return it.
    pub fn append(&self, element: VirtualElement) -> VirtualElement {
        self.body.append(element)
    }

    /// Every element, root included, matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] if the selector cannot be parsed.
    pub fn query(&self, selector: &str) -> Result<Vec<VirtualElement>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        let mut all = vec![self.root.clone()];
        all.extend(self.root.descendants());
        Ok(all.into_iter().filter(|element| list.matches(element)).collect())
    }
}

impl ElementLookup for VirtualDocument {
    type Element = VirtualElement;

    fn find(&self, selector: &str) -> Option<VirtualElement> {
        self.find_all(selector).into_iter().next()
    }

    fn find_all(&self, selector: &str) -> Vec<VirtualElement> {
        self.query(selector).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "document lookup failed");
            Vec::new()
        })
    }

    fn root(&self) -> Option<VirtualElement> {
        Some(self.root_element())
    }

    fn body(&self) -> Option<VirtualElement> {
        Some(self.body_element())
    }
}
