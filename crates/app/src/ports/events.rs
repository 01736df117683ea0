//! Event source port — registration of page event handlers.

/// A click delivered to a handler.
///
/// Handlers call [`prevent_default`](Self::prevent_default) to suppress the
/// browser's own navigation; the adapter applies it once the handler returns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Click {
    default_prevented: bool,
}

impl Click {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Where page handlers are attached.
///
/// Listeners live for the whole page session; there is no removal.
pub trait EventSource {
    type Element;

    /// Call `handler` on every window scroll.
    fn on_scroll(&self, handler: Box<dyn FnMut()>);

    /// Call `handler` once the page and its resources have loaded. If the
    /// page already finished loading, the handler still runs exactly once.
    fn on_load(&self, handler: Box<dyn FnOnce()>);

    /// Call `handler` on every click on `target`.
    fn on_click(&self, target: &Self::Element, handler: Box<dyn FnMut(&mut Click)>);
}
