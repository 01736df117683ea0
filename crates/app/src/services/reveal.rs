//! Reveal controller — one-shot fade-in of content blocks.

use crate::ports::{DomElement, ElementLookup, VisibilityObserver};
use crate::settings::RevealSettings;

/// Watch every reveal target and mark it visible the first time it scrolls
/// into view. Returns the number of watched elements.
pub fn mount_reveal<D, O>(dom: &D, observer: &O, settings: &RevealSettings) -> usize
where
    D: ElementLookup,
    D::Element: 'static,
    O: VisibilityObserver<Element = D::Element>,
{
    let targets = dom.find_all(&settings.selector);
    let count = targets.len();
    if count == 0 {
        return 0;
    }

    let visible_class = settings.visible_class.clone();
    let on_visible = Box::new(move |element: &D::Element| element.add_class(&visible_class));
    match observer.observe_once(targets, settings.threshold, on_visible) {
        Ok(()) => count,
        Err(err) => {
            tracing::warn!(error = %err, "reveal animations unavailable");
            0
        }
    }
}
