//! Gallery filter controller — the active portfolio category.

use std::cell::RefCell;

use folio_domain::filter::FilterCategory;
use folio_domain::widget::LayoutOptions;

use crate::ports::{DomElement, ElementLookup, GridLayout, ScrollAnimation};
use crate::selectors;

/// Owner of the active [`FilterCategory`] and the layout widget.
pub struct GalleryFilterController<E, L, A> {
    controls: Vec<E>,
    layout: L,
    animation: A,
    active: RefCell<FilterCategory>,
}

impl<E, L, A> GalleryFilterController<E, L, A>
where
    E: DomElement,
    L: GridLayout<Element = E>,
    A: ScrollAnimation + Clone + 'static,
{
    /// Mount the layout over the gallery.
    ///
    /// Returns `None` when the page has no gallery or the layout library
    /// cannot take it over; filtering is then simply unavailable.
    pub fn mount<D>(dom: &D, layout: L, animation: A, options: &LayoutOptions) -> Option<Self>
    where
        D: ElementLookup<Element = E>,
    {
        let container = dom.find(selectors::PORTFOLIO_CONTAINER)?;
        if let Err(err) = layout.mount(&container, options) {
            tracing::warn!(error = %err, "gallery layout unavailable");
            return None;
        }

        let controls = dom.find_all(selectors::PORTFOLIO_FILTER);
        let initial = controls
            .iter()
            .position(|c| c.has_class(selectors::FILTER_ACTIVE_CLASS))
            .unwrap_or(0);
        for (index, control) in controls.iter().enumerate() {
            control.set_class(selectors::FILTER_ACTIVE_CLASS, index == initial);
        }
        let active = controls
            .get(initial)
            .map(category_of)
            .unwrap_or_default();
        tracing::debug!(controls = controls.len(), %active, "gallery mounted");

        Some(Self {
            controls,
            layout,
            animation,
            active: RefCell::new(active),
        })
    }

    pub fn controls(&self) -> &[E] {
        &self.controls
    }

    pub fn active(&self) -> FilterCategory {
        self.active.borrow().clone()
    }

    /// Make `control` the only active filter and relayout the gallery.
    ///
    /// The visual state is updated before the single relayout request; the
    /// scroll animation is refreshed once the layout reports completion.
    pub fn select_filter(&self, control: &E) -> FilterCategory {
        let category = category_of(control);

        for other in &self.controls {
            if !other.is_same(control) {
                other.remove_class(selectors::FILTER_ACTIVE_CLASS);
            }
        }
        control.add_class(selectors::FILTER_ACTIVE_CLASS);
        self.active.replace(category.clone());

        let animation = self.animation.clone();
        if let Err(err) = self
            .layout
            .arrange(&category, Box::new(move || animation.refresh()))
        {
            tracing::warn!(error = %err, %category, "gallery relayout failed");
        }
        tracing::debug!(%category, "gallery filter selected");
        category
    }
}

fn category_of<E: DomElement>(control: &E) -> FilterCategory {
    control
        .attribute(selectors::FILTER_ATTRIBUTE)
        .map_or(FilterCategory::All, |raw| FilterCategory::parse(&raw))
}
