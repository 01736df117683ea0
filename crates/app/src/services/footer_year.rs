//! Footer year — keeps the copyright line current.

use folio_domain::time::copyright_year;

use crate::ports::{Clock, DomElement, ElementLookup};
use crate::selectors;

/// Write the current year into `#current-year`, if the page has one.
pub fn render_copyright_year<D, C>(dom: &D, clock: &C) -> Option<i32>
where
    D: ElementLookup,
    C: Clock,
{
    let element = dom.find(selectors::CURRENT_YEAR)?;
    let year = copyright_year(clock.now());
    element.set_text(&year.to_string());
    Some(year)
}
