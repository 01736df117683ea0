//! Clock port — current wall-clock time.

use folio_domain::time::Timestamp;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}
