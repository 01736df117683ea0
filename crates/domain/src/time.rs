//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, Utc};

/// UTC timestamp as reported by a platform clock.
pub type Timestamp = DateTime<Utc>;

/// Build a timestamp from milliseconds since the Unix epoch.
///
/// Browsers report time as an `f64` of milliseconds; values outside the
/// representable range fall back to the epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_epoch_millis(millis: f64) -> Timestamp {
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
}

/// Calendar year shown in the footer copyright line.
#[must_use]
pub fn copyright_year(now: Timestamp) -> i32 {
    now.year()
}
