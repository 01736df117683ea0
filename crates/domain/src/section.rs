//! Section — a vertical range of the page addressed by a navigation link.

/// Vertical extent of a page section, in document pixels.
///
/// Sections are derived from live layout on every scroll tick and never
/// stored: geometry changes on resize and as images load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub start: f64,
    pub extent: f64,
}

impl Section {
    #[must_use]
    pub fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    /// Whether `position` lies in `[start, start + extent)`.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position < self.start + self.extent
    }
}

/// Pick the active entry among `sections` for the given probe position.
///
/// `sections` yields `(key, section)` pairs in document order; entries whose
/// target element is absent are simply not yielded. Returns the key of the
/// matching section, or `None` when nothing contains the probe.
///
/// Overlapping sections are not expected on a well-formed page. When they do
/// occur, the **last** match in document order wins.
pub fn active_section<K, I>(sections: I, probe: f64) -> Option<K>
where
    I: IntoIterator<Item = (K, Section)>,
{
    sections
        .into_iter()
        .filter(|(_, section)| section.contains(probe))
        .last()
        .map(|(key, _)| key)
}
