//! Fragment — the `#id` part of an in-page URL.

use std::fmt;

/// Identifier of an in-page scroll target, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Parse a raw hash such as `#about` or `about`.
    ///
    /// Returns `None` for an empty hash (`""` or `"#"`), which browsers
    /// report when the URL carries no fragment.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim().trim_start_matches('#');
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// Parse the `href` of an in-page link. Only same-page links (`#…`) are
    /// scroll targets; absolute or relative URLs yield `None`.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        let href = href.trim();
        if href.starts_with('#') {
            Self::parse(href)
        } else {
            None
        }
    }

    /// The conventional landing section, `#hero`.
    #[must_use]
    pub fn hero() -> Self {
        Self("hero".to_string())
    }

    /// The bare element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// CSS id selector matching the target element.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether `hash` denotes the landing section: either no fragment at all or
/// the configured home fragment.
#[must_use]
pub fn is_home(hash: Option<&Fragment>, home: &Fragment) -> bool {
    hash.is_none_or(|h| h == home)
}
