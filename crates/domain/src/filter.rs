//! Filter category — which gallery items are shown.

use std::fmt;

/// Category selected by a gallery filter control.
///
/// Controls carry a `data-filter` attribute: `*` (or `all`) shows every
/// item, `.filter-app` (or bare `filter-app`) shows items tagged with
/// that class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterCategory {
    #[default]
    All,
    Tag(String),
}

impl FilterCategory {
    /// Parse a `data-filter` attribute value. Blank values mean "all".
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "" | "*" | "all" => Self::All,
            other => {
                let tag = other.trim_start_matches('.');
                if tag.is_empty() {
                    Self::All
                } else {
                    Self::Tag(tag.to_string())
                }
            }
        }
    }

    /// Whether an item carrying `tags` is visible under this category.
    pub fn matches<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::All => true,
            Self::Tag(tag) => tags.into_iter().any(|t| t == tag),
        }
    }

    /// Selector handed to the layout widget.
    #[must_use]
    pub fn selector(&self) -> String {
        match self {
            Self::All => "*".to_string(),
            Self::Tag(tag) => format!(".{tag}"),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}
