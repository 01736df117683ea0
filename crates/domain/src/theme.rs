//! Theme preference — the persisted light/dark visual mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button while this mode is applied.
    #[must_use]
    pub fn icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Sun,
            Self::Dark => ThemeIcon::Moon,
        }
    }

    /// Parse a stored value, falling back to [`Light`](Self::Light) for
    /// anything missing or unrecognised.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored theme value is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Glyph on the theme toggle button. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    /// Every icon variant, used to clear stale classes before applying one.
    pub const ALL: [Self; 2] = [Self::Sun, Self::Moon];

    /// CSS class of the icon font glyph.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sun => "bi-sun",
            Self::Moon => "bi-moon-stars",
        }
    }
}
