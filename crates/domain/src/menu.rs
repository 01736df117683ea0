//! Mobile menu — open/closed state of the collapsible navigation.

/// Whether the mobile navigation overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MobileMenuState {
    #[default]
    Closed,
    Open,
}

impl MobileMenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Glyph the hamburger button shows in this state.
    #[must_use]
    pub fn glyph(self) -> MenuGlyph {
        match self {
            Self::Closed => MenuGlyph::List,
            Self::Open => MenuGlyph::Close,
        }
    }
}

/// Icon on the hamburger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuGlyph {
    List,
    Close,
}

impl MenuGlyph {
    pub const ALL: [Self; 2] = [Self::List, Self::Close];

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::List => "bi-list",
            Self::Close => "bi-x",
        }
    }
}
