//! Viewport and location ports — scroll position and URL fragment.

/// How a programmatic scroll moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The scrollable window.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    /// Scroll so that document position `top` is at the top of the viewport.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Jump to the document origin on both axes, without animation.
    fn reset_to_origin(&self);
}

/// The page URL and session history.
pub trait PageLocation {
    /// Raw fragment of the current URL including the leading `#`, if any.
    fn hash(&self) -> Option<String>;

    /// Remove the fragment from the visible URL by replacing the current
    /// history entry. Must not trigger navigation.
    fn strip_hash(&self);

    /// Opt out of the browser restoring the previous scroll position.
    fn disable_scroll_restoration(&self);
}
