//! Error types reported by the platform adapters.
//!
//! None of these errors are fatal to the page: callers log them and carry on
//! with a degraded feature. They exist so adapters can report *what* went
//! wrong without resorting to stringly-typed failures.

/// Failure of the origin-scoped key/value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The store cannot be reached at all (private mode, disabled cookies, …).
    #[error("storage is not available")]
    Unavailable,

    /// Reading `key` raised an error.
    #[error("storage rejected read of `{key}`")]
    ReadRejected { key: String },

    /// Writing `key` raised an error (quota, security policy, …).
    #[error("storage rejected write of `{key}`")]
    WriteRejected { key: String },
}

/// Failure of an external visual widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The library global is not loaded on the page.
    #[error("widget library `{name}` is not loaded")]
    MissingLibrary { name: &'static str },

    /// The library was found but its constructor or method threw.
    #[error("widget `{name}` failed: {reason}")]
    Failed { name: &'static str, reason: String },

    /// The options could not be encoded for the library.
    #[error("widget `{name}` options could not be encoded")]
    Options { name: &'static str },

    /// An operation was requested before the widget was mounted.
    #[error("widget `{name}` is not mounted")]
    NotMounted { name: &'static str },
}
