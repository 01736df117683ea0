//! Preference store — the persisted theme flag.

use folio_domain::theme::ThemePreference;

use crate::ports::KeyValueStore;

/// Reads and writes the theme preference under a fixed key.
///
/// Storage failures never reach the caller: reads fall back to
/// [`ThemePreference::Light`] and writes become no-ops, so the theme still
/// applies for the current session.
pub struct PreferenceStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Create a store persisting under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The persisted preference, or light when absent, unrecognised, or
    /// unreadable.
    pub fn get(&self) -> ThemePreference {
        match self.store.get(&self.key) {
            Ok(value) => ThemePreference::from_stored(value.as_deref()),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "theme preference unreadable, using default");
                ThemePreference::default()
            }
        }
    }

    /// Persist `pref`. Writing the same value twice is harmless.
    pub fn set(&self, pref: ThemePreference) {
        if let Err(err) = self.store.set(&self.key, pref.as_str()) {
            tracing::warn!(key = %self.key, error = %err, "theme preference not persisted");
        }
    }
}
