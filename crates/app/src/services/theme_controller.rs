//! Theme controller — applies the visual mode and keeps the toggle icon and
//! the persisted flag in step with it.

use std::cell::Cell;

use folio_domain::theme::{ThemeIcon, ThemePreference};

use crate::ports::{DomElement, ElementLookup, KeyValueStore};
use crate::selectors;
use crate::services::preference_store::PreferenceStore;

/// Owner of the page's current [`ThemePreference`].
pub struct ThemeController<D, S> {
    dom: D,
    preferences: PreferenceStore<S>,
    current: Cell<ThemePreference>,
}

impl<D, S> ThemeController<D, S>
where
    D: ElementLookup,
    S: KeyValueStore,
{
    pub fn new(dom: D, preferences: PreferenceStore<S>) -> Self {
        Self {
            dom,
            preferences,
            current: Cell::new(ThemePreference::default()),
        }
    }

    /// The preference last applied.
    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }

    /// Load the persisted preference and apply it.
    pub fn initialize(&self) -> ThemePreference {
        let pref = self.preferences.get();
        self.current.set(pref);
        self.render(pref);
        tracing::debug!(theme = %pref, "theme initialised");
        pref
    }

    /// Switch to the other mode, re-render, and persist.
    pub fn toggle(&self) -> ThemePreference {
        let pref = self.current.get().toggled();
        self.current.set(pref);
        self.render(pref);
        self.preferences.set(pref);
        tracing::debug!(theme = %pref, "theme toggled");
        pref
    }

    /// Apply mode and icon together so they never disagree.
    fn render(&self, pref: ThemePreference) {
        if let Some(root) = self.dom.root() {
            root.set_attribute(selectors::THEME_ATTRIBUTE, pref.as_str());
        }

        let Some(button) = self.dom.find(selectors::THEME_TOGGLE) else {
            return;
        };
        let icon = button.find_child(selectors::THEME_ICON).unwrap_or(button);
        for other in ThemeIcon::ALL {
            icon.remove_class(other.class());
        }
        icon.add_class(pref.icon().class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDom, FakeElement, MemoryStore};

    const KEY: &str = "folio-theme";

    fn page() -> (FakeDom, FakeElement, MemoryStore) {
        let dom = FakeDom::new();
        let icon = FakeElement::new().with_class("bi").with_class("bi-moon-stars");
        dom.insert(
            selectors::THEME_TOGGLE,
            FakeElement::new().with_child(selectors::THEME_ICON, icon.clone()),
        );
        (dom, icon, MemoryStore::default())
    }

    fn controller(dom: &FakeDom, store: &MemoryStore) -> ThemeController<FakeDom, MemoryStore> {
        ThemeController::new(dom.clone(), PreferenceStore::new(store.clone(), KEY))
    }

    fn applied(dom: &FakeDom) -> Option<String> {
        dom.root_element().attribute(selectors::THEME_ATTRIBUTE)
    }

    #[test]
    fn should_apply_light_when_nothing_persisted() {
        let (dom, icon, store) = page();
        let theme = controller(&dom, &store);

        assert_eq!(theme.initialize(), ThemePreference::Light);
        assert_eq!(applied(&dom).as_deref(), Some("light"));
        assert!(icon.has_class("bi-sun"));
        assert!(!icon.has_class("bi-moon-stars"));
        assert!(icon.has_class("bi"));
    }

    #[test]
    fn should_apply_persisted_dark_on_initialize() {
        let (dom, icon, store) = page();
        store.put(KEY, "dark");
        let theme = controller(&dom, &store);

        theme.initialize();

        assert_eq!(theme.current(), ThemePreference::Dark);
        assert_eq!(applied(&dom).as_deref(), Some("dark"));
        assert!(icon.has_class("bi-moon-stars"));
        assert!(!icon.has_class("bi-sun"));
    }

    #[test]
    fn should_keep_icon_mode_and_storage_consistent_when_toggled() {
        let (dom, icon, store) = page();
        let theme = controller(&dom, &store);
        theme.initialize();

        assert_eq!(theme.toggle(), ThemePreference::Dark);

        assert_eq!(applied(&dom).as_deref(), Some("dark"));
        assert!(icon.has_class("bi-moon-stars"));
        assert!(!icon.has_class("bi-sun"));
        assert_eq!(store.value(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn should_restore_original_state_when_toggled_twice() {
        let (dom, icon, store) = page();
        store.put(KEY, "light");
        let theme = controller(&dom, &store);
        theme.initialize();

        theme.toggle();
        theme.toggle();

        assert_eq!(theme.current(), ThemePreference::Light);
        assert_eq!(applied(&dom).as_deref(), Some("light"));
        assert!(icon.has_class("bi-sun"));
        assert_eq!(store.value(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn should_still_toggle_for_session_when_storage_fails() {
        let (dom, _icon, _) = page();
        let theme = controller(&dom, &MemoryStore::failing());
        theme.initialize();

        assert_eq!(theme.toggle(), ThemePreference::Dark);
        assert_eq!(applied(&dom).as_deref(), Some("dark"));
    }

    #[test]
    fn should_style_button_itself_when_it_has_no_icon_child() {
        let dom = FakeDom::new();
        let button = dom.insert(selectors::THEME_TOGGLE, FakeElement::new());
        let theme = controller(&dom, &MemoryStore::default());

        theme.initialize();

        assert!(button.has_class("bi-sun"));
    }

    #[test]
    fn should_apply_mode_when_toggle_button_missing() {
        let dom = FakeDom::new();
        let theme = controller(&dom, &MemoryStore::default());

        theme.initialize();
        theme.toggle();

        assert_eq!(applied(&dom).as_deref(), Some("dark"));
    }
}
