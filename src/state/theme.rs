//! Theme Preference
//!
//! Dark/light preference persisted in local storage and reflected onto the
//! document. The persistence side is behind a small trait so the state
//! machine can be exercised without a browser.

/// Storage key for the persisted preference
pub const THEME_KEY: &str = "theme";

/// The two visual modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve a stored value. Only the literal `"dark"` selects dark
    /// mode; absence or anything else falls back to light.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Map the toggle control's checked flag
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The literal persisted value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Text shown next to the toggle control
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark Mode",
            Theme::Light => "Light Mode",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Injected key-value persistence capability
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage` backed store. Environments without storage
/// degrade to the defaults rather than erroring.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}

/// Synchronizes the persisted preference with the current theme
pub struct ThemeController<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Theme to apply on load, from the persisted preference
    pub fn initial(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_KEY).as_deref())
    }

    /// Persist a newly selected theme
    pub fn set(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for local storage
    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn stored_dark_resolves_to_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn anything_else_resolves_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("midnight")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn checked_flag_maps_to_theme() {
        assert_eq!(Theme::from_checked(true), Theme::Dark);
        assert_eq!(Theme::from_checked(false), Theme::Light);
    }

    #[test]
    fn labels_follow_the_mode() {
        assert_eq!(Theme::Dark.label(), "Dark Mode");
        assert_eq!(Theme::Light.label(), "Light Mode");
    }

    #[test]
    fn controller_defaults_to_light_on_empty_store() {
        let controller = ThemeController::new(MemoryStore::default());
        assert_eq!(controller.initial(), Theme::Light);
    }

    #[test]
    fn controller_restores_persisted_dark() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "dark");

        let controller = ThemeController::new(store);
        assert_eq!(controller.initial(), Theme::Dark);
        assert!(controller.initial().is_dark());
    }

    #[test]
    fn toggling_persists_the_literal_strings() {
        let controller = ThemeController::new(MemoryStore::default());

        controller.set(Theme::from_checked(true));
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(controller.initial(), Theme::Dark);

        controller.set(Theme::from_checked(false));
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(controller.initial(), Theme::Light);
    }
}
