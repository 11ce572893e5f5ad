//! Light/dark theme preference and its persistence.
//!
//! The preference is stored as a single key-value pair (`"theme"` →
//! `"dark"` | `"light"`). Storage sits behind [`ThemeStore`] so the browser's
//! localStorage and the in-memory store used in tests are interchangeable.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Key under which the theme is persisted
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root for dark mode
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Interpret a stored value; missing or unrecognised means light
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}

/// Minimal key-value store holding the theme flag
pub trait ThemeStore {
    type Error: std::fmt::Debug;

    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Store backed by a plain map
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme plus the store it is mirrored into
#[derive(Debug)]
pub struct ThemePreference<S: ThemeStore> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Restore the persisted theme from `store`
    pub fn load(store: S) -> Self {
        let stored = store.get(THEME_STORAGE_KEY);
        Self {
            theme: Theme::from_stored(stored.as_deref()),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<(), S::Error> {
        self.theme = theme;
        self.store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    /// Flip the theme and persist the new value
    pub fn toggle(&mut self) -> Result<Theme, S::Error> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(pref: &ThemePreference<MemoryStore>) -> Option<String> {
        pref.store().get(THEME_STORAGE_KEY)
    }

    #[test]
    fn test_missing_key_defaults_to_light() {
        let pref = ThemePreference::load(MemoryStore::new());
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn test_restores_dark() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        let pref = ThemePreference::load(store);
        assert_eq!(pref.theme(), Theme::Dark);
    }

    #[test]
    fn test_unrecognised_value_is_light() {
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_latest_value() {
        let mut pref = ThemePreference::load(MemoryStore::new());

        assert_eq!(pref.toggle().unwrap(), Theme::Dark);
        assert_eq!(stored(&pref).as_deref(), Some("dark"));

        assert_eq!(pref.toggle().unwrap(), Theme::Light);
        assert_eq!(stored(&pref).as_deref(), Some("light"));
    }

    #[test]
    fn test_double_toggle_restores_original() {
        for initial in [Theme::Light, Theme::Dark] {
            let mut store = MemoryStore::new();
            store.set(THEME_STORAGE_KEY, initial.as_str()).unwrap();
            let mut pref = ThemePreference::load(store);

            pref.toggle().unwrap();
            pref.toggle().unwrap();

            assert_eq!(pref.theme(), initial);
            assert_eq!(stored(&pref).as_deref(), Some(initial.as_str()));
        }
    }

    /// Readable store that rejects every write, like blocked localStorage
    struct ReadOnlyStore(Option<String>);

    impl ThemeStore for ReadOnlyStore {
        type Error = &'static str;

        fn get(&self, _key: &str) -> Option<String> {
            self.0.clone()
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            Err("storage is read-only")
        }
    }

    #[test]
    fn test_failed_write_is_reported() {
        let mut pref = ThemePreference::load(ReadOnlyStore(Some("light".into())));

        assert_eq!(pref.set(Theme::Dark), Err("storage is read-only"));
        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(pref.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        assert_eq!(pref.toggle(), Err("storage is read-only"));
    }

    #[test]
    fn test_from_dark() {
        assert_eq!(Theme::from_dark(true), Theme::Dark);
        assert_eq!(Theme::from_dark(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
