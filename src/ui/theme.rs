//! Theme context module for managing dark/light theme
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence under the `"theme"` key
//! - The `dark` class on the document element

use leptos::prelude::*;

use crate::core::theme::{DARK_CLASS, Theme, ThemePreference, ThemeStore};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// `ThemeStore` backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl ThemeStore for LocalStorage {
    type Error = String;

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage is unavailable".to_string())?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("failed to write {key}: {e:?}"))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme
    pub theme: RwSignal<Theme>,
    /// Whether the current theme is dark
    pub is_dark: Memo<bool>,
}

impl ThemeContext {
    /// Flip between light and dark and persist the result
    pub fn toggle(&self) {
        let mut preference = ThemePreference::load(LocalStorage);
        // the signal is the source of truth; storage may be stale or blocked
        if preference.theme() != self.theme.get_untracked() {
            if let Err(e) = preference.set(self.theme.get_untracked()) {
                leptos::logging::warn!("theme not synced to storage: {}", e);
            }
        }
        match preference.toggle() {
            Ok(next) => self.theme.set(next),
            Err(e) => {
                leptos::logging::warn!("theme not persisted: {}", e);
                self.theme.set(self.theme.get_untracked().toggled());
            }
        }
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.is_dark.get_untracked() {
                            let _ = class_list.add_1(DARK_CLASS);
                        } else {
                            let _ = class_list.remove_1(DARK_CLASS);
                        }
                    }
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = DARK_CLASS;
        }
    }
}

/// Provide theme context to the application.
///
/// Server rendering always starts light; the persisted preference is restored
/// once the page is running in the browser.
pub fn provide_theme_context() -> ThemeContext {
    let theme = RwSignal::new(Theme::default());
    let is_dark = Memo::new(move |_| theme.get().is_dark());

    let ctx = ThemeContext { theme, is_dark };

    // Restore persisted preference (effects only run in the browser)
    Effect::new(move |_| {
        let restored = ThemePreference::load(LocalStorage).theme();
        theme.set(restored);
    });

    // Apply theme class initially and on changes
    Effect::new(move |_| {
        let _ = ctx.is_dark.get();
        ctx.apply_theme_class();
    });

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
