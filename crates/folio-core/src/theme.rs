//! Light/dark theme preference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color scheme of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse the persisted form. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Stored preference if valid, otherwise the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the theme preference is persisted.
pub trait ThemeStore {
    /// The raw stored value, if any.
    fn load(&self) -> Option<String>;

    fn save(&mut self, value: &str);
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, value: &str) {
        (**self).save(value);
    }
}

/// Non-persistent store.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

/// Current theme backed by a store.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Read the initial theme from `store`, falling back to the system preference.
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let stored = store.load();
        if let Some(value) = stored.as_deref().filter(|value| Theme::parse(value).is_none()) {
            log::warn!("ignoring stored theme {value:?}");
        }
        let theme = Theme::resolve(stored.as_deref(), prefers_dark);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.save(theme.as_str());
        log::debug!("theme set to {theme}");
    }

    /// Flip and persist. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggle());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("garbage"), false), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut preference = ThemePreference::load(MemoryThemeStore::new(), false);
        assert_eq!(preference.theme(), Theme::Light);

        assert_eq!(preference.toggle(), Theme::Dark);
        assert_eq!(preference.store().load().as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_value_wins() {
        let preference = ThemePreference::load(MemoryThemeStore::with_value("dark"), false);
        assert!(preference.theme().is_dark());
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let parsed: Wrapper = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
    }
}
