//! Theme preference (light/dark) and its persistence.
//!
//! Storage is abstracted behind [`ThemeStorage`] so the browser build can back
//! it with `localStorage` while tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ContractError;

/// Key of the persisted theme preference
pub const THEME_STORAGE_KEY: &str = "app-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Theme name (used for the `data-theme` attribute and storage)
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than `"dark"` is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            Some("light") | None => ThemeMode::Light,
            Some(other) => {
                log::warn!("Unknown stored theme '{}', using light", other);
                ThemeMode::Light
            }
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn all() -> [ThemeMode; 2] {
        [ThemeMode::Light, ThemeMode::Dark]
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value storage for UI preferences
pub trait ThemeStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ContractError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ContractError>;
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ContractError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ContractError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current theme with write-through persistence
pub struct ThemeStore<S: ThemeStorage> {
    theme: ThemeMode,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Read the stored preference; storage errors fall back to light
    pub fn load(storage: S) -> Self {
        let stored = storage.get_item(THEME_STORAGE_KEY).unwrap_or_else(|e| {
            log::warn!("Failed to read theme preference: {}", e);
            None
        });
        Self {
            theme: ThemeMode::from_stored(stored.as_deref()),
            storage,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Switch theme and persist it
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), ContractError> {
        self.theme = theme;
        self.storage.set_item(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn toggle(&mut self) -> Result<ThemeMode, ContractError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// `(attribute, value)` pair to put on the document root and body
    pub fn data_theme_attribute(&self) -> (&'static str, &'static str) {
        ("data-theme", self.theme.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, ContractError> {
            Err(ContractError::Storage("unavailable".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), ContractError> {
            Err(ContractError::Storage("unavailable".into()))
        }
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("forest")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    }

    #[test]
    fn test_store_persists() {
        let mut store = ThemeStore::load(MemoryStorage::new());
        assert_eq!(store.theme(), ThemeMode::Light);

        store.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(
            store.storage().get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(store.data_theme_attribute(), ("data-theme", "dark"));

        assert_eq!(store.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(
            store.storage().get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_load_existing_preference() {
        let storage = MemoryStorage::new();
        storage.set_item(THEME_STORAGE_KEY, "dark").unwrap();
        let store = ThemeStore::load(storage);
        assert_eq!(store.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_broken_storage() {
        let mut store = ThemeStore::load(BrokenStorage);
        assert_eq!(store.theme(), ThemeMode::Light);
        assert!(store.set_theme(ThemeMode::Dark).is_err());
        // in-memory state still switches
        assert_eq!(store.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}
