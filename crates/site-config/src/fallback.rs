//! Local Fallback Storage
//!
//! The last successfully saved translations and settings are mirrored into
//! client storage so the public page can still render text when the API is
//! unreachable. Nothing here is ever written back to the server.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::Lang;
use crate::resource::Resource;
use crate::store::ConfigStore;

pub const TRANSLATIONS_IT_KEY: &str = "translations_it";
pub const TRANSLATIONS_EN_KEY: &str = "translations_en";
pub const SETTINGS_KEY: &str = "config_settings";

/// Key/value string storage (browser `localStorage` in the admin panel)
pub trait FallbackStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Storage key mirroring a resource, if that resource is mirrored at all
pub fn storage_key(resource: Resource) -> Option<&'static str> {
    match resource {
        Resource::Translations(Lang::It) => Some(TRANSLATIONS_IT_KEY),
        Resource::Translations(Lang::En) => Some(TRANSLATIONS_EN_KEY),
        Resource::Settings => Some(SETTINGS_KEY),
        _ => None,
    }
}

/// Mirror one saved resource body. Storage failures are logged only.
pub(crate) fn mirror(storage: &dyn FallbackStorage, resource: Resource, body: &Value) {
    let Some(key) = storage_key(resource) else {
        return;
    };
    if let Err(e) = storage.set(key, &body.to_string()) {
        log::warn!("could not mirror {} into local storage: {}", resource, e);
    }
}

impl ConfigStore {
    /// Fill translation and settings slots that are still empty from the
    /// local mirror. Unreadable entries are skipped.
    pub fn apply_fallback(&mut self, storage: &dyn FallbackStorage) -> usize {
        let mut restored = 0;
        for resource in [Resource::Translations(Lang::It), Resource::Translations(Lang::En), Resource::Settings] {
            if self.is_loaded(resource) {
                continue;
            }
            let Some(raw) = storage_key(resource).and_then(|key| storage.get(key)) else {
                continue;
            };
            let parsed = serde_json::from_str::<Value>(&raw)
                .map_err(|e| e.to_string())
                .and_then(|value| self.apply(resource, value).map_err(|e| e.to_string()));
            match parsed {
                Ok(()) => restored += 1,
                Err(e) => log::warn!("ignoring local copy of {}: {}", resource, e),
            }
        }
        restored
    }
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl FallbackStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_fills_only_empty_slots() {
        let storage = MemoryStorage::new();
        storage.set(TRANSLATIONS_IT_KEY, r#"{"nav.home":"Home"}"#).unwrap();
        storage.set(TRANSLATIONS_EN_KEY, "not json").unwrap();
        storage.set(SETTINGS_KEY, r#"{"site":{"title":"Cached"}}"#).unwrap();

        let mut store = ConfigStore::default();
        store.translations_en = Some([("nav.home".to_string(), "Home".to_string())].into());
        let restored = store.apply_fallback(&storage);

        assert_eq!(restored, 2);
        assert_eq!(store.translations_it.as_ref().unwrap()["nav.home"], "Home");
        assert_eq!(store.settings.as_ref().unwrap().site.title, "Cached");
        assert!(!store.is_dirty());
    }
}
