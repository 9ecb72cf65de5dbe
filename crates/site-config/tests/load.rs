mod common;

use serde_json::json;

use common::MockApi;
use site_config::fallback::TRANSLATIONS_EN_KEY;
use site_config::model::Lang;
use site_config::{ConfigStore, FallbackStorage, MemoryStorage, Resource};

#[tokio::test]
async fn test_admin_load_populates_every_slot() {
    let api = MockApi::with_all_resources();
    let store = ConfigStore::load_admin(&api).await.unwrap();
    for resource in Resource::ALL {
        assert!(store.is_loaded(resource), "{} loaded", resource);
    }
    assert!(!store.is_dirty());
}

#[tokio::test]
async fn test_admin_load_is_all_or_nothing() {
    let mut api = MockApi::with_all_resources();
    api.unreachable.push(Resource::Faqs);
    let err = ConfigStore::load_admin(&api).await.unwrap_err();
    assert_eq!(err.resource, "faqs");
    assert_eq!(err.to_string(), "failed to load faqs: HTTP 503");
}

#[tokio::test]
async fn test_admin_load_rejects_malformed_payload() {
    let mut api = MockApi::with_all_resources();
    api.payloads.insert("agents-benefits", json!({ "not": "a list" }));
    let err = ConfigStore::load_admin(&api).await.unwrap_err();
    assert_eq!(err.resource, "agents-benefits");
}

#[tokio::test]
async fn test_public_load_fails_open_with_fallback() {
    let mut api = MockApi::with_all_resources();
    api.unreachable.push(Resource::Translations(Lang::En));
    api.unreachable.push(Resource::HeroSettings);

    let mut store = ConfigStore::load_public(&api).await;
    assert!(store.is_loaded(Resource::Settings));
    assert!(!store.is_loaded(Resource::HeroSettings));
    assert!(store.translations(Lang::En).is_none());

    let fallback = MemoryStorage::new();
    fallback.set(TRANSLATIONS_EN_KEY, r#"{"nav.home":"Home"}"#).unwrap();
    assert_eq!(store.apply_fallback(&fallback), 1);
    assert_eq!(store.translations(Lang::En).unwrap()["nav.home"], "Home");
    assert!(!store.is_loaded(Resource::HeroSettings));
}
