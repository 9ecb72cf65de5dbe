mod common;

use serde_json::json;

use common::MockApi;
use site_config::api::WriteResponse;
use site_config::fallback::{TRANSLATIONS_IT_KEY, SETTINGS_KEY};
use site_config::model::{Lang, RiskTier};
use site_config::save::plan_all;
use site_config::{save_all, save_section, ConfigStore, FallbackStorage, MemoryStorage, Resource, SaveError};

/// Store with every "save all" resource populated except strategy cards
async fn setup(api: &MockApi) -> ConfigStore {
    let mut store = ConfigStore::load_admin(api).await.unwrap();
    store.strategy_cards = None;
    store.set_translation(Lang::It, "hero.title", "Benvenuti".into());
    store
}

#[tokio::test]
async fn test_failure_still_sends_every_other_resource_once() {
    let mut api = MockApi::with_all_resources();
    let loaded = setup(&api).await;
    let plan = plan_all(&loaded).unwrap();
    assert_eq!(plan.requests().len(), 9);
    let fifth = plan.requests()[4].resource;
    api.respond(fifth, WriteResponse { status: 500, ack: None });

    let mut store = loaded.clone();
    let fallback = MemoryStorage::new();
    let err = save_all(&mut store, &api, &fallback).await.unwrap_err();

    assert_eq!(err, SaveError::Failed(vec!["HTTP 500".to_string()]));
    for resource in plan.resources() {
        assert_eq!(api.writes_to(resource), 1, "{} written once", resource);
    }
    assert_eq!(api.writes.borrow().len(), 9);
    assert!(store.is_dirty());
    assert!(fallback.snapshot().is_empty());
}

#[tokio::test]
async fn test_errors_are_aggregated() {
    let mut api = MockApi::with_all_resources();
    let mut store = setup(&api).await;
    api.respond(Resource::Debug, WriteResponse::failed(200, Some("debug locked")));
    api.respond(Resource::Faqs, WriteResponse::failed(403, None));

    let err = save_all(&mut store, &api, &MemoryStorage::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "debug locked, HTTP 403");
}

#[tokio::test]
async fn test_success_clears_dirty_and_mirrors() {
    let api = MockApi::with_all_resources();
    let mut store = setup(&api).await;
    let fallback = MemoryStorage::new();

    let report = save_all(&mut store, &api, &fallback).await.unwrap();
    assert_eq!(report.saved.len(), 9);
    assert!(!report.saved.contains(&Resource::StrategyCards));
    assert_eq!(api.writes_to(Resource::StrategyCards), 0);
    assert!(!store.is_dirty());

    let mirrored = fallback.get(TRANSLATIONS_IT_KEY).unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&mirrored).unwrap(), json!({ "hero.title": "Benvenuti" }));
    assert!(fallback.get(SETTINGS_KEY).is_some());
}

#[tokio::test]
async fn test_edit_during_save_keeps_dirty() {
    let api = MockApi::with_all_resources();
    let mut store = setup(&api).await;

    let plan = plan_all(&store).unwrap();
    let outcome = plan.execute(&api).await;
    store.attachments(RiskTier::High).add().unwrap();
    outcome.finish(&mut store, &MemoryStorage::new()).unwrap();

    assert!(store.is_dirty());
}

#[tokio::test]
async fn test_nothing_to_save() {
    let api = MockApi::new();
    let mut store = ConfigStore::default();
    assert_eq!(save_all(&mut store, &api, &MemoryStorage::new()).await, Err(SaveError::NothingToSave));
    assert!(api.writes.borrow().is_empty());
}

#[tokio::test]
async fn test_section_save_writes_one_resource() {
    let api = MockApi::with_all_resources();
    let mut store = setup(&api).await;
    store.about_features().add().unwrap();

    save_section(&mut store, &api, Resource::AboutSettings, &MemoryStorage::new()).await.unwrap();

    let writes = api.writes.borrow();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, Resource::AboutSettings);
    assert_eq!(writes[0].1["features"][0]["icon"], "check-circle");
    assert!(!store.is_dirty());
}
