mod common;

use serde_json::json;

use common::MockApi;
use site_config::editor::{
    discard_attachment_file, upload_attachment, AttachmentField, BenefitField, ContactField, HeroCtaField,
};
use site_config::model::{CtaStyle, Lang, LinkType, RiskTier};
use site_config::{Confirmation, ConfigStore, EditError, FieldValue, Resource};

fn setup() -> ConfigStore {
    let mut store = ConfigStore::default();
    store
        .apply(Resource::AgentsBenefits, json!([{ "id": 1, "icon": "fas fa-bolt" }, { "id": 3 }]))
        .unwrap();
    store
}

#[test]
fn test_new_id_is_max_plus_one() {
    let mut store = setup();
    let mut benefits = store.benefits();
    let added = benefits.add().unwrap();
    assert_eq!(added.id, 4);
    assert!(store.is_dirty());
}

#[test]
fn test_benefit_cap() {
    let mut store = setup();
    let mut benefits = store.benefits();
    for _ in 0..4 {
        benefits.add().unwrap();
    }
    assert_eq!(benefits.len(), 6);
    let err = benefits.add().unwrap_err();
    assert_eq!(err, EditError::CapReached { kind: "benefit cards", cap: 6 });
    assert_eq!(err.to_string(), "Maximum 6 benefit cards allowed");
    assert_eq!(benefits.len(), 6);
}

#[test]
fn test_faq_at_cap_disables_add() {
    let items: Vec<_> = (1..=10).map(|id| json!({ "id": id, "question": "q", "answer": "a" })).collect();
    let mut store = ConfigStore::default();
    store.apply(Resource::Faqs, json!({ "it": { "items": items } })).unwrap();
    let revision = store.revision();

    let mut faq = store.faq_items(Lang::It);
    assert!(faq.add().is_err());
    assert_eq!(faq.len(), 10);
    let state = faq.add_state();
    assert!(state.disabled());
    assert_eq!(state.label(), "10/10");
    assert_eq!(store.revision(), revision);
    assert!(!store.is_dirty());

    // The other language has its own list
    assert_eq!(store.faq_items(Lang::En).add_state().label(), "0/10");
}

#[test]
fn test_hero_cta_three_then_rejected() {
    let mut store = ConfigStore::default();
    let mut buttons = store.hero_cta_buttons();
    for _ in 0..3 {
        buttons.add().unwrap();
    }
    assert!(matches!(buttons.add(), Err(EditError::CapReached { cap: 3, .. })));
    assert_eq!(buttons.len(), 3);
    let ids: Vec<u32> = buttons.items().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_hero_stat_cap() {
    let mut store = ConfigStore::default();
    let mut stats = store.hero_stats();
    for _ in 0..4 {
        stats.add().unwrap();
    }
    let err = stats.add().unwrap_err();
    assert_eq!(err, EditError::CapReached { kind: "stats", cap: 4 });
    assert_eq!(stats.len(), 4);
}

#[test]
fn test_strategy_card_cap() {
    let mut store = ConfigStore::default();
    let mut cards = store.strategy_cards(Lang::En);
    for _ in 0..5 {
        cards.add().unwrap();
    }
    let err = cards.add().unwrap_err();
    assert_eq!(err, EditError::CapReached { kind: "strategy cards", cap: 5 });
    assert_eq!(cards.len(), 5);
    assert_eq!(store.strategy_cards(Lang::It).len(), 0);
}

#[test]
fn test_add_after_max_id_is_rejected() {
    let mut store = ConfigStore::default();
    store.apply(Resource::AgentsBenefits, json!([{ "id": u32::MAX }])).unwrap();
    let revision = store.revision();

    let mut benefits = store.benefits();
    assert_eq!(benefits.add().unwrap_err(), EditError::IdExhausted("benefit cards"));
    assert_eq!(benefits.len(), 1);
    assert_eq!(store.revision(), revision);
    assert!(!store.is_dirty());
}

#[test]
fn test_faq_item_without_id_loads() {
    let mut store = ConfigStore::default();
    store
        .apply(Resource::Faqs, json!({ "it": { "items": [{ "question": "q", "answer": "a" }] } }))
        .unwrap();
    let mut faq = store.faq_items(Lang::It);
    assert_eq!(faq.items()[0].id, 0);
    assert_eq!(faq.add().unwrap().id, 1);
}

#[test]
fn test_toggle_twice_restores_enabled() {
    let mut store = setup();
    let mut benefits = store.benefits();
    assert!(!benefits.toggle(&1).unwrap());
    assert!(benefits.toggle(&1).unwrap());
    assert!(benefits.get(&1).unwrap().enabled);
}

#[test]
fn test_faq_items_cannot_toggle() {
    let mut store = ConfigStore::default();
    let mut faq = store.faq_items(Lang::En);
    let id = faq.add().unwrap().id;
    assert_eq!(faq.toggle(&id), Err(EditError::NotToggleable("FAQ items")));
}

#[test]
fn test_remove_twice_is_noop() {
    let mut store = setup();
    let mut benefits = store.benefits();
    let removed = benefits.remove(&3, Confirmation::Confirmed).unwrap();
    assert_eq!(removed.map(|b| b.id), Some(3));
    assert_eq!(benefits.remove(&3, Confirmation::Confirmed).unwrap(), None);
    assert_eq!(benefits.len(), 1);
}

#[test]
fn test_declined_remove_changes_nothing() {
    let mut store = setup();
    let mut benefits = store.benefits();
    assert_eq!(benefits.remove(&1, Confirmation::Declined), Err(EditError::NotConfirmed));
    assert_eq!(benefits.len(), 2);
    assert!(!store.is_dirty());
}

#[test]
fn test_update_title_leaves_other_language() {
    let mut store = setup();
    let mut benefits = store.benefits();
    benefits.update(&1, BenefitField::Title(Lang::En), "Speed").unwrap();
    benefits.update_path(&1, "title.it", "Velocità").unwrap();

    assert_eq!(benefits.read_path(&1, "title.it").unwrap(), Some(FieldValue::Text("Velocità".into())));
    assert_eq!(benefits.read(&1, BenefitField::Title(Lang::En)), Some(FieldValue::Text("Speed".into())));
}

#[test]
fn test_invalid_paths_are_rejected() {
    let mut store = setup();
    let mut benefits = store.benefits();
    assert!(matches!(benefits.update_path(&1, "title.it.extra", "x"), Err(EditError::InvalidPath { .. })));
    assert!(matches!(benefits.update_path(&1, "colour", "x"), Err(EditError::InvalidPath { .. })));
    assert!(matches!(benefits.update(&9, BenefitField::Icon, "x"), Err(EditError::NotFound { .. })));
    assert!(!store.is_dirty());
}

#[test]
fn test_enum_fields_validate_values() {
    let mut store = ConfigStore::default();
    let mut contacts = store.contact_items();
    let id = contacts.add().unwrap().id;
    contacts.update(&id, ContactField::LinkType, "phone").unwrap();
    assert_eq!(contacts.get(&id).unwrap().link_type, LinkType::Phone);
    assert!(contacts.update(&id, ContactField::LinkType, "fax").is_err());

    let mut buttons = store.hero_cta_buttons();
    let id = buttons.add().unwrap().id;
    buttons.update(&id, HeroCtaField::Style, "secondary").unwrap();
    assert_eq!(buttons.get(&id).unwrap().style, CtaStyle::Secondary);
}

#[test]
fn test_strategy_cards_get_unique_ids() {
    let mut store = ConfigStore::default();
    let mut cards = store.strategy_cards(Lang::It);
    let first = cards.add().unwrap().id.clone();
    let second = cards.add().unwrap().id.clone();
    assert_ne!(first, second);
    assert!(first.starts_with("card-"));
    assert_eq!(cards.items()[1].title, "Nuova Strategia 2");
}

#[tokio::test]
async fn test_attachment_upload_and_cleanup() {
    let api = MockApi::new();
    let mut store = ConfigStore::default();
    let id = store.attachments(RiskTier::Medium).add().unwrap().id;

    let uploaded = upload_attachment(&api, "Factsheet.PDF", vec![1, 2, 3]).await.unwrap();
    store.attach_uploaded(RiskTier::Medium, id, &uploaded).unwrap();

    let mut files = store.attachments(RiskTier::Medium);
    assert_eq!(
        files.read(&id, AttachmentField::FilePath),
        Some(FieldValue::Text("uploads/strategies/Factsheet.PDF".into()))
    );
    assert_eq!(files.get(&id).unwrap().file_type, "pdf");

    let removed = files.remove(&id, Confirmation::Confirmed).unwrap().unwrap();
    discard_attachment_file(&api, &removed).await;
    assert_eq!(api.deleted.borrow().as_slice(), ["uploads/strategies/Factsheet.PDF"]);
}

#[tokio::test]
async fn test_rejected_upload_surfaces_server_error() {
    let mut api = MockApi::new();
    api.upload = Some(site_config::UploadResponse {
        success: false,
        error: Some("File too large".into()),
        ..Default::default()
    });
    let err = upload_attachment(&api, "chart.png", Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "File too large");
}

#[tokio::test]
async fn test_unsupported_attachment_never_reaches_server() {
    let api = MockApi::new();
    let err = upload_attachment(&api, "deck.pptx", Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "unsupported file type: pptx");
}
