//! Config Store
//!
//! The application's single copy of every config resource. Populated once
//! from the API; editors mutate it in place; the save pipeline serializes it
//! back. A slot is `None` until its resource has been loaded or created.

use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::ConfigApi;
use crate::error::{ApiError, LoadError};
use crate::model::{
    AboutSettings, AgentsSettings, BenefitCard, DebugConfig, FaqDocument, HeroSettings, Lang,
    PerformanceCharts, Settings, Strategies, StrategyCardsDocument, ThemeColors, Translations, ContactSettings,
};
use crate::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    pub settings: Option<Settings>,
    pub translations_it: Option<Translations>,
    pub translations_en: Option<Translations>,
    pub strategies: Option<Strategies>,
    pub theme_colors: Option<ThemeColors>,
    pub debug: Option<DebugConfig>,
    pub agents_benefits: Option<Vec<BenefitCard>>,
    pub agents_settings: Option<AgentsSettings>,
    pub contact_settings: Option<ContactSettings>,
    pub about_settings: Option<AboutSettings>,
    pub hero_settings: Option<HeroSettings>,
    pub faqs: Option<FaqDocument>,
    pub performance_charts: Option<PerformanceCharts>,
    pub strategy_cards: Option<StrategyCardsDocument>,
    pub(crate) dirty: bool,
    pub(crate) revision: u64,
}

fn decode<T: DeserializeOwned>(resource: Resource, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode { resource: resource.name(), source })
}

fn encode<T: Serialize>(slot: &Option<T>) -> Option<Result<Value, serde_json::Error>> {
    slot.as_ref().map(serde_json::to_value)
}

impl ConfigStore {
    // ========================
    // Loading
    // ========================

    /// Admin bootstrap: all resources fetched concurrently, any failure
    /// fails the whole batch.
    pub async fn load_admin<A: ConfigApi + ?Sized>(api: &A) -> Result<Self, LoadError> {
        let results = fetch_all(api).await;
        let mut store = Self::default();
        for (resource, result) in results {
            result
                .and_then(|value| store.apply(resource, value))
                .map_err(|source| LoadError { resource: resource.name(), source })?;
        }
        log::info!("loaded {} config resources", Resource::ALL.len());
        Ok(store)
    }

    /// Public page loading: a failed resource leaves its slot empty and the
    /// rest still load.
    pub async fn load_public<A: ConfigApi + ?Sized>(api: &A) -> Self {
        let results = fetch_all(api).await;
        let mut store = Self::default();
        for (resource, result) in results {
            if let Err(e) = result.and_then(|value| store.apply(resource, value)) {
                log::warn!("config resource {} unavailable: {}", resource, e);
            }
        }
        store
    }

    /// Decode `value` into the slot for `resource`, replacing it.
    pub fn apply(&mut self, resource: Resource, value: Value) -> Result<(), ApiError> {
        match resource {
            Resource::Settings => self.settings = Some(decode(resource, value)?),
            Resource::Translations(Lang::It) => self.translations_it = Some(decode(resource, value)?),
            Resource::Translations(Lang::En) => self.translations_en = Some(decode(resource, value)?),
            Resource::Strategies => self.strategies = Some(decode(resource, value)?),
            Resource::ThemeColors => self.theme_colors = Some(decode(resource, value)?),
            Resource::Debug => self.debug = Some(decode(resource, value)?),
            Resource::AgentsBenefits => self.agents_benefits = Some(decode(resource, value)?),
            Resource::AgentsSettings => self.agents_settings = Some(decode(resource, value)?),
            Resource::ContactSettings => self.contact_settings = Some(decode(resource, value)?),
            Resource::AboutSettings => self.about_settings = Some(decode(resource, value)?),
            Resource::HeroSettings => self.hero_settings = Some(decode(resource, value)?),
            Resource::Faqs => self.faqs = Some(decode(resource, value)?),
            Resource::PerformanceCharts => self.performance_charts = Some(decode(resource, value)?),
            Resource::StrategyCards => self.strategy_cards = Some(decode(resource, value)?),
        }
        Ok(())
    }

    /// Whole-resource payload for a write, `None` when the slot is empty
    pub fn payload(&self, resource: Resource) -> Option<Result<Value, serde_json::Error>> {
        match resource {
            Resource::Settings => encode(&self.settings),
            Resource::Translations(Lang::It) => encode(&self.translations_it),
            Resource::Translations(Lang::En) => encode(&self.translations_en),
            Resource::Strategies => encode(&self.strategies),
            Resource::ThemeColors => encode(&self.theme_colors),
            Resource::Debug => encode(&self.debug),
            Resource::AgentsBenefits => encode(&self.agents_benefits),
            Resource::AgentsSettings => encode(&self.agents_settings),
            Resource::ContactSettings => encode(&self.contact_settings),
            Resource::AboutSettings => encode(&self.about_settings),
            Resource::HeroSettings => encode(&self.hero_settings),
            Resource::Faqs => encode(&self.faqs),
            Resource::PerformanceCharts => encode(&self.performance_charts),
            Resource::StrategyCards => encode(&self.strategy_cards),
        }
    }

    pub fn is_loaded(&self, resource: Resource) -> bool {
        match resource {
            Resource::Settings => self.settings.is_some(),
            Resource::Translations(Lang::It) => self.translations_it.is_some(),
            Resource::Translations(Lang::En) => self.translations_en.is_some(),
            Resource::Strategies => self.strategies.is_some(),
            Resource::ThemeColors => self.theme_colors.is_some(),
            Resource::Debug => self.debug.is_some(),
            Resource::AgentsBenefits => self.agents_benefits.is_some(),
            Resource::AgentsSettings => self.agents_settings.is_some(),
            Resource::ContactSettings => self.contact_settings.is_some(),
            Resource::AboutSettings => self.about_settings.is_some(),
            Resource::HeroSettings => self.hero_settings.is_some(),
            Resource::Faqs => self.faqs.is_some(),
            Resource::PerformanceCharts => self.performance_charts.is_some(),
            Resource::StrategyCards => self.strategy_cards.is_some(),
        }
    }

    pub fn translations(&self, lang: Lang) -> Option<&Translations> {
        match lang {
            Lang::It => self.translations_it.as_ref(),
            Lang::En => self.translations_en.as_ref(),
        }
    }

    /// Set one translation key and mark the store dirty
    pub fn set_translation(&mut self, lang: Lang, key: &str, value: String) {
        let table = match lang {
            Lang::It => self.translations_it.get_or_insert_with(Translations::new),
            Lang::En => self.translations_en.get_or_insert_with(Translations::new),
        };
        table.insert(key.to_string(), value);
        self.mark_dirty();
    }

    /// Set one theme colour variable and mark the store dirty
    pub fn set_theme_color(&mut self, theme: &str, variable: &str, color: String) {
        self.theme_colors
            .get_or_insert_with(ThemeColors::new)
            .entry(theme.to_string())
            .or_default()
            .insert(variable.to_string(), color);
        self.mark_dirty();
    }

    // ========================
    // Dirty tracking
    // ========================

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record an unsaved edit
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Counter bumped by every edit; a save only clears the dirty flag if
    /// no edit happened while it was in flight.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn mark_saved(&mut self, revision: u64) {
        if self.revision == revision {
            self.dirty = false;
        }
    }
}

async fn fetch_all<A: ConfigApi + ?Sized>(api: &A) -> Vec<(Resource, Result<Value, ApiError>)> {
    join_all(Resource::ALL.iter().map(|&resource| async move { (resource, api.fetch(resource).await) })).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_then_payload() {
        let mut store = ConfigStore::default();
        store
            .apply(Resource::AgentsBenefits, json!([{ "id": 1, "icon": "fas fa-star", "title": { "it": "a", "en": "b" } }]))
            .unwrap();
        let payload = store.payload(Resource::AgentsBenefits).unwrap().unwrap();
        assert_eq!(payload[0]["enabled"], json!(true));
        assert!(store.payload(Resource::Faqs).is_none());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_decode_failure_names_resource() {
        let mut store = ConfigStore::default();
        let err = store.apply(Resource::Debug, json!({ "levels": "loud" })).unwrap_err();
        assert!(err.to_string().starts_with("invalid debug payload"));
        assert!(store.debug.is_none());
    }

    #[test]
    fn test_edits_mark_dirty() {
        let mut store = ConfigStore::default();
        store.set_translation(Lang::En, "hero.cta", "Start".into());
        assert!(store.is_dirty());
        let rev = store.revision();
        store.set_theme_color("dark", "--accent", "#C8A25E".into());
        assert_eq!(store.theme_colors.as_ref().unwrap()["dark"]["--accent"], "#C8A25E");
        store.mark_saved(rev);
        assert!(store.is_dirty());
        store.mark_saved(store.revision());
        assert!(!store.is_dirty());
    }
}
