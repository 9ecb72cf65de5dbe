//! Save Orchestrator
//!
//! A save is planned from the store, executed against the API, then
//! finished back into the store. The three steps are separate so that no
//! borrow of the store is held across the network round trip; edits made
//! while a save is in flight keep the store dirty.

use futures::future::join_all;
use serde_json::Value;

use crate::api::ConfigApi;
use crate::error::SaveError;
use crate::fallback::{mirror, FallbackStorage};
use crate::resource::Resource;
use crate::store::ConfigStore;

#[derive(Debug, Clone, PartialEq)]
pub struct WriteRequest {
    pub resource: Resource,
    pub body: Value,
}

/// Serialized snapshot of the resources to write
#[derive(Debug, Clone, PartialEq)]
pub struct SavePlan {
    revision: u64,
    requests: Vec<WriteRequest>,
}

/// Plan a "save all": one request per populated resource of
/// [`Resource::SAVE_ALL`], in that order.
pub fn plan_all(store: &ConfigStore) -> Result<SavePlan, SaveError> {
    plan(store, &Resource::SAVE_ALL)
}

/// Plan the save of a single section resource
pub fn plan_section(store: &ConfigStore, resource: Resource) -> Result<SavePlan, SaveError> {
    plan(store, &[resource])
}

fn plan(store: &ConfigStore, resources: &[Resource]) -> Result<SavePlan, SaveError> {
    let mut requests = Vec::new();
    let mut errors = Vec::new();
    for &resource in resources {
        match store.payload(resource) {
            Some(Ok(body)) => requests.push(WriteRequest { resource, body }),
            Some(Err(e)) => errors.push(format!("{}: {}", resource, e)),
            None => {}
        }
    }
    if !errors.is_empty() {
        return Err(SaveError::Failed(errors));
    }
    if requests.is_empty() {
        return Err(SaveError::NothingToSave);
    }
    Ok(SavePlan { revision: store.revision(), requests })
}

impl SavePlan {
    pub fn requests(&self) -> &[WriteRequest] {
        &self.requests
    }

    pub fn resources(&self) -> Vec<Resource> {
        self.requests.iter().map(|r| r.resource).collect()
    }

    /// Send every request concurrently, each exactly once. Failures are
    /// collected, never short-circuited.
    pub async fn execute<A: ConfigApi + ?Sized>(self, api: &A) -> SaveOutcome {
        let results = join_all(self.requests.iter().map(|request| async move {
            match api.store(request.resource, &request.body).await {
                Ok(response) if response.is_success() => None,
                Ok(response) => Some(response.error_text()),
                Err(e) => Some(e.to_string()),
            }
        }))
        .await;

        let errors: Vec<String> = results.into_iter().flatten().collect();
        SaveOutcome { plan: self, errors }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    plan: SavePlan,
    errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: Vec<Resource>,
}

impl SaveOutcome {
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Apply the outcome to the store. On full success the mirrored
    /// resources are copied into `fallback` and the dirty flag is cleared,
    /// unless the store was edited after the plan was taken.
    pub fn finish(self, store: &mut ConfigStore, fallback: &dyn FallbackStorage) -> Result<SaveReport, SaveError> {
        if !self.errors.is_empty() {
            log::warn!("save failed for {} of {} resources", self.errors.len(), self.plan.requests.len());
            return Err(SaveError::Failed(self.errors));
        }
        for request in &self.plan.requests {
            mirror(fallback, request.resource, &request.body);
        }
        store.mark_saved(self.plan.revision);
        log::info!("saved {} config resources", self.plan.requests.len());
        Ok(SaveReport { saved: self.plan.resources() })
    }
}

/// Persist every populated top-level resource
pub async fn save_all<A: ConfigApi + ?Sized>(
    store: &mut ConfigStore,
    api: &A,
    fallback: &dyn FallbackStorage,
) -> Result<SaveReport, SaveError> {
    let plan = plan_all(store)?;
    plan.execute(api).await.finish(store, fallback)
}

/// Persist one section resource (agents, contact, about or hero settings)
pub async fn save_section<A: ConfigApi + ?Sized>(
    store: &mut ConfigStore,
    api: &A,
    resource: Resource,
    fallback: &dyn FallbackStorage,
) -> Result<SaveReport, SaveError> {
    let plan = plan_section(store, resource)?;
    plan.execute(api).await.finish(store, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DebugConfig, Lang, Settings, Translations};

    #[test]
    fn test_plan_skips_absent_resources() {
        let mut store = ConfigStore::default();
        store.debug = Some(DebugConfig::default());
        store.settings = Some(Settings::default());
        store.translations_en = Some(Translations::new());
        // Section resources are never part of "save all"
        store.hero_settings = Some(Default::default());

        let plan = plan_all(&store).unwrap();
        assert_eq!(
            plan.resources(),
            vec![Resource::Settings, Resource::Translations(Lang::En), Resource::Debug]
        );
    }

    #[test]
    fn test_empty_store_has_nothing_to_save() {
        assert_eq!(plan_all(&ConfigStore::default()), Err(SaveError::NothingToSave));
        assert_eq!(
            plan_section(&ConfigStore::default(), Resource::AboutSettings),
            Err(SaveError::NothingToSave)
        );
    }

    #[test]
    fn test_plan_captures_revision() {
        let mut store = ConfigStore::default();
        store.set_translation(Lang::It, "nav.home", "Home".into());
        let plan = plan_all(&store).unwrap();
        assert_eq!(plan.revision, store.revision());
        assert_eq!(plan.requests()[0].body["nav.home"], "Home");
    }
}
