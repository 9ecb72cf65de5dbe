//! In-memory config API shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use site_config::api::{ConfigApi, UploadResponse, WriteResponse};
use site_config::{ApiError, Resource};

#[derive(Default)]
pub struct MockApi {
    /// GET payloads keyed by resource name
    pub payloads: BTreeMap<&'static str, Value>,
    /// Resources whose GET fails
    pub unreachable: Vec<Resource>,
    /// Canned write responses; anything missing answers 200 `{success: true}`
    pub write_responses: BTreeMap<&'static str, WriteResponse>,
    pub writes: RefCell<Vec<(Resource, Value)>>,
    pub deleted: RefCell<Vec<String>>,
    pub upload: Option<UploadResponse>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every resource answers with a minimal valid payload
    pub fn with_all_resources() -> Self {
        let mut api = Self::new();
        for resource in Resource::ALL {
            let body = match resource {
                Resource::AgentsBenefits => json!([]),
                _ => json!({}),
            };
            api.payloads.insert(resource.name(), body);
        }
        api
    }

    pub fn respond(&mut self, resource: Resource, response: WriteResponse) {
        self.write_responses.insert(resource.name(), response);
    }

    pub fn writes_to(&self, resource: Resource) -> usize {
        self.writes.borrow().iter().filter(|(r, _)| *r == resource).count()
    }
}

#[async_trait(?Send)]
impl ConfigApi for MockApi {
    async fn fetch(&self, resource: Resource) -> Result<Value, ApiError> {
        if self.unreachable.contains(&resource) {
            return Err(ApiError::Status(503));
        }
        self.payloads.get(resource.name()).cloned().ok_or(ApiError::Status(404))
    }

    async fn store(&self, resource: Resource, body: &Value) -> Result<WriteResponse, ApiError> {
        self.writes.borrow_mut().push((resource, body.clone()));
        Ok(self.write_responses.get(resource.name()).cloned().unwrap_or_else(WriteResponse::ok))
    }

    async fn upload_attachment(&self, file_name: &str, _bytes: Vec<u8>) -> Result<UploadResponse, ApiError> {
        Ok(self.upload.clone().unwrap_or_else(|| UploadResponse {
            success: true,
            filename: Some(file_name.to_string()),
            filepath: Some(format!("uploads/strategies/{}", file_name)),
            error: None,
        }))
    }

    async fn delete_attachment(&self, file_path: &str) -> Result<(), ApiError> {
        self.deleted.borrow_mut().push(file_path.to_string());
        Ok(())
    }
}
