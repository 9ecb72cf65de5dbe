//! HTTP Config API
//!
//! `ConfigApi` over reqwest. On wasm32 reqwest drives the browser's fetch,
//! so the same client serves the admin panel and native tools.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

use crate::api::{ConfigApi, UploadResponse, WriteAck, WriteResponse, DELETE_PATH, UPLOAD_PATH};
use crate::error::ApiError;
use crate::resource::Resource;

#[derive(Debug, Clone)]
pub struct HttpConfigApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConfigApi {
    /// `base_url` is absolute, e.g. `https://example.com`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ConfigApi for HttpConfigApi {
    async fn fetch(&self, resource: Resource) -> Result<Value, ApiError> {
        let response = self.client.get(self.url(&resource.path())).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { resource: resource.name(), source })
    }

    async fn store(&self, resource: Resource, body: &Value) -> Result<WriteResponse, ApiError> {
        let response = self.client.post(self.url(&resource.path())).json(body).send().await?;
        let status = response.status().as_u16();
        // Error pages are not JSON; the status alone then decides.
        let ack = response.json::<WriteAck>().await.ok();
        Ok(WriteResponse { status, ack })
    }

    async fn upload_attachment(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let response = self.client.post(self.url(UPLOAD_PATH)).multipart(form).send().await?;
        let status = response.status().as_u16();
        match response.json::<UploadResponse>().await {
            Ok(body) => Ok(body),
            Err(_) => Err(ApiError::Status(status)),
        }
    }

    async fn delete_attachment(&self, file_path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(DELETE_PATH))
            .json(&json!({ "filepath": file_path }))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpConfigApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url(&Resource::Faqs.path()), "http://localhost:8000/api/config/faqs");
    }
}
