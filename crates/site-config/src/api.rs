//! Config API Seam
//!
//! Abstract interface to the REST collaborator that stores the JSON
//! resources. `?Send` so the browser implementation can hold JS futures.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::resource::Resource;

pub const UPLOAD_PATH: &str = "/api/upload/strategy-attachment";
pub const DELETE_PATH: &str = "/api/delete/strategy-attachment";

/// Body returned by a write: `{success, error?, message?}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WriteAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Status plus whatever acknowledgement the server sent back
#[derive(Debug, Clone, PartialEq)]
pub struct WriteResponse {
    pub status: u16,
    pub ack: Option<WriteAck>,
}

impl WriteResponse {
    pub fn ok() -> Self {
        Self { status: 200, ack: Some(WriteAck { success: Some(true), ..Default::default() }) }
    }

    pub fn failed(status: u16, error: Option<&str>) -> Self {
        Self {
            status,
            ack: Some(WriteAck {
                success: Some(false),
                error: error.map(str::to_string),
                message: None,
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
            && self.ack.as_ref().and_then(|a| a.success) != Some(false)
    }

    /// Server-provided error text, else `HTTP <status>`
    pub fn error_text(&self) -> String {
        self.ack
            .as_ref()
            .and_then(|a| a.error.clone())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", self.status))
    }
}

/// Body returned by the attachment upload endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait(?Send)]
pub trait ConfigApi {
    /// `GET /api/config/<resource>`
    async fn fetch(&self, resource: Resource) -> Result<Value, ApiError>;

    /// `POST /api/config/<resource>` with the whole resource as body
    async fn store(&self, resource: Resource, body: &Value) -> Result<WriteResponse, ApiError>;

    /// Multipart upload, field `file`
    async fn upload_attachment(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadResponse, ApiError>;

    /// Best-effort removal of an uploaded file
    async fn delete_attachment(&self, file_path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_text_prefers_body() {
        assert_eq!(WriteResponse::failed(500, Some("disk full")).error_text(), "disk full");
        assert_eq!(WriteResponse::failed(502, None).error_text(), "HTTP 502");
        assert_eq!(WriteResponse::failed(500, Some("")).error_text(), "HTTP 500");
    }

    #[test]
    fn test_success_requires_status_and_ack() {
        assert!(WriteResponse::ok().is_success());
        assert!(!WriteResponse::failed(200, Some("invalid")).is_success());
        assert!(WriteResponse { status: 204, ack: None }.is_success());
        assert!(!WriteResponse { status: 404, ack: None }.is_success());
    }
}
