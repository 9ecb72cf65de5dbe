//! Strategy attachment files: upload, attach, and best-effort cleanup.

use super::{AttachmentField, ListEntry};
use crate::api::ConfigApi;
use crate::error::{EditResult, UploadError};
use crate::model::icons::ATTACHMENT_TYPES;
use crate::model::{RiskTier, StrategyAttachment};
use crate::store::ConfigStore;

/// Where the server stored an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_path: String,
    /// Lower-cased extension of the original file name
    pub file_type: String,
}

/// Lower-cased extension of `file_name`, if it is an accepted attachment type
pub fn attachment_extension(file_name: &str) -> Result<String, UploadError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or_else(|| UploadError::UnsupportedType(file_name.to_string()))?;
    if ATTACHMENT_TYPES.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(UploadError::UnsupportedType(ext))
    }
}

pub async fn upload_attachment<A: ConfigApi + ?Sized>(
    api: &A,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<UploadedFile, UploadError> {
    let file_type = attachment_extension(file_name)?;
    let response = api.upload_attachment(file_name, bytes).await?;
    if !response.success {
        let reason = response.error.unwrap_or_else(|| "upload failed".to_string());
        return Err(UploadError::Rejected(reason));
    }
    let file_path = response
        .filepath
        .filter(|p| !p.is_empty())
        .ok_or_else(|| UploadError::Rejected("server returned no file path".to_string()))?;
    log::info!("uploaded attachment {} to {}", file_name, file_path);
    Ok(UploadedFile { file_path, file_type })
}

/// Delete the uploaded file behind a removed attachment. Failures are only logged.
pub async fn discard_attachment_file<A: ConfigApi + ?Sized>(api: &A, attachment: &StrategyAttachment) {
    if attachment.file_path.is_empty() {
        return;
    }
    if let Err(e) = api.delete_attachment(&attachment.file_path).await {
        log::warn!("could not delete attachment file {}: {}", attachment.file_path, e);
    }
}

impl ConfigStore {
    /// Point an attachment at a freshly uploaded file
    pub fn attach_uploaded(&mut self, tier: RiskTier, id: u32, file: &UploadedFile) -> EditResult<()> {
        let mut files = self.attachments(tier);
        files.update(&id, AttachmentField::FilePath, file.file_path.clone())?;
        files.update(&id, AttachmentField::FileType, file.file_type.clone())?;
        log::debug!("{} {} now points at {}", StrategyAttachment::KIND, id, file.file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_check() {
        assert_eq!(attachment_extension("Report.PDF").unwrap(), "pdf");
        assert_eq!(attachment_extension("chart.final.png").unwrap(), "png");
        assert!(matches!(attachment_extension("notes.txt"), Err(UploadError::UnsupportedType(e)) if e == "txt"));
        assert!(attachment_extension("README").is_err());
    }
}
