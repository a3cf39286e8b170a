//! Google Drive v3 client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{WorkspaceClient, error::ServiceError, http::check_response};

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart";

/// Field mask used when the caller does not ask for anything specific.
pub const DEFAULT_LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, createdTime)";

/// A Drive file resource. Fields not modelled here are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilesRequest {
    pub page_size: u32,
    pub fields: String,
}

impl Default for ListFilesRequest {
    fn default() -> Self {
        Self {
            page_size: 10,
            fields: DEFAULT_LIST_FIELDS.to_string(),
        }
    }
}

impl ListFilesRequest {
    #[must_use]
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

/// Metadata part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub parents: Vec<String>,
}

impl UploadMetadata {
    /// Metadata for a file placed in the root of My Drive.
    #[must_use]
    pub fn in_root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            parents: vec!["root".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub metadata: UploadMetadata,
    pub content: Vec<u8>,
}

#[derive(Deserialize)]
struct FileListResponse {
    #[serde(default)]
    files: Vec<DriveFile>,
}

impl WorkspaceClient {
    /// List files visible to the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails, Drive returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn drive_list_files(
        &self,
        token: &str,
        request: &ListFilesRequest,
    ) -> Result<Vec<DriveFile>, ServiceError> {
        let url = format!(
            "{FILES_URL}?pageSize={}&fields={}",
            request.page_size,
            urlencoding::encode(&request.fields)
        );
        let resp = check_response(self.http.get(&url).bearer_auth(token).send().await?).await?;
        let data: FileListResponse = resp.json().await?;
        tracing::debug!(count = data.files.len(), "drive files listed");
        Ok(data.files)
    }

    /// Upload a file as a `multipart` request: a JSON metadata part followed
    /// by the file content.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Parse`] if the metadata or MIME type is
    /// unusable, otherwise the same errors as
    /// [`drive_list_files`](Self::drive_list_files).
    pub async fn drive_upload_file(
        &self,
        token: &str,
        upload: FileUpload,
    ) -> Result<DriveFile, ServiceError> {
        let metadata_json = serde_json::to_string(&upload.metadata)
            .map_err(|e| ServiceError::Parse(format!("upload metadata: {e}")))?;
        let metadata = reqwest::multipart::Part::text(metadata_json)
            .mime_str("application/json")
            .map_err(|e| ServiceError::Parse(format!("metadata part: {e}")))?;

        let content_type = upload
            .metadata
            .mime_type
            .as_deref()
            .unwrap_or("application/octet-stream");
        let file = reqwest::multipart::Part::bytes(upload.content)
            .file_name(upload.metadata.name.clone())
            .mime_str(content_type)
            .map_err(|e| ServiceError::Parse(format!("invalid MIME type '{content_type}': {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("metadata", metadata)
            .part("file", file);

        let resp = check_response(
            self.http
                .post(UPLOAD_URL)
                .bearer_auth(token)
                .multipart(form)
                .send()
                .await?,
        )
        .await?;
        let created: DriveFile = resp.json().await?;
        tracing::debug!(id = %created.id, name = %created.name, "drive file uploaded");
        Ok(created)
    }
}
