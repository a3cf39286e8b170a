//! # portal-workspace
//!
//! Google Workspace REST clients for the STEM portal:
//! - Drive v3 (list files, multipart upload)
//! - Classroom v1 (courses taught, course roster)
//! - Gmail v1 (send a message, plus the `raw` envelope codec in [`mime`])
//!
//! Every call takes the bearer access token explicitly; this crate holds no
//! session state. [`WorkspaceApi`] is the seam the session gateway calls
//! through, implemented here by [`WorkspaceClient`].

pub mod classroom;
pub mod drive;
pub mod gmail;
pub mod mime;

mod error;
mod http;

pub use classroom::{Course, Student, UserName, UserProfile};
pub use drive::{DriveFile, FileUpload, ListFilesRequest, UploadMetadata};
pub use error::ServiceError;
pub use gmail::SendResult;
pub use mime::{MailError, MailMessage};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Types ──────────────────────────────────────────────────────────

/// The remote service a call was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Drive,
    Classroom,
    Gmail,
}

impl Service {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Classroom => "classroom",
            Self::Gmail => "gmail",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Seam ───────────────────────────────────────────────────────────

/// Authenticated Workspace operations, one method per remote endpoint.
///
/// Responses are returned as the service sent them; nothing is reshaped.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    async fn list_files(
        &self,
        token: &str,
        request: &ListFilesRequest,
    ) -> Result<Vec<DriveFile>, ServiceError>;

    async fn upload_file(&self, token: &str, upload: FileUpload)
    -> Result<DriveFile, ServiceError>;

    async fn list_courses(&self, token: &str, teacher_id: &str)
    -> Result<Vec<Course>, ServiceError>;

    async fn list_roster(&self, token: &str, course_id: &str)
    -> Result<Vec<Student>, ServiceError>;

    async fn send_message(
        &self,
        token: &str,
        user_id: &str,
        raw: &str,
    ) -> Result<SendResult, ServiceError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Google Workspace APIs.
#[derive(Clone)]
pub struct WorkspaceClient {
    http: reqwest::Client,
}

impl Default for WorkspaceClient {
    fn default() -> Self {
        Self::new(std::time::Duration::from_secs(10))
    }
}

impl WorkspaceClient {
    /// Create a client whose requests give up after `timeout`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(timeout: std::time::Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("stem-portal/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
        }
    }
}

#[async_trait]
impl WorkspaceApi for WorkspaceClient {
    async fn list_files(
        &self,
        token: &str,
        request: &ListFilesRequest,
    ) -> Result<Vec<DriveFile>, ServiceError> {
        self.drive_list_files(token, request).await
    }

    async fn upload_file(
        &self,
        token: &str,
        upload: FileUpload,
    ) -> Result<DriveFile, ServiceError> {
        self.drive_upload_file(token, upload).await
    }

    async fn list_courses(
        &self,
        token: &str,
        teacher_id: &str,
    ) -> Result<Vec<Course>, ServiceError> {
        self.classroom_list_courses(token, teacher_id).await
    }

    async fn list_roster(
        &self,
        token: &str,
        course_id: &str,
    ) -> Result<Vec<Student>, ServiceError> {
        self.classroom_list_students(token, course_id).await
    }

    async fn send_message(
        &self,
        token: &str,
        user_id: &str,
        raw: &str,
    ) -> Result<SendResult, ServiceError> {
        self.gmail_send(token, user_id, raw).await
    }
}
