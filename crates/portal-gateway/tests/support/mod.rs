//! Fakes for driving the gateway without Google.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portal_auth::{AuthError, AuthProvider, ProviderConfig, ProviderEvent};
use portal_config::PortalConfig;
use portal_core::{Profile, SharedSession};
use portal_gateway::SessionGateway;
use portal_workspace::{
    Course, DriveFile, FileUpload, ListFilesRequest, SendResult, ServiceError, Student,
    WorkspaceApi,
};
use tokio::sync::broadcast;

pub fn live_profile() -> Profile {
    Profile::new("Ada Lovelace", "ada@school.edu", "https://example.com/ada.png")
}

pub struct FakeProvider {
    pub init_fails: AtomicBool,
    pub init_hangs: AtomicBool,
    pub sign_in_fails: AtomicBool,
    pub sign_out_fails: AtomicBool,
    pub token_expired: AtomicBool,
    pub sign_in_delay: Duration,
    pub init_calls: AtomicUsize,
    pub sign_in_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    pub last_config: std::sync::Mutex<Option<ProviderConfig>>,
    pub events: broadcast::Sender<ProviderEvent>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        let (events, _) = broadcast::channel(8);
        Self {
            init_fails: AtomicBool::new(false),
            init_hangs: AtomicBool::new(false),
            sign_in_fails: AtomicBool::new(false),
            sign_out_fails: AtomicBool::new(false),
            token_expired: AtomicBool::new(false),
            sign_in_delay: Duration::ZERO,
            init_calls: AtomicUsize::new(0),
            sign_in_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
            last_config: std::sync::Mutex::new(None),
            events,
        }
    }
}

impl FakeProvider {
    pub fn failing_init() -> Self {
        let provider = Self::default();
        provider.init_fails.store(true, Ordering::SeqCst);
        provider
    }

    pub fn emit(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl AuthProvider for FakeProvider {
    async fn initialize(&self, config: &ProviderConfig) -> Result<(), AuthError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_config.lock().unwrap() = Some(config.clone());
        if self.init_hangs.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.init_fails.load(Ordering::SeqCst) {
            return Err(AuthError::Initialization("discovery unreachable".into()));
        }
        Ok(())
    }

    async fn sign_in(&self) -> Result<Profile, AuthError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        if !self.sign_in_delay.is_zero() {
            tokio::time::sleep(self.sign_in_delay).await;
        }
        if self.sign_in_fails.load(Ordering::SeqCst) {
            return Err(AuthError::BrowserFlowFailed("consent denied: access_denied".into()));
        }
        Ok(live_profile())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        if self.sign_out_fails.load(Ordering::SeqCst) {
            return Err(AuthError::Revoke("HTTP 503: unavailable".into()));
        }
        Ok(())
    }

    async fn access_token(&self) -> Result<String, AuthError> {
        if self.token_expired.load(Ordering::SeqCst) {
            return Err(AuthError::TokenExpired);
        }
        Ok("ya29.fake".into())
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}

#[derive(Default)]
pub struct CountingWorkspace {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
    pub hang: AtomicBool,
    pub last_raw: std::sync::Mutex<Option<String>>,
}

impl CountingWorkspace {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, token: &str) -> Result<(), ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(token, "ya29.fake");
        if self.hang.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ServiceError::Api {
                status: 500,
                message: "Backend Error".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WorkspaceApi for CountingWorkspace {
    async fn list_files(
        &self,
        token: &str,
        request: &ListFilesRequest,
    ) -> Result<Vec<DriveFile>, ServiceError> {
        self.enter(token).await?;
        Ok((0..request.page_size.min(2))
            .map(|i| DriveFile {
                id: format!("live-{i}"),
                name: format!("Live file {i}"),
                ..Default::default()
            })
            .collect())
    }

    async fn upload_file(
        &self,
        token: &str,
        upload: FileUpload,
    ) -> Result<DriveFile, ServiceError> {
        self.enter(token).await?;
        Ok(DriveFile {
            id: "live-upload".into(),
            name: upload.metadata.name,
            ..Default::default()
        })
    }

    async fn list_courses(
        &self,
        token: &str,
        teacher_id: &str,
    ) -> Result<Vec<Course>, ServiceError> {
        self.enter(token).await?;
        assert_eq!(teacher_id, "me");
        Ok(vec![Course {
            id: "live-course".into(),
            name: "Physics".into(),
            ..Default::default()
        }])
    }

    async fn list_roster(
        &self,
        token: &str,
        course_id: &str,
    ) -> Result<Vec<Student>, ServiceError> {
        self.enter(token).await?;
        Ok(vec![Student {
            course_id: course_id.into(),
            user_id: "s-1".into(),
            ..Default::default()
        }])
    }

    async fn send_message(
        &self,
        token: &str,
        user_id: &str,
        raw: &str,
    ) -> Result<SendResult, ServiceError> {
        self.enter(token).await?;
        assert_eq!(user_id, "me");
        *self.last_raw.lock().unwrap() = Some(raw.to_string());
        Ok(SendResult {
            id: "live-msg".into(),
            thread_id: "live-thread".into(),
            label_ids: vec!["SENT".into()],
        })
    }
}

pub fn test_config() -> PortalConfig {
    let mut config = PortalConfig::default();
    config.google.client_id = "1234-abc.apps.googleusercontent.com".into();
    config.general.request_timeout_secs = 1;
    config
}

pub struct Harness {
    pub provider: Arc<FakeProvider>,
    pub workspace: Arc<CountingWorkspace>,
    pub session: SharedSession,
    pub gateway: Arc<SessionGateway>,
}

pub fn harness_with(provider: FakeProvider, config: &PortalConfig) -> Harness {
    let provider = Arc::new(provider);
    let workspace = Arc::new(CountingWorkspace::default());
    let session = SharedSession::default();
    let gateway = Arc::new(SessionGateway::new(
        provider.clone(),
        workspace.clone(),
        session.clone(),
        config,
    ));
    Harness {
        provider,
        workspace,
        session,
        gateway,
    }
}

pub fn harness(provider: FakeProvider) -> Harness {
    harness_with(provider, &test_config())
}

/// Check `profile present ⇔ signed in` on the shared session.
pub fn assert_session_consistent(session: &SharedSession) {
    let snapshot = session.snapshot();
    assert_eq!(snapshot.profile().is_some(), snapshot.signed_in());
}
