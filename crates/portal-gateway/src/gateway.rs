use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use portal_auth::{AuthError, AuthProvider, ProviderConfig, ProviderEvent};
use portal_config::{GeneralConfig, PortalConfig};
use portal_core::{AuthMode, GatewayState, Profile, Session, SharedSession};
use portal_workspace::{
    Course, DriveFile, FileUpload, ListFilesRequest, MailMessage, SendResult, Service,
    ServiceError, Student, WorkspaceApi, mime,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::demo;
use crate::error::GatewayError;

/// `teacherId` / `userId` alias for the signed-in account.
const ME: &str = "me";

/// Owns the sign-in lifecycle and forwards authenticated calls.
///
/// The session itself lives in the injected [`SharedSession`]; the gateway is
/// the only thing that mutates it.
pub struct SessionGateway {
    provider: Arc<dyn AuthProvider>,
    workspace: Arc<dyn WorkspaceApi>,
    session: SharedSession,
    provider_config: ProviderConfig,
    general: GeneralConfig,
    state: Mutex<GatewayState>,
    init_failure: Mutex<Option<String>>,
    init_lock: tokio::sync::Mutex<()>,
    sign_in_lock: tokio::sync::Mutex<()>,
}

impl SessionGateway {
    #[must_use]
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        workspace: Arc<dyn WorkspaceApi>,
        session: SharedSession,
        config: &PortalConfig,
    ) -> Self {
        Self {
            provider,
            workspace,
            session,
            provider_config: ProviderConfig::from_google(&config.google),
            general: config.general.clone(),
            state: Mutex::new(GatewayState::Uninitialized),
            init_failure: Mutex::new(None),
            init_lock: tokio::sync::Mutex::new(()),
            sign_in_lock: tokio::sync::Mutex::new(()),
        }
    }

    // ── Queries ────────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> GatewayState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mode chosen at initialization, `None` before that.
    #[must_use]
    pub fn mode(&self) -> Option<AuthMode> {
        self.state().mode()
    }

    /// Why initialization fell back to demo mode, if it did.
    #[must_use]
    pub fn init_failure(&self) -> Option<String> {
        self.init_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub const fn session(&self) -> &SharedSession {
        &self.session
    }

    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.session.profile()
    }

    fn request_timeout(&self) -> Duration {
        self.general.request_timeout()
    }

    fn set_state(&self, next: GatewayState) {
        self.transition(|_| Some(next));
    }

    /// Pick the next state from the current one while holding the lock.
    /// `None` leaves the state unchanged.
    fn transition(&self, pick: impl FnOnce(GatewayState) -> Option<GatewayState>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(next) = pick(*state) else {
            return;
        };
        debug_assert!(
            state.can_transition_to(next),
            "invalid gateway transition {} -> {next}",
            *state
        );
        tracing::debug!(from = %*state, to = %next, "gateway transition");
        *state = next;
    }

    fn mark_signed_in(&self, mode: AuthMode) {
        let next = GatewayState::SignedIn(mode);
        self.transition(|current| (current != next).then_some(next));
    }

    fn mark_signed_out(&self, mode: AuthMode) {
        self.transition(|current| {
            (current == GatewayState::SignedIn(mode)).then_some(GatewayState::SignedOut(mode))
        });
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    /// Configure the auth provider and pick the mode.
    ///
    /// Runs once; later calls return the mode already chosen. A provider
    /// failure switches to [`AuthMode::Demo`] unless demo fallback is
    /// disabled in config.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Initialization`] only when the provider fails
    /// and `general.demo_fallback` is `false`.
    pub async fn initialize(&self) -> Result<AuthMode, GatewayError> {
        let _guard = self.init_lock.lock().await;
        if let Some(mode) = self.mode() {
            return Ok(mode);
        }

        self.set_state(GatewayState::Initializing);
        let limit = self.request_timeout();
        let result = tokio::time::timeout(limit, self.provider.initialize(&self.provider_config))
            .await
            .unwrap_or_else(|_| {
                Err(AuthError::Initialization(format!(
                    "provider did not respond within {}s",
                    limit.as_secs()
                )))
            });

        let mode = match result {
            Ok(()) => AuthMode::Live,
            Err(error) if self.general.demo_fallback => {
                tracing::warn!(%error, "auth provider unavailable; continuing in demo mode");
                *self.init_failure.lock().unwrap_or_else(PoisonError::into_inner) =
                    Some(error.to_string());
                AuthMode::Demo
            }
            Err(error) => {
                self.set_state(GatewayState::Uninitialized);
                return Err(GatewayError::Initialization(error));
            }
        };

        self.session.update(|s| s.set_auth_mode(mode));
        self.set_state(GatewayState::Ready(mode));
        tracing::info!(%mode, "session gateway ready");
        Ok(mode)
    }

    /// Sign in and populate the session.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::NotReady`] before [`initialize`](Self::initialize)
    /// - [`GatewayError::SignInInProgress`] while another sign-in runs
    /// - [`GatewayError::SignInFailure`] if the provider fails; the session
    ///   is left as it was
    pub async fn sign_in(&self) -> Result<Profile, GatewayError> {
        let mode = self.mode().ok_or(GatewayError::NotReady)?;
        let Ok(_guard) = self.sign_in_lock.try_lock() else {
            return Err(GatewayError::SignInInProgress);
        };

        let profile = match mode {
            AuthMode::Live => self
                .provider
                .sign_in()
                .await
                .map_err(GatewayError::SignInFailure)?,
            AuthMode::Demo => demo::profile(),
        };

        self.session.update(|s| s.sign_in(profile.clone()));
        self.mark_signed_in(mode);
        tracing::info!(email = %profile.email, %mode, "signed in");
        Ok(profile)
    }

    /// Sign out. The session is cleared even when the provider fails.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::NotReady`] before [`initialize`](Self::initialize)
    /// - [`GatewayError::SignOutFailure`] if the provider could not revoke
    pub async fn sign_out(&self) -> Result<(), GatewayError> {
        let mode = self.mode().ok_or(GatewayError::NotReady)?;

        let result = match mode {
            AuthMode::Live => {
                let limit = self.request_timeout();
                tokio::time::timeout(limit, self.provider.sign_out())
                    .await
                    .unwrap_or_else(|_| {
                        Err(AuthError::Revoke(format!(
                            "no response within {}s",
                            limit.as_secs()
                        )))
                    })
            }
            AuthMode::Demo => Ok(()),
        };

        self.session.update(Session::sign_out);
        self.mark_signed_out(mode);
        tracing::info!(%mode, "signed out");

        result.map_err(|error| {
            tracing::warn!(%error, "provider sign-out failed; local session cleared");
            GatewayError::SignOutFailure(error)
        })
    }

    /// Apply a session change reported by the provider.
    pub fn apply_provider_event(&self, event: ProviderEvent) {
        let Some(mode) = self.mode() else {
            tracing::debug!(?event, "ignoring provider event before initialization");
            return;
        };
        match event {
            ProviderEvent::SessionEnded => {
                self.session.update(Session::sign_out);
                self.mark_signed_out(mode);
                tracing::info!("provider ended the session");
            }
            ProviderEvent::SessionStarted(profile) => {
                tracing::info!(email = %profile.email, "provider started a session");
                self.session.update(|s| s.sign_in(profile));
                self.mark_signed_in(mode);
            }
        }
    }

    /// Apply provider events on a background task until the provider's
    /// channel closes or the gateway is dropped.
    #[must_use]
    pub fn spawn_event_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let mut events = self.provider.subscribe();
        let gateway: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        let Some(gateway) = gateway.upgrade() else {
                            break;
                        };
                        gateway.apply_provider_event(event);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "provider events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("provider event listener stopped");
        })
    }

    // ── Authenticated operations ──────────────────────────────────

    /// Bearer token for a live call, `None` in demo mode.
    async fn credential(&self) -> Result<Option<String>, GatewayError> {
        if !self.session.is_signed_in() {
            return Err(GatewayError::Unauthenticated);
        }
        let mode = self.session.auth_mode();
        if mode.is_demo() {
            return Ok(None);
        }

        let limit = self.request_timeout();
        let token = tokio::time::timeout(limit, self.provider.access_token())
            .await
            .unwrap_or_else(|_| {
                Err(AuthError::Other(format!(
                    "no access token within {}s",
                    limit.as_secs()
                )))
            });

        match token {
            Ok(token) => Ok(Some(token)),
            Err(error @ (AuthError::NotAuthenticated | AuthError::TokenExpired)) => {
                self.session.update(Session::sign_out);
                self.mark_signed_out(mode);
                Err(GatewayError::Credential(error))
            }
            Err(error) => Err(GatewayError::Credential(error)),
        }
    }

    async fn remote<T>(
        &self,
        service: Service,
        call: impl Future<Output = Result<T, ServiceError>>,
    ) -> Result<T, GatewayError> {
        let limit = self.request_timeout();
        let result = tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
            Err(ServiceError::Timeout {
                after_secs: limit.as_secs(),
            })
        });
        result.map_err(|source| {
            tracing::warn!(%service, error = %source, "remote call failed");
            GatewayError::RemoteService { service, source }
        })
    }

    /// List files in the signed-in user's Drive.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Unauthenticated`] when signed out,
    /// [`GatewayError::Credential`] or [`GatewayError::RemoteService`] on
    /// live failures.
    pub async fn list_files(
        &self,
        request: &ListFilesRequest,
    ) -> Result<Vec<DriveFile>, GatewayError> {
        let Some(token) = self.credential().await? else {
            return Ok(demo::files(request));
        };
        self.remote(Service::Drive, self.workspace.list_files(&token, request))
            .await
    }

    /// Upload a file to the root of the signed-in user's Drive.
    ///
    /// # Errors
    ///
    /// Same as [`list_files`](Self::list_files).
    pub async fn upload_file(&self, upload: FileUpload) -> Result<DriveFile, GatewayError> {
        let Some(token) = self.credential().await? else {
            return Ok(demo::uploaded(&upload));
        };
        self.remote(Service::Drive, self.workspace.upload_file(&token, upload))
            .await
    }

    /// Courses the signed-in user teaches.
    ///
    /// # Errors
    ///
    /// Same as [`list_files`](Self::list_files).
    pub async fn list_courses(&self) -> Result<Vec<Course>, GatewayError> {
        let Some(token) = self.credential().await? else {
            return Ok(demo::courses());
        };
        self.remote(Service::Classroom, self.workspace.list_courses(&token, ME))
            .await
    }

    /// Students enrolled in `course_id`.
    ///
    /// # Errors
    ///
    /// Same as [`list_files`](Self::list_files).
    pub async fn list_course_roster(&self, course_id: &str) -> Result<Vec<Student>, GatewayError> {
        let Some(token) = self.credential().await? else {
            return Ok(demo::roster(course_id));
        };
        self.remote(
            Service::Classroom,
            self.workspace.list_roster(&token, course_id),
        )
        .await
    }

    /// Send an HTML mail from the signed-in account.
    ///
    /// # Errors
    ///
    /// [`GatewayError::InvalidMail`] for empty fields or header injection,
    /// otherwise the same as [`list_files`](Self::list_files).
    pub async fn send_mail(&self, message: &MailMessage) -> Result<SendResult, GatewayError> {
        let token = self.credential().await?;
        let raw = mime::encode_raw(message)?;
        let Some(token) = token else {
            return Ok(demo::sent());
        };
        self.remote(Service::Gmail, self.workspace.send_message(&token, ME, &raw))
            .await
    }
}
