use std::sync::Arc;

use anyhow::Context;
use portal_auth::GoogleAuthProvider;
use portal_config::PortalConfig;
use portal_core::{AuthMode, Profile, SharedSession};
use portal_gateway::SessionGateway;
use portal_workspace::WorkspaceClient;
use tokio::task::JoinHandle;

/// Everything a gateway-backed command needs, wired once per invocation.
pub struct AppContext {
    pub gateway: Arc<SessionGateway>,
    pub mode: AuthMode,
    events: JoinHandle<()>,
}

impl AppContext {
    /// Build the provider, Workspace client and session, then initialize
    /// the gateway.
    pub async fn init(config: &PortalConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stem-portal/", env!("CARGO_PKG_VERSION")))
            .timeout(config.general.request_timeout())
            .build()
            .context("failed to build HTTP client")?;

        let provider = Arc::new(GoogleAuthProvider::new(
            http,
            config.general.sign_in_timeout(),
        ));
        let workspace = Arc::new(WorkspaceClient::new(config.general.request_timeout()));
        let session = SharedSession::default();
        let gateway = Arc::new(SessionGateway::new(provider, workspace, session, config));
        let events = gateway.spawn_event_listener();

        let mode = gateway
            .initialize()
            .await
            .context("failed to initialize the session gateway")?;

        Ok(Self {
            gateway,
            mode,
            events,
        })
    }

    /// [`init`](Self::init) followed by a sign-in.
    pub async fn signed_in(config: &PortalConfig) -> anyhow::Result<Self> {
        let ctx = Self::init(config).await?;
        ctx.sign_in().await?;
        Ok(ctx)
    }

    pub async fn sign_in(&self) -> anyhow::Result<Profile> {
        let profile = self.gateway.sign_in().await.context("sign-in failed")?;
        tracing::debug!(email = %profile.email, mode = %self.mode, "command session ready");
        Ok(profile)
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.events.abort();
    }
}
