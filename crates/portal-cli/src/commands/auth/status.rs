use portal_config::{ConfigError, PortalConfig};
use portal_core::{AuthMode, GatewayState};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    configured: bool,
    state: String,
    mode: AuthMode,
    stored_session: Option<&'static str>,
    note: Option<String>,
}

pub async fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let ctx = AppContext::init(config).await?;
    let state: GatewayState = ctx.gateway.state();

    let google = config.require_google();
    let note = demo_note(ctx.mode, ctx.gateway.init_failure(), google.as_ref().err());

    output(
        &AuthStatusResponse {
            configured: google.is_ok(),
            state: state.to_string(),
            mode: ctx.mode,
            stored_session: portal_auth::stored_session_source().map(|source| source.as_str()),
            note,
        },
        flags.format,
    )
}

fn demo_note(
    mode: AuthMode,
    init_failure: Option<String>,
    config_error: Option<&ConfigError>,
) -> Option<String> {
    match (mode, init_failure, config_error) {
        (AuthMode::Live, _, _) => None,
        (AuthMode::Demo, Some(reason), _) => Some(format!("demo mode: {reason}")),
        (AuthMode::Demo, None, Some(error)) => Some(format!("demo mode: {error}")),
        (AuthMode::Demo, None, None) => Some("demo mode".into()),
    }
}
