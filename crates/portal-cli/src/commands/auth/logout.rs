use anyhow::Context;
use portal_config::PortalConfig;
use portal_core::AuthMode;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    mode: AuthMode,
}

pub async fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let ctx = AppContext::init(config).await?;
    ctx.gateway.sign_out().await.context("sign-out failed")?;

    // A stored session from an earlier live run outlives a switch to demo mode.
    if ctx.mode.is_demo() {
        portal_auth::forget_stored_session()?;
    }

    output(
        &AuthLogoutResponse {
            cleared: !ctx.gateway.session().is_signed_in(),
            mode: ctx.mode,
        },
        flags.format,
    )
}
