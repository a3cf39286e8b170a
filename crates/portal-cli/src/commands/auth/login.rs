use portal_config::PortalConfig;
use portal_core::AuthMode;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    signed_in: bool,
    mode: AuthMode,
    display_name: String,
    email: String,
    avatar_url: String,
}

pub async fn handle(flags: &GlobalFlags, config: &PortalConfig) -> anyhow::Result<()> {
    let ctx = AppContext::init(config).await?;
    let profile = ctx.sign_in().await?;

    output(
        &AuthLoginResponse {
            signed_in: ctx.gateway.session().is_signed_in(),
            mode: ctx.mode,
            display_name: profile.display_name,
            email: profile.email,
            avatar_url: profile.avatar_url,
        },
        flags.format,
    )
}
