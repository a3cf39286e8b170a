use portal_config::PortalConfig;
use portal_workspace::MailMessage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MailCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal mail <subcommand>`.
pub async fn handle(
    action: &MailCommands,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    match action {
        MailCommands::Send(args) => {
            let message = MailMessage::new(&args.to, &args.subject, &args.body);
            // Reject bad input before a browser window opens.
            message.validate()?;

            let ctx = AppContext::signed_in(config).await?;
            output(&ctx.gateway.send_mail(&message).await?, flags.format)
        }
    }
}
