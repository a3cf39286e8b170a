use portal_config::PortalConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassroomCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal classroom <subcommand>`.
pub async fn handle(
    action: &ClassroomCommands,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    let ctx = AppContext::signed_in(config).await?;
    match action {
        ClassroomCommands::Courses => output(&ctx.gateway.list_courses().await?, flags.format),
        ClassroomCommands::Roster(args) => output(
            &ctx.gateway.list_course_roster(&args.course_id).await?,
            flags.format,
        ),
    }
}
