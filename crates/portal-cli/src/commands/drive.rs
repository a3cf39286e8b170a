use anyhow::Context;
use portal_config::PortalConfig;
use portal_workspace::{FileUpload, ListFilesRequest, UploadMetadata};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DriveCommands;
use crate::cli::subcommands::drive::{DriveListArgs, DriveUploadArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal drive <subcommand>`.
pub async fn handle(
    action: &DriveCommands,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    match action {
        DriveCommands::List(args) => list(args, flags, config).await,
        DriveCommands::Upload(args) => upload(args, flags, config).await,
    }
}

async fn list(
    args: &DriveListArgs,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    let page_size = args.page_size.unwrap_or(config.general.drive_page_size);
    if page_size == 0 {
        anyhow::bail!("drive list: --page-size must be at least 1");
    }

    let ctx = AppContext::signed_in(config).await?;
    let files = ctx
        .gateway
        .list_files(&ListFilesRequest::with_page_size(page_size))
        .await?;
    output(&files, flags.format)
}

fn upload_name(args: &DriveUploadArgs) -> anyhow::Result<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    args.path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("cannot derive a file name from {}", args.path.display()))
}

async fn upload(
    args: &DriveUploadArgs,
    flags: &GlobalFlags,
    config: &PortalConfig,
) -> anyhow::Result<()> {
    let content = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let mut metadata = UploadMetadata::in_root(upload_name(args)?);
    metadata.mime_type.clone_from(&args.mime_type);

    let ctx = AppContext::signed_in(config).await?;
    let file = ctx
        .gateway
        .upload_file(FileUpload { metadata, content })
        .await?;
    output(&file, flags.format)
}
