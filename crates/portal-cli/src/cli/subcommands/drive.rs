use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum DriveCommands {
    /// List files in My Drive.
    List(DriveListArgs),
    /// Upload a local file to the root of My Drive.
    Upload(DriveUploadArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DriveListArgs {
    /// Files per page (defaults to general.drive_page_size).
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct DriveUploadArgs {
    /// Local file to upload.
    pub path: PathBuf,
    /// Name in Drive (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
    /// MIME type (Drive detects it when omitted).
    #[arg(long)]
    pub mime_type: Option<String>,
}
