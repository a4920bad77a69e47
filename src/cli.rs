use std::path::PathBuf;

use clap::Parser;

/// Anything not given as a flag is collected interactively.
#[derive(Debug, Parser)]
#[command(
    name = "ytcut",
    version,
    about = "Download a video and cut a time range out of it"
)]
pub struct Cli {
    /// Video URL to download
    #[arg(long)]
    pub url: Option<String>,

    /// Output file name, e.g. clip.mp4
    #[arg(long)]
    pub name: Option<String>,

    /// Cut start time (HH:MM:SS)
    #[arg(long)]
    pub start: Option<String>,

    /// Cut end time (HH:MM:SS)
    #[arg(long)]
    pub end: Option<String>,

    /// Reuse an already-downloaded file instead of fetching
    #[arg(long)]
    pub skip_download: bool,

    /// Download only, skip the cut
    #[arg(long)]
    pub skip_cut: bool,

    /// Directory for downloaded and cut files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}
