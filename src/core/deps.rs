use std::process::{Command, Stdio};

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyStatus {
    pub yt_dlp: bool,
    pub ffmpeg: bool,
}

impl DependencyStatus {
    pub fn all_present(&self) -> bool {
        self.yt_dlp && self.ffmpeg
    }
}

/// Probes both wrapped tools up front so a missing binary is reported
/// before any input is collected.
pub fn check() -> DependencyStatus {
    DependencyStatus {
        yt_dlp: probe("yt-dlp", "--version"),
        ffmpeg: probe("ffmpeg", "-version"),
    }
}

fn probe(binary: &str, version_arg: &str) -> bool {
    let status = Command::new(binary)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => status.success(),
        Err(err) => {
            debug!("{binary} probe failed: {err}");
            false
        }
    }
}
