use std::io::{self, Write};

use log::{debug, info};

use crate::core::command::DownloadCommand;
use crate::core::error::CutError;
use crate::core::formatter::format_bytes;
use crate::core::progress::parse_download_progress;
use crate::core::runner::{run_streamed, StreamKind};

/// Fetches the URL with yt-dlp. The output file is checked afterwards
/// because yt-dlp can exit zero without writing anything for some
/// playlist/unavailable edge cases.
pub fn download(command: &DownloadCommand) -> Result<(), CutError> {
    info!(
        "downloading {} -> {}",
        command.url,
        command.output_path.display()
    );

    let mut progress_shown = false;
    let output = run_streamed("yt-dlp", &command.to_args(), |stream, line| {
        if stream == StreamKind::Stdout {
            if let Some(update) = parse_download_progress(line) {
                let mut status = format!("\rdownload: {:5.1}%", update.percent);
                if let Some(size) = &update.size {
                    status.push_str(&format!(" of {size}"));
                }
                if let Some(rate) = &update.rate {
                    status.push_str(&format!(" at {rate}"));
                }
                if let Some(eta) = &update.eta {
                    status.push_str(&format!(" ETA {eta}"));
                }
                print!("{status}");
                let _ = io::stdout().flush();
                progress_shown = true;
                return;
            }
        }
        debug!("yt-dlp: {line}");
    })?;

    if progress_shown {
        println!();
    }

    if !output.success {
        return Err(CutError::Download {
            exit_code: output.exit_code,
            stderr: output.stderr,
        });
    }

    let size = std::fs::metadata(&command.output_path)
        .map(|meta| meta.len())
        .map_err(|_| CutError::MissingFile {
            path: command.output_path.clone(),
        })?;

    info!(
        "downloaded {} ({})",
        command.output_path.display(),
        format_bytes(size)
    );
    Ok(())
}
