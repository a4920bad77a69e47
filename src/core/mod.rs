use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

pub mod command;
pub mod deps;
pub mod download;
pub mod error;
pub mod formatter;
pub mod job;
pub mod progress;
pub mod runner;
pub mod timestamp;
pub mod trim;

use command::{CutCommand, DownloadCommand};
use error::CutError;
use job::{Job, JobStatus};

/// Runs one job end to end: download (or reuse), then cut. Returns the
/// path of the final file.
pub fn run(job: &mut Job, data_dir: &Path) -> Result<PathBuf, CutError> {
    job.status = JobStatus::Running;
    job.started_at = Some(Instant::now());

    let result = run_steps(job, data_dir);

    job.ended_at = Some(Instant::now());
    job.status = if result.is_ok() {
        JobStatus::Finished
    } else {
        JobStatus::Failed
    };

    result
}

fn run_steps(job: &Job, data_dir: &Path) -> Result<PathBuf, CutError> {
    fs::create_dir_all(data_dir)?;

    let input = data_dir.join(&job.output_name);
    match &job.url {
        Some(url) => {
            let command = DownloadCommand {
                url: url.clone(),
                output_path: input.clone(),
            };
            download::download(&command)?;
        }
        None => {
            if !input.exists() {
                return Err(CutError::MissingFile { path: input });
            }
            info!("using existing file {}", input.display());
        }
    }

    let Some(range) = job.range else {
        return Ok(input);
    };

    let output = data_dir.join(format!("cut_{}", job.output_name));
    info!(
        "cutting {} from {} to {}",
        input.display(),
        range.start,
        range.end
    );

    let command = CutCommand {
        input,
        output: output.clone(),
        start_secs: range.start.as_secs(),
        duration_secs: range.duration_secs(),
    };
    trim::cut(&command)?;

    let size = fs::metadata(&output)
        .map(|meta| meta.len())
        .map_err(|_| CutError::MissingFile {
            path: output.clone(),
        })?;
    info!("wrote {} ({})", output.display(), formatter::format_bytes(size));

    Ok(output)
}
