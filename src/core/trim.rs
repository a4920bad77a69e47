use std::io::{self, Write};

use log::{debug, warn};

use crate::core::command::CutCommand;
use crate::core::error::CutError;
use crate::core::progress::parse_cut_progress;
use crate::core::runner::{run_streamed, StreamKind};

/// Runs the ffmpeg attempt ladder until one invocation succeeds. The
/// final failure carries the last attempt's stderr; a missing ffmpeg
/// binary aborts the ladder immediately.
pub fn cut(command: &CutCommand) -> Result<(), CutError> {
    let mut last_exit_code = None;
    let mut last_stderr = String::new();

    for (attempt, args) in command.attempts().into_iter().enumerate() {
        debug!("ffmpeg attempt {}: {}", attempt + 1, args.join(" "));

        let mut progress_shown = false;
        let output = run_streamed("ffmpeg", &args, |stream, line| {
            if stream != StreamKind::Stderr {
                return;
            }
            if let Some(update) = parse_cut_progress(line) {
                if let Some(time) = &update.time {
                    let mut status = format!("\rcut: time={time}");
                    if let Some(speed) = &update.speed {
                        status.push_str(&format!(" speed={speed}"));
                    }
                    print!("{status}");
                    let _ = io::stdout().flush();
                    progress_shown = true;
                }
                return;
            }
            debug!("ffmpeg: {line}");
        })?;

        if progress_shown {
            println!();
        }

        if output.success {
            return Ok(());
        }

        warn!(
            "ffmpeg attempt {} failed (exit_code={:?})",
            attempt + 1,
            output.exit_code
        );
        last_exit_code = output.exit_code;
        last_stderr = output.stderr;
    }

    Err(CutError::Trim {
        exit_code: last_exit_code,
        stderr: last_stderr,
    })
}
