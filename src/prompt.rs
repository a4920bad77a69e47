use std::io::{self, Write};

use crate::cli::Cli;
use crate::core::error::CutError;
use crate::core::job::{CutRange, Job};
use crate::core::timestamp::Timestamp;

/// Builds a Job from flags, prompting for whatever was not provided.
/// Timestamps re-prompt until they parse; everything else is taken
/// verbatim.
pub fn collect_job(args: &Cli) -> Result<Job, CutError> {
    let url = if args.skip_download {
        None
    } else {
        Some(match &args.url {
            Some(url) => url.clone(),
            None => read_line("Enter video URL: ")?,
        })
    };

    let output_name = match &args.name {
        Some(name) => name.clone(),
        None => normalize_output_name(&read_line("Enter output file name (e.g. clip.mp4): ")?),
    };

    let range = if args.skip_cut {
        None
    } else {
        let start = prompt_timestamp("start", args.start.as_deref())?;
        let end = prompt_timestamp("end", args.end.as_deref())?;
        Some(CutRange { start, end })
    };

    Ok(Job::new(url, output_name, range))
}

pub fn confirm(message: &str) -> Result<bool, CutError> {
    let answer = read_line(message)?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// A prompted name typed without the container extension gets `.mp4`
/// appended; names passed via `--name` are not touched.
pub fn normalize_output_name(name: &str) -> String {
    if name.ends_with(".mp4") {
        name.to_string()
    } else {
        format!("{name}.mp4")
    }
}

fn prompt_timestamp(label: &str, initial: Option<&str>) -> Result<Timestamp, CutError> {
    if let Some(value) = initial {
        match value.parse() {
            Ok(ts) => return Ok(ts),
            Err(err) => eprintln!("{err}"),
        }
    }

    loop {
        let line = read_line(&format!("Enter {label} time (HH:MM:SS): "))?;
        match line.parse() {
            Ok(ts) => return Ok(ts),
            Err(_) => println!("Invalid time format. Please use HH:MM:SS"),
        }
    }
}

fn read_line(message: &str) -> Result<String, CutError> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_mp4_when_missing() {
        assert_eq!(normalize_output_name("clip"), "clip.mp4");
        assert_eq!(normalize_output_name("clip.webm"), "clip.webm.mp4");
    }

    #[test]
    fn keeps_existing_mp4_suffix() {
        assert_eq!(normalize_output_name("clip.mp4"), "clip.mp4");
    }
}
