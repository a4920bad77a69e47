mod cli;
mod core;
mod prompt;

use clap::Parser;
use env_logger::Env;

use crate::core::error::CutError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: cli::Cli) -> Result<(), CutError> {
    let deps = core::deps::check();
    if !deps.all_present() {
        println!("Missing dependencies:");
        if !deps.yt_dlp {
            println!("  - yt-dlp: not found in PATH");
        }
        if !deps.ffmpeg {
            println!("  - ffmpeg: not found in PATH");
        }
        if !prompt::confirm("Proceed anyway? (y/n): ")? {
            return Ok(());
        }
    }

    let mut job = prompt::collect_job(&args)?;
    let output = core::run(&mut job, &args.data_dir)?;

    let elapsed = job
        .elapsed()
        .map(core::formatter::format_duration)
        .unwrap_or_else(|| "--:--:--".to_string());
    println!("Done: {} (took {elapsed})", output.display());

    Ok(())
}
