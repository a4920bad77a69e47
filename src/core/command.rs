use std::path::PathBuf;

/// Prefer mp4 video + m4a audio so the cut step gets a container ffmpeg
/// handles without remuxing surprises.
pub const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

#[derive(Debug, Clone)]
pub struct DownloadCommand {
    pub url: String,
    pub output_path: PathBuf,
}

impl DownloadCommand {
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-f".to_string(),
            FORMAT_SELECTOR.to_string(),
            "--no-playlist".to_string(),
            "-o".to_string(),
            self.output_path.display().to_string(),
            self.url.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CutCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub start_secs: u64,
    pub duration_secs: i64,
}

impl CutCommand {
    /// Argument ladder, tried in order: precise re-encode, stream copy
    /// (fast but keyframe-aligned), then ffmpeg defaults.
    pub fn attempts(&self) -> Vec<Vec<String>> {
        vec![
            self.args_with(&[
                "-c:v", "libx264", "-crf", "23", "-preset", "medium", "-c:a", "aac", "-b:a",
                "128k",
            ]),
            self.args_with(&["-c", "copy"]),
            self.args_with(&[]),
        ]
    }

    fn args_with(&self, codec_args: &[&str]) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-ss".to_string(),
            self.start_secs.to_string(),
            "-i".to_string(),
            self.input.display().to_string(),
            "-t".to_string(),
            self.duration_secs.to_string(),
        ];
        args.extend(codec_args.iter().map(|arg| arg.to_string()));
        args.push(self.output.display().to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_args_carry_format_selector_and_url() {
        let command = DownloadCommand {
            url: "https://example.com/watch?v=abc".to_string(),
            output_path: PathBuf::from("data/clip.mp4"),
        };

        let args = command.to_args();
        assert_eq!(args[0], "-f");
        assert_eq!(args[1], FORMAT_SELECTOR);
        assert!(args.contains(&"--no-playlist".to_string()));
        assert_eq!(args[args.len() - 1], "https://example.com/watch?v=abc");

        let out_idx = args.iter().position(|a| a == "-o").unwrap();
        assert_eq!(args[out_idx + 1], "data/clip.mp4");
    }

    fn cut() -> CutCommand {
        CutCommand {
            input: PathBuf::from("data/clip.mp4"),
            output: PathBuf::from("data/cut_clip.mp4"),
            start_secs: 30,
            duration_secs: 90,
        }
    }

    #[test]
    fn three_attempts_share_seek_and_duration() {
        let attempts = cut().attempts();
        assert_eq!(attempts.len(), 3);

        for args in &attempts {
            assert_eq!(args[0], "-y");
            assert_eq!(args[1], "-ss");
            assert_eq!(args[2], "30");
            assert_eq!(args[5], "-t");
            assert_eq!(args[6], "90");
            assert_eq!(args[args.len() - 1], "data/cut_clip.mp4");
        }
    }

    #[test]
    fn attempt_order_is_encode_copy_defaults() {
        let attempts = cut().attempts();
        assert!(attempts[0].contains(&"libx264".to_string()));
        assert!(attempts[1].contains(&"copy".to_string()));
        assert!(!attempts[2].iter().any(|a| a.starts_with("-c")));
    }

    #[test]
    fn inverted_range_passes_negative_duration_through() {
        let command = CutCommand {
            duration_secs: -60,
            ..cut()
        };
        let args = &command.attempts()[0];
        let t_idx = args.iter().position(|a| a == "-t").unwrap();
        assert_eq!(args[t_idx + 1], "-60");
    }
}
