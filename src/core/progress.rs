use once_cell::sync::Lazy;
use regex::Regex;

/// One `frame=.. time=.. speed=..` status line from ffmpeg stderr.
#[derive(Debug, Clone, PartialEq)]
pub struct CutProgress {
    pub time: Option<String>,
    pub frame: Option<u64>,
    pub speed: Option<String>,
}

pub fn parse_cut_progress(line: &str) -> Option<CutProgress> {
    let mut time: Option<String> = None;
    let mut frame: Option<u64> = None;
    let mut speed: Option<String> = None;

    for token in line.split_whitespace() {
        if let Some(value) = token.strip_prefix("time=") {
            time = Some(value.to_string());
            continue;
        }
        if let Some(value) = token.strip_prefix("frame=") {
            if let Ok(parsed) = value.parse::<u64>() {
                frame = Some(parsed);
            }
            continue;
        }
        if let Some(value) = token.strip_prefix("speed=") {
            speed = Some(value.to_string());
            continue;
        }
    }

    if time.is_some() || frame.is_some() || speed.is_some() {
        Some(CutProgress { time, frame, speed })
    } else {
        None
    }
}

/// One `[download]  42.0% of 10.00MiB at 1.17MiB/s ETA 00:05` line from
/// yt-dlp stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadProgress {
    pub percent: f32,
    pub size: Option<String>,
    pub rate: Option<String>,
    pub eta: Option<String>,
}

static RE_DOWNLOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\[download\]\s+([0-9]+(?:\.[0-9]+)?)%(?:\s+of\s+~?\s*(\S+))?(?:\s+at\s+(\S+))?(?:\s+ETA\s+(\S+))?",
    )
    .unwrap()
});

pub fn parse_download_progress(line: &str) -> Option<DownloadProgress> {
    let caps = RE_DOWNLOAD.captures(line.trim())?;
    let percent = caps.get(1)?.as_str().parse::<f32>().ok()?;

    Some(DownloadProgress {
        percent,
        size: caps.get(2).map(|m| m.as_str().to_string()),
        rate: caps.get(3).map(|m| m.as_str().to_string()),
        eta: caps.get(4).map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ffmpeg_status_tokens() {
        let line = "frame=100 fps=25 q=28.0 size=512kB time=00:00:04.00 bitrate=1048.6kbits/s speed=1.2x";
        let progress = parse_cut_progress(line).unwrap();
        assert_eq!(progress.frame, Some(100));
        assert_eq!(progress.time.as_deref(), Some("00:00:04.00"));
        assert_eq!(progress.speed.as_deref(), Some("1.2x"));
    }

    #[test]
    fn ffmpeg_noise_yields_none() {
        assert!(parse_cut_progress("ffmpeg version 6.0").is_none());
        assert!(parse_cut_progress("").is_none());
    }

    #[test]
    fn parses_full_download_line() {
        let line = "[download]  42.0% of 10.00MiB at 1.17MiB/s ETA 00:05";
        let progress = parse_download_progress(line).unwrap();
        assert_eq!(progress.percent, 42.0);
        assert_eq!(progress.size.as_deref(), Some("10.00MiB"));
        assert_eq!(progress.rate.as_deref(), Some("1.17MiB/s"));
        assert_eq!(progress.eta.as_deref(), Some("00:05"));
    }

    #[test]
    fn parses_download_line_with_estimated_size() {
        let line = "[download]   0.1% of ~ 120.50MiB at  512.00KiB/s ETA 04:01";
        let progress = parse_download_progress(line).unwrap();
        assert_eq!(progress.percent, 0.1);
        assert_eq!(progress.size.as_deref(), Some("120.50MiB"));
    }

    #[test]
    fn parses_bare_percent_line() {
        let progress = parse_download_progress("[download] 100%").unwrap();
        assert_eq!(progress.percent, 100.0);
        assert!(progress.size.is_none());
        assert!(progress.eta.is_none());
    }

    #[test]
    fn download_noise_yields_none() {
        assert!(parse_download_progress("[youtube] abc: Downloading webpage").is_none());
        assert!(parse_download_progress("[download] Destination: data/clip.mp4").is_none());
    }
}
