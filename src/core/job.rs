use std::time::{Duration, Instant};

use crate::core::timestamp::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Finished,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl CutRange {
    /// Signed: an inverted range is handed to ffmpeg as-is so the
    /// failure surfaces from the tool, not from this crate.
    pub fn duration_secs(&self) -> i64 {
        self.end.as_secs() as i64 - self.start.as_secs() as i64
    }
}

/// One user request: fetch a URL, cut a range out of it, write a named file.
#[derive(Debug, Clone)]
pub struct Job {
    /// `None` reuses a file already present under the data dir.
    pub url: Option<String>,
    pub output_name: String,
    /// `None` stops after the download.
    pub range: Option<CutRange>,
    pub status: JobStatus,
    pub started_at: Option<Instant>,
    pub ended_at: Option<Instant>,
}

impl Job {
    pub fn new(url: Option<String>, output_name: String, range: Option<CutRange>) -> Self {
        Self {
            url,
            output_name,
            range,
            status: JobStatus::Pending,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> CutRange {
        CutRange {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn duration_of_forward_range() {
        assert_eq!(range("00:01:00", "00:02:30").duration_secs(), 90);
    }

    #[test]
    fn inverted_range_stays_negative() {
        assert_eq!(range("00:02:00", "00:01:00").duration_secs(), -60);
    }

    #[test]
    fn new_job_is_pending() {
        let job = Job::new(None, "clip.mp4".to_string(), None);
        assert_eq!(job.status, JobStatus::Pending);
        assert!(job.elapsed().is_none());
    }
}
