use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::CutError;

static RE_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):([0-5]\d):([0-5]\d)$").unwrap());

/// A wall-clock offset into the media, `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    secs: u64,
}

impl Timestamp {
    pub fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    pub fn as_secs(&self) -> u64 {
        self.secs
    }
}

impl FromStr for Timestamp {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CutError::InvalidTimestamp {
            value: s.to_string(),
        };

        let caps = RE_TIMESTAMP.captures(s.trim()).ok_or_else(|| invalid())?;
        let hours: u64 = caps[1].parse().map_err(|_| invalid())?;
        let minutes: u64 = caps[2].parse().map_err(|_| invalid())?;
        let seconds: u64 = caps[3].parse().map_err(|_| invalid())?;

        Ok(Self {
            secs: hours * 3600 + minutes * 60 + seconds,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.secs / 3600;
        let minutes = (self.secs % 3600) / 60;
        let seconds = self.secs % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm_ss() {
        let ts: Timestamp = "01:02:03".parse().unwrap();
        assert_eq!(ts.as_secs(), 3723);
    }

    #[test]
    fn parses_single_digit_hour() {
        let ts: Timestamp = "1:00:30".parse().unwrap();
        assert_eq!(ts.as_secs(), 3630);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let ts: Timestamp = " 00:00:05 ".parse().unwrap();
        assert_eq!(ts.as_secs(), 5);
    }

    #[test]
    fn rejects_out_of_range_minutes_and_seconds() {
        assert!("00:60:00".parse::<Timestamp>().is_err());
        assert!("00:00:60".parse::<Timestamp>().is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<Timestamp>().is_err());
        assert!("1:2:3".parse::<Timestamp>().is_err());
        assert!("00:00".parse::<Timestamp>().is_err());
        assert!("abc".parse::<Timestamp>().is_err());
        assert!("00:00:00.5".parse::<Timestamp>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let ts: Timestamp = "12:34:56".parse().unwrap();
        assert_eq!(ts.to_string(), "12:34:56");
        assert_eq!(Timestamp::from_secs(0).to_string(), "00:00:00");
    }
}
