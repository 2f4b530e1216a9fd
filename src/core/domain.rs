use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::{constants::TIME_FORMAT, gauge::messages::ProtoSuiteResult};

/// Directory that holds the artifact of a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLocation {
    dir: PathBuf,
}

impl ReportLocation {
    pub fn new<T: AsRef<Path>>(dir: T) -> Self {
        ReportLocation {
            dir: dir.as_ref().into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl fmt::Display for ReportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir.display())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamingStrategy {
    /// One directory per run, named after the local time of the run.
    Timestamped,
    /// Every run reuses the `xml-report` directory itself.
    FixedEmpty,
}

impl NamingStrategy {
    pub fn select(overwrite_enabled: bool) -> Self {
        if overwrite_enabled {
            NamingStrategy::FixedEmpty
        } else {
            NamingStrategy::Timestamped
        }
    }

    pub fn name_token(&self) -> String {
        self.name_token_at(Local::now())
    }

    pub fn name_token_at(&self, now: DateTime<Local>) -> String {
        match self {
            NamingStrategy::Timestamped => now.format(TIME_FORMAT).to_string(),
            NamingStrategy::FixedEmpty => String::new(),
        }
    }
}

/// Only the literal `true`, in any case, enables overwriting.
pub fn overwrite_enabled(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// What the host told the plugin, in the order it was received.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    SuiteCompleted(Box<ProtoSuiteResult>),
    Kill,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use regex::Regex;

    #[test]
    fn test_overwrite_flag_is_case_insensitive_true() {
        assert!(overwrite_enabled(Some("true")));
        assert!(overwrite_enabled(Some("TRUE")));
        assert!(overwrite_enabled(Some("True")));
    }

    #[test]
    fn test_anything_but_true_selects_timestamped() {
        for raw in [
            None,
            Some(""),
            Some("false"),
            Some("yes"),
            Some("1"),
            Some(" true"),
            Some("truee"),
        ] {
            assert_eq!(
                NamingStrategy::select(overwrite_enabled(raw)),
                NamingStrategy::Timestamped,
                "value {:?}",
                raw
            );
        }
        assert_eq!(
            NamingStrategy::select(overwrite_enabled(Some("tRuE"))),
            NamingStrategy::FixedEmpty
        );
    }

    #[test]
    fn test_fixed_empty_token_is_always_empty() {
        let early = Local.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(NamingStrategy::FixedEmpty.name_token_at(early), "");
        assert_eq!(NamingStrategy::FixedEmpty.name_token(), "");
    }

    #[test]
    fn test_timestamped_token_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(
            NamingStrategy::Timestamped.name_token_at(at),
            "2024-03-07 09.05.02"
        );

        let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}\.\d{2}\.\d{2}$").unwrap();
        assert!(pattern.is_match(&NamingStrategy::Timestamped.name_token()));
    }

    #[test]
    fn test_timestamped_tokens_do_not_decrease() {
        let first = NamingStrategy::Timestamped.name_token();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let second = NamingStrategy::Timestamped.name_token();
        assert!(first <= second);

        let earlier = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let later = Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(
            NamingStrategy::Timestamped.name_token_at(earlier)
                < NamingStrategy::Timestamped.name_token_at(later)
        );
    }
}
