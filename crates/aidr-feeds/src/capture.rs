//! Capture filter — prepares freshly captured scan stdout for storage.
//!
//! The scanner prints warnings and preamble before the report proper. Only
//! the part from the first `Start timestamp:` line onward is kept and
//! `WARNING:` lines are dropped. Timestamps stay in the source zone; the
//! report engine converts them once when it normalizes the stored text.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const START_MARKER: &str = "Start timestamp:";
const WARNING_MARKER: &str = "WARNING:";

/// Phrases that mean the scan saw something worth reporting.
const DIFFERENCE_MARKERS: &[&str] = &["found differences", "added entries", "removed entries"];

fn changed_re() -> &'static Regex {
    static CHANGED_RE: OnceLock<Regex> = OnceLock::new();
    CHANGED_RE.get_or_init(|| {
        Regex::new(r"(?im)^\s*Changed entries\s*:\s*(\d+)").expect("valid changed regex")
    })
}

fn added_re() -> &'static Regex {
    static ADDED_RE: OnceLock<Regex> = OnceLock::new();
    ADDED_RE.get_or_init(|| {
        Regex::new(r"(?im)^\s*Added entries\s*:\s*(\d+)").expect("valid added regex")
    })
}

fn removed_re() -> &'static Regex {
    static REMOVED_RE: OnceLock<Regex> = OnceLock::new();
    REMOVED_RE.get_or_init(|| {
        Regex::new(r"(?im)^\s*Removed entries\s*:\s*(\d+)").expect("valid removed regex")
    })
}

fn found_changed_re() -> &'static Regex {
    static FOUND_RE: OnceLock<Regex> = OnceLock::new();
    FOUND_RE.get_or_init(|| {
        Regex::new(r"Found\s+(\d+)\s+entries\s+that\s+have\s+changed").expect("valid found regex")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureFilter;

impl CaptureFilter {
    pub fn new() -> Self {
        Self
    }

    /// Keep lines from the first start marker on, minus warnings. Output
    /// without a start marker yields nothing.
    pub fn apply<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let kept: Vec<String> = lines
            .iter()
            .map(|line| line.as_ref())
            .skip_while(|line| !line.starts_with(START_MARKER))
            .filter(|line| !line.starts_with(WARNING_MARKER))
            .map(str::to_string)
            .collect();

        if kept.is_empty() && !lines.is_empty() {
            tracing::warn!(lines = lines.len(), "no start timestamp in captured output, nothing kept");
        }
        kept
    }
}

/// Whether raw output reports any difference at all.
pub fn differences_found(text: &str) -> bool {
    let lower = text.to_lowercase();
    DIFFERENCE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Counters pulled straight from raw text, without a full parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub files_changed: u64,
    pub files_added: u64,
    pub files_removed: u64,
}

impl QuickStats {
    pub fn extract(text: &str) -> Self {
        let changed = first_count(changed_re(), text).or_else(|| first_count(found_changed_re(), text));
        Self {
            files_changed: changed.unwrap_or(0),
            files_added: first_count(added_re(), text).unwrap_or(0),
            files_removed: first_count(removed_re(), text).unwrap_or(0),
        }
    }

    pub fn files_affected(&self) -> u64 {
        self.files_changed
            .saturating_add(self.files_added)
            .saturating_add(self.files_removed)
    }
}

fn first_count(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text).and_then(|caps| caps[1].parse().ok())
}
