//! Section scanner — one forward pass over the raw scan output.
//!
//! Each line is first reduced to a [`LineKind`] by [`SectionScanner::line_kind`]
//! (a pure function, tested on its own), then [`SectionScanner::feed`] applies
//! the transition for that kind to the single piece of state, the currently
//! open [`Section`]. Summary fields are captured wherever they appear.

use crate::timestamp::TimestampNormalizer;
use crate::types::Summary;
use regex::Regex;
use std::sync::OnceLock;

fn start_re() -> &'static Regex {
    static START_RE: OnceLock<Regex> = OnceLock::new();
    START_RE.get_or_init(|| Regex::new(r"(?i)^Start timestamp:\s*(.*)$").expect("valid start regex"))
}

fn end_re() -> &'static Regex {
    static END_RE: OnceLock<Regex> = OnceLock::new();
    END_RE.get_or_init(|| Regex::new(r"(?i)^End timestamp:\s*(.*)$").expect("valid end regex"))
}

fn total_re() -> &'static Regex {
    static TOTAL_RE: OnceLock<Regex> = OnceLock::new();
    TOTAL_RE.get_or_init(|| {
        Regex::new(r"(?i)^Total number of entries:\s*(\d+)").expect("valid total regex")
    })
}

fn heading_re() -> &'static Regex {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    HEADING_RE.get_or_init(|| {
        Regex::new(r"(?i)^(Changed|Added|Removed) entries\s*:\s*(\d+)").expect("valid heading regex")
    })
}

fn section_re() -> &'static Regex {
    static SECTION_RE: OnceLock<Regex> = OnceLock::new();
    SECTION_RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(Added entries|Removed entries|Changed entries|Detailed information about changes|The attributes of the)",
        )
        .expect("valid section regex")
    })
}

/// A logical buffer that body lines are routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Added,
    Removed,
    Changed,
    DetailedInfo,
    DbAttributes,
}

impl Section {
    fn from_header(header: &str) -> Option<Self> {
        let header = header.to_ascii_lowercase();
        if header.starts_with("added") {
            Some(Section::Added)
        } else if header.starts_with("removed") {
            Some(Section::Removed)
        } else if header.starts_with("changed") {
            Some(Section::Changed)
        } else if header.starts_with("detailed information") {
            Some(Section::DetailedInfo)
        } else if header.starts_with("the attributes") {
            Some(Section::DbAttributes)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Added => write!(f, "added"),
            Section::Removed => write!(f, "removed"),
            Section::Changed => write!(f, "changed"),
            Section::DetailedInfo => write!(f, "detailed-info"),
            Section::DbAttributes => write!(f, "db-attributes"),
        }
    }
}

/// What a single (trimmed) line means to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    StartTimestamp(&'a str),
    EndTimestamp(&'a str),
    TotalEntries(u64),
    /// `Added|Removed|Changed entries: N`: sets a counter and opens the section.
    Heading { section: Section, count: u64 },
    /// Mentions the database/filesystem comparison.
    DbInfo,
    SectionHeader(Section),
    Body,
}

/// Raw lines collected per section, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBuffers {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
    pub detailed: Vec<String>,
    pub db_attributes: Vec<String>,
}

impl SectionBuffers {
    pub fn get(&self, section: Section) -> &[String] {
        match section {
            Section::Added => &self.added,
            Section::Removed => &self.removed,
            Section::Changed => &self.changed,
            Section::DetailedInfo => &self.detailed,
            Section::DbAttributes => &self.db_attributes,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Added => &mut self.added,
            Section::Removed => &mut self.removed,
            Section::Changed => &mut self.changed,
            Section::DetailedInfo => &mut self.detailed,
            Section::DbAttributes => &mut self.db_attributes,
        }
    }
}

/// Everything one pass of the scanner recovers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub summary: Summary,
    pub buffers: SectionBuffers,
    pub db_info: Vec<String>,
}

/// Single-pass line router.
#[derive(Debug)]
pub struct SectionScanner<'n> {
    timestamps: &'n TimestampNormalizer,
    current: Option<Section>,
    outcome: ScanOutcome,
}

impl<'n> SectionScanner<'n> {
    pub fn new(timestamps: &'n TimestampNormalizer) -> Self {
        Self {
            timestamps,
            current: None,
            outcome: ScanOutcome::default(),
        }
    }

    /// Scan a whole line sequence.
    pub fn scan<S: AsRef<str>>(timestamps: &'n TimestampNormalizer, lines: &[S]) -> ScanOutcome {
        let mut scanner = Self::new(timestamps);
        for line in lines {
            scanner.feed(line.as_ref());
        }
        scanner.finish()
    }

    /// Classify a trimmed line. Rules are checked in priority order; a
    /// counter whose digits overflow falls through to the next rule.
    pub fn line_kind(line: &str) -> LineKind<'_> {
        if let Some(caps) = start_re().captures(line) {
            return LineKind::StartTimestamp(caps.get(1).map_or("", |m| m.as_str().trim()));
        }
        if let Some(caps) = end_re().captures(line) {
            return LineKind::EndTimestamp(caps.get(1).map_or("", |m| m.as_str().trim()));
        }
        if let Some(count) = total_re()
            .captures(line)
            .and_then(|caps| caps[1].parse().ok())
        {
            return LineKind::TotalEntries(count);
        }
        if let Some(caps) = heading_re().captures(line) {
            if let (Some(section), Ok(count)) = (Section::from_header(&caps[1]), caps[2].parse()) {
                return LineKind::Heading { section, count };
            }
        }
        if line.to_lowercase().contains("database and filesystem") {
            return LineKind::DbInfo;
        }
        if let Some(section) = section_re()
            .captures(line)
            .and_then(|caps| Section::from_header(&caps[1]))
        {
            return LineKind::SectionHeader(section);
        }
        LineKind::Body
    }

    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        match Self::line_kind(line) {
            LineKind::StartTimestamp(value) => {
                let shown = self.display_timestamp(line, value);
                self.outcome.summary.start_timestamp = Some(shown);
            }
            LineKind::EndTimestamp(value) => {
                let shown = self.display_timestamp(line, value);
                self.outcome.summary.end_timestamp = Some(shown);
            }
            LineKind::TotalEntries(count) => {
                self.outcome.summary.total_scanned = count;
            }
            LineKind::Heading { section, count } => {
                let summary = &mut self.outcome.summary;
                match section {
                    Section::Added => summary.files_added = count,
                    Section::Removed => summary.files_removed = count,
                    Section::Changed => summary.files_changed = count,
                    Section::DetailedInfo | Section::DbAttributes => {}
                }
                self.enter(section);
            }
            LineKind::DbInfo => self.outcome.db_info.push(line.to_string()),
            LineKind::SectionHeader(section) => self.enter(section),
            LineKind::Body => match self.current {
                Some(section) => self.outcome.buffers.get_mut(section).push(line.to_string()),
                None => tracing::trace!(line, "no open section, line dropped"),
            },
        }
    }

    pub fn current_section(&self) -> Option<Section> {
        self.current
    }

    pub fn finish(self) -> ScanOutcome {
        self.outcome
    }

    /// Convert the datetime after the marker, keeping any trailing text such
    /// as `(AIDE 0.18.6)`.
    fn display_timestamp(&self, line: &str, value: &str) -> String {
        let rewritten = self.timestamps.rewrite_embedded(line);
        if rewritten != line {
            if let LineKind::StartTimestamp(shown) | LineKind::EndTimestamp(shown) =
                Self::line_kind(&rewritten)
            {
                return shown.to_string();
            }
        }
        self.timestamps.to_display(value)
    }

    fn enter(&mut self, section: Section) {
        if self.current != Some(section) {
            tracing::debug!(from = ?self.current, to = %section, "section transition");
        }
        self.current = Some(section);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
