//! Test builders — ergonomic constructors for engines and scan output.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use aidr::{ChangeEntry, ReportEngine, ReportSettings};

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

/// Default settings with the display zone pinned to UTC, so expectations read
/// the same as the input.
pub fn utc_settings() -> ReportSettings {
    ReportSettings {
        display_zone: chrono_tz::UTC,
        ..ReportSettings::default()
    }
}

pub fn utc_engine() -> ReportEngine {
    ReportEngine::new(&utc_settings())
}

// ---------------------------------------------------------------------------
// ReportLines
// ---------------------------------------------------------------------------

/// Fluent builder for scan output.
///
/// # Example
///
/// ```rust
/// let lines = ReportLines::new()
///     .start("2024-03-05 09:15:02")
///     .added(&["f++++++++++++++++: /etc/x"])
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ReportLines {
    lines: Vec<String>,
}

impl ReportLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn start(self, ts: &str) -> Self {
        self.line(format!("Start timestamp: {ts}"))
    }

    pub fn end(self, ts: &str) -> Self {
        self.line(format!("End timestamp: {ts}"))
    }

    pub fn total(self, n: u64) -> Self {
        self.line(format!("Total number of entries: {n}"))
    }

    /// `Added entries: N` heading followed by the body lines.
    pub fn added(self, body: &[&str]) -> Self {
        self.section("Added", body)
    }

    pub fn removed(self, body: &[&str]) -> Self {
        self.section("Removed", body)
    }

    pub fn changed(self, body: &[&str]) -> Self {
        self.section("Changed", body)
    }

    pub fn detailed(self, body: &[&str]) -> Self {
        self.block("Detailed information about changes:", body)
    }

    pub fn db_attributes(self, body: &[&str]) -> Self {
        self.block("The attributes of the (uncompressed) database(s):", body)
    }

    pub fn build(self) -> Vec<String> {
        self.lines
    }

    fn section(self, name: &str, body: &[&str]) -> Self {
        self.block(&format!("{name} entries: {}", body.len()), body)
    }

    fn block(mut self, header: &str, body: &[&str]) -> Self {
        self.lines.push(header.to_string());
        self.lines.extend(body.iter().map(|l| l.to_string()));
        self
    }
}

// ---------------------------------------------------------------------------
// Expected values
// ---------------------------------------------------------------------------

pub fn entry(object_type: &str, change_description: &str, path: &str) -> ChangeEntry {
    ChangeEntry {
        object_type: object_type.to_string(),
        change_description: change_description.to_string(),
        path: path.to_string(),
    }
}

/// Entry with only a path (bare-path and fallback lines).
pub fn path_entry(path: &str) -> ChangeEntry {
    entry("", "", path)
}

pub fn to_lines(corpus: &[&str]) -> Vec<String> {
    corpus.iter().map(|l| l.to_string()).collect()
}
