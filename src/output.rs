//! Output formats for a [`NormalizedReport`].

use crate::NormalizedReport;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Compact JSON, one line.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    /// Plain-text summary for terminals and mail bodies.
    Text,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Pretty => write!(f, "pretty"),
            Format::Text => write!(f, "text"),
        }
    }
}

pub fn render(report: &NormalizedReport, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Json => serde_json::to_string(report),
        Format::Pretty => serde_json::to_string_pretty(report),
        Format::Text => Ok(render_text(report)),
    }
}

/// Human-readable digest: summary counters, then one line per entry.
pub fn render_text(report: &NormalizedReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut impl fmt::Write, report: &NormalizedReport) -> fmt::Result {
    let s = &report.summary;
    writeln!(out, "Total Files Scanned: {}", s.total_scanned)?;
    writeln!(out, "Files Added:         {}", s.files_added)?;
    writeln!(out, "Files Removed:       {}", s.files_removed)?;
    writeln!(out, "Files Changed:       {}", s.files_changed)?;
    if let Some(start) = &s.start_timestamp {
        writeln!(out, "Start Timestamp:     {start}")?;
    }
    if let Some(end) = &s.end_timestamp {
        writeln!(out, "End Timestamp:       {end}")?;
    }

    for line in &report.db_info {
        writeln!(out, "\n{line}")?;
    }

    for (title, entries) in [
        ("Added Files", &report.added),
        ("Removed Files", &report.removed),
        ("Changed Files", &report.changed),
    ] {
        if entries.is_empty() {
            continue;
        }
        writeln!(out, "\n{title}:")?;
        for entry in entries {
            let kind = or_dash(&entry.object_type);
            if entry.change_description.is_empty() {
                writeln!(out, "  {kind:<18} {}", entry.path)?;
            } else {
                writeln!(out, "  {kind:<18} {} ({})", entry.path, entry.change_description)?;
            }
        }
    }

    if !report.detailed.is_empty() {
        writeln!(out, "\nDetailed Differences:")?;
        for record in &report.detailed {
            writeln!(out, "  {}: {}", record.object_type, record.path)?;
            for diff in &record.changes {
                writeln!(
                    out,
                    "    {:<12} {} -> {}",
                    diff.attribute, diff.old_value, diff.new_value
                )?;
            }
        }
    }

    if !report.db_attributes.is_empty() {
        writeln!(out, "\nDatabase Attributes:")?;
        for (key, value) in report.db_attributes.iter() {
            writeln!(out, "  {key:<12} {value}")?;
        }
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}
