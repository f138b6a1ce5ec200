//! Timestamp normalizer — converts scan timestamps into the display zone.
//!
//! Every entry point is best-effort: a value that does not parse is returned
//! unchanged. Malformed timestamps are data, never errors.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use regex::{Captures, Regex};
use std::fmt::Write as _;
use std::sync::OnceLock;

/// Naive layout of raw scan timestamps, interpreted in the source zone.
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Same layout carrying an explicit numeric offset (`+0000`).
const OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

fn embedded_re() -> &'static Regex {
    static EMBEDDED_RE: OnceLock<Regex> = OnceLock::new();
    EMBEDDED_RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?P<lead>(?:Start|End)\s+timestamp:\s*)(?P<ts>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(?: [+-]\d{4})?)",
        )
        .expect("valid embedded timestamp regex")
    })
}

/// Converts between the source zone of raw timestamps and the display zone.
#[derive(Debug, Clone)]
pub struct TimestampNormalizer {
    source: Tz,
    display: Tz,
    display_format: String,
}

impl TimestampNormalizer {
    /// `display_format` is a strftime string; it is expected to be validated
    /// already (see [`Config::settings`](crate::config::Config::settings)).
    pub fn new(source: Tz, display: Tz, display_format: impl Into<String>) -> Self {
        Self {
            source,
            display,
            display_format: display_format.into(),
        }
    }

    /// Convert `YYYY-MM-DD HH:MM:SS` (source zone) or the same with a
    /// `±HHMM` offset into the display zone and format.
    pub fn to_display(&self, raw: &str) -> String {
        let value = raw.trim();
        self.parse_naive(value)
            .or_else(|| parse_offset(value))
            .and_then(|dt| self.render(dt))
            .unwrap_or_else(|| raw.to_string())
    }

    /// Reformat an attribute value if it is a `YYYY-MM-DD HH:MM:SS ±HHMM`
    /// timestamp. Anything else (sizes, hashes, modes) passes through.
    pub fn reformat_value(&self, raw: &str) -> String {
        parse_offset(raw.trim())
            .and_then(|dt| self.render(dt))
            .unwrap_or_else(|| raw.to_string())
    }

    /// Rewrite every datetime after `Start timestamp:` / `End timestamp:` in
    /// place, leaving the rest of the line as it was. Lines without a raw
    /// `YYYY-MM-DD HH:MM:SS` datetime after a marker are returned unchanged.
    ///
    /// The output is display text. Unless the display format differs from
    /// the raw layout, feeding it back in converts it again.
    pub fn rewrite_embedded(&self, line: &str) -> String {
        embedded_re()
            .replace_all(line, |caps: &Captures<'_>| {
                let ts = &caps["ts"];
                match self
                    .parse_naive(ts)
                    .or_else(|| parse_offset(ts))
                    .and_then(|dt| self.render(dt))
                {
                    Some(display) => format!("{}{display}", &caps["lead"]),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    fn parse_naive(&self, value: &str) -> Option<DateTime<FixedOffset>> {
        let naive = NaiveDateTime::parse_from_str(value, NAIVE_FORMAT).ok()?;
        self.source
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.fixed_offset())
    }

    fn render(&self, dt: DateTime<FixedOffset>) -> Option<String> {
        let local = dt.with_timezone(&self.display);
        let mut out = String::new();
        write!(out, "{}", local.format(&self.display_format)).ok()?;
        Some(out)
    }
}

fn parse_offset(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, OFFSET_FORMAT).ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
