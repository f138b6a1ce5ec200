//! Entry classifier — turns one Added/Removed/Changed section line into an
//! object kind, a change description and a path.
//!
//! Encodings are tried in order, first match wins:
//! decorative → status flags → decoded → bare path → fallback.

use crate::config::ReportSettings;
use crate::types::ChangeEntry;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Mis-decoded em dash some report pipelines leave behind.
const MOJIBAKE_DASH: &str = "\u{e2}\u{20ac}\u{201d}";

fn decorative_re() -> &'static Regex {
    static DECORATIVE_RE: OnceLock<Regex> = OnceLock::new();
    DECORATIVE_RE.get_or_init(|| {
        Regex::new(r"^[-\u{2014}\u{2013}\s]+$").expect("valid decorative regex")
    })
}

fn status_re() -> &'static Regex {
    static STATUS_RE: OnceLock<Regex> = OnceLock::new();
    STATUS_RE.get_or_init(|| {
        Regex::new(r"^\s*(?P<status>[^:]+)\s*:\s*(?P<path>.+)$").expect("valid status regex")
    })
}

fn decoded_re() -> &'static Regex {
    static DECODED_RE: OnceLock<Regex> = OnceLock::new();
    DECODED_RE.get_or_init(|| {
        Regex::new(
            r"^\s*(?P<kind>[A-Za-z ]+?)\s*(?:\((?P<changes>[^)]+)\))?\s*[:\-]?\s*(?P<path>/.*)$",
        )
        .expect("valid decoded regex")
    })
}

fn verdict_word_re() -> &'static Regex {
    static VERDICT_RE: OnceLock<Regex> = OnceLock::new();
    VERDICT_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(Added|Removed|Modified)\b").expect("valid verdict regex")
    })
}

/// Which step of the cascade produced a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Dash/blank separator line; every field is empty.
    Decorative,
    /// `<kind><flags>: <path>`, e.g. `f+++++++: /etc/x`.
    StatusFlags,
    /// `<Type> (<changes>): /path`.
    Decoded,
    /// A line that is just an absolute path.
    BarePath,
    /// Nothing matched; the whole line became the path.
    Fallback,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Decorative => write!(f, "decorative"),
            Encoding::StatusFlags => write!(f, "status-flags"),
            Encoding::Decoded => write!(f, "decoded"),
            Encoding::BarePath => write!(f, "bare-path"),
            Encoding::Fallback => write!(f, "fallback"),
        }
    }
}

/// Result of classifying one line. Any field may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub object_type: String,
    pub change_description: String,
    pub path: String,
    pub encoding: Encoding,
}

impl Classification {
    fn empty(encoding: Encoding) -> Self {
        Self::path_only(String::new(), encoding)
    }

    fn path_only(path: String, encoding: Encoding) -> Self {
        Self {
            object_type: String::new(),
            change_description: String::new(),
            path,
            encoding,
        }
    }

    /// An entry is worth keeping when it names a kind or a path.
    pub fn is_recoverable(&self) -> bool {
        !(self.object_type.is_empty() && self.path.is_empty())
    }

    pub fn into_entry(self) -> ChangeEntry {
        ChangeEntry {
            object_type: self.object_type,
            change_description: self.change_description,
            path: self.path,
        }
    }
}

/// Classifies section lines using configurable code tables.
#[derive(Debug, Clone)]
pub struct EntryClassifier {
    object_kinds: HashMap<char, String>,
    attribute_flags: HashMap<char, String>,
    fallback_object_label: String,
}

impl EntryClassifier {
    pub fn new(
        object_kinds: HashMap<char, String>,
        attribute_flags: HashMap<char, String>,
        fallback_object_label: impl Into<String>,
    ) -> Self {
        Self {
            object_kinds,
            attribute_flags,
            fallback_object_label: fallback_object_label.into(),
        }
    }

    pub fn from_settings(settings: &ReportSettings) -> Self {
        Self::new(
            settings.object_kinds.clone(),
            settings.attribute_flags.clone(),
            settings.fallback_object_label.clone(),
        )
    }

    pub fn classify(&self, raw: &str) -> Classification {
        let line = raw.trim();

        if line.is_empty() || line == MOJIBAKE_DASH || decorative_re().is_match(line) {
            return Classification::empty(Encoding::Decorative);
        }

        let result = self
            .status_flags(line)
            .or_else(|| decoded(line))
            .or_else(|| bare_path(line))
            .unwrap_or_else(|| Classification::path_only(line.to_string(), Encoding::Fallback));

        tracing::trace!(line, encoding = %result.encoding, "classified entry");
        result
    }

    fn status_flags(&self, line: &str) -> Option<Classification> {
        let caps = status_re().captures(line)?;
        let status = caps.name("status")?.as_str().trim();
        let path = caps.name("path")?.as_str().trim();

        let mut chars = status.chars();
        let object_type = chars
            .next()
            .and_then(|code| self.object_kinds.get(&code))
            .unwrap_or(&self.fallback_object_label)
            .clone();

        let flags: String = chars.filter(|c| !c.is_whitespace()).collect();
        let mut changes: Vec<&str> = Vec::new();
        if flags.contains('+') {
            changes.push("Added");
        }
        if flags.contains('-') {
            changes.push("Removed");
        }
        for flag in flags.chars() {
            if matches!(flag, '+' | '-' | '=' | '.') {
                continue;
            }
            if let Some(label) = self.attribute_flags.get(&flag) {
                if !changes.contains(&label.as_str()) {
                    changes.push(label.as_str());
                }
            }
        }

        Some(Classification {
            object_type,
            change_description: changes.join(", "),
            path: path.to_string(),
            encoding: Encoding::StatusFlags,
        })
    }
}

impl Default for EntryClassifier {
    fn default() -> Self {
        Self::from_settings(&ReportSettings::default())
    }
}

fn decoded(line: &str) -> Option<Classification> {
    let caps = decoded_re().captures(line)?;
    let object_type = caps.name("kind")?.as_str().trim().to_string();
    let path = caps.name("path")?.as_str().trim().to_string();

    let raw_changes = caps.name("changes").map_or("", |m| m.as_str());
    let stripped = verdict_word_re().replace_all(raw_changes, "");
    let change_description = stripped
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Some(Classification {
        object_type,
        change_description,
        path,
        encoding: Encoding::Decoded,
    })
}

fn bare_path(line: &str) -> Option<Classification> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('/'), Some(second)) if !second.is_whitespace() => {
            Some(Classification::path_only(line.to_string(), Encoding::BarePath))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
