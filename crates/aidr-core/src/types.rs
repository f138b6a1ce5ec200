//! Core types for aidr-core.
//!
//! This module defines the normalised report model shared by every layer: the
//! [`Summary`] counters, the classified [`ChangeEntry`] lists, per-path
//! [`DetailedChangeRecord`]s and the [`DatabaseAttributes`] block. All of them
//! are plain values built during one parse pass and never mutated afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scan summary counters and timestamps.
///
/// Timestamps are already in the display zone and format when present; a
/// value that could not be parsed is carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub files_added: u64,
    pub files_removed: u64,
    pub files_changed: u64,
    pub total_scanned: u64,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
}

impl Summary {
    /// Added + removed + changed, saturating.
    pub fn files_affected(&self) -> u64 {
        self.files_added
            .saturating_add(self.files_removed)
            .saturating_add(self.files_changed)
    }
}

/// One line of an Added/Removed/Changed section after classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Object kind label (`File`, `Directory`, …). Empty when unknown.
    pub object_type: String,
    /// Comma-joined change labels. Empty when none were recognised.
    pub change_description: String,
    pub path: String,
}

/// One attribute with its old and new value for a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDiff {
    pub attribute: String,
    pub old_value: String,
    pub new_value: String,
}

/// All attribute diffs reported for one path in the detailed section.
///
/// `changes` keeps the order in which attributes appeared in the text and is
/// never empty for a record that made it into a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedChangeRecord {
    pub object_type: String,
    pub path: String,
    pub changes: Vec<AttributeDiff>,
}

/// Ordered `name → value` block describing the scan database.
///
/// Built with [`DatabaseAttributes::from_lines`]: a `key: value` line opens a
/// key, a following line without `:` is concatenated onto that key's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseAttributes(IndexMap<String, String>);

impl DatabaseAttributes {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut acc = AttributeAccumulator::default();
        for line in lines {
            acc.push(line.as_ref());
        }
        acc.finish()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Running state while folding the database-attribute lines.
#[derive(Debug, Default)]
struct AttributeAccumulator {
    attrs: IndexMap<String, String>,
    current_key: Option<String>,
}

impl AttributeAccumulator {
    fn push(&mut self, line: &str) {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_string();
            self.attrs.insert(key.clone(), value.trim().to_string());
            self.current_key = Some(key);
        } else if let Some(key) = &self.current_key {
            if let Some(value) = self.attrs.get_mut(key) {
                value.push_str(line.trim());
            }
        } else {
            tracing::trace!(line, "database attribute line before any key, dropped");
        }
    }

    fn finish(self) -> DatabaseAttributes {
        DatabaseAttributes(self.attrs)
    }
}

/// The normalised result of one scan output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedReport {
    pub summary: Summary,
    pub added: Vec<ChangeEntry>,
    pub removed: Vec<ChangeEntry>,
    pub changed: Vec<ChangeEntry>,
    pub detailed: Vec<DetailedChangeRecord>,
    /// Free-text lines mentioning the database/filesystem comparison.
    pub db_info: Vec<String>,
    pub db_attributes: DatabaseAttributes,
}

impl NormalizedReport {
    /// True when any entry list or detailed record is non-empty.
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && self.detailed.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn continuation_lines_concatenate_onto_last_key() {
        let attrs = DatabaseAttributes::from_lines(&["Hash: abc", "def"]);
        assert_eq!(attrs.get("Hash"), Some("abcdef"));
    }

    #[test]
    fn continuation_before_any_key_is_dropped() {
        let attrs = DatabaseAttributes::from_lines(&[
            "/var/lib/aide/aide.db.gz",
            "SHA256   : K5qzDIDt0cqJ",
            "           +ekYsFnBb",
            "MD5      : 0f1e",
        ]);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("SHA256"), Some("K5qzDIDt0cqJ+ekYsFnBb"));
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["SHA256", "MD5"]);
    }

    #[test]
    fn repeated_key_keeps_first_position_and_latest_value() {
        let attrs = DatabaseAttributes::from_lines(&["A: 1", "B: 2", "A: 3"]);
        let pairs: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn files_affected_sums_counters() {
        let summary = Summary {
            files_added: 1,
            files_removed: 2,
            files_changed: 3,
            ..Summary::default()
        };
        assert_eq!(summary.files_affected(), 6);
    }

    #[test]
    fn empty_report_has_no_changes() {
        assert!(!NormalizedReport::default().has_changes());
    }

    #[test]
    fn database_attributes_serialize_as_ordered_object() {
        let attrs = DatabaseAttributes::from_lines(&["Zeta: 1", "Alpha: 2"]);
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"Zeta":"1","Alpha":"2"}"#);
        let back: DatabaseAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }
}
