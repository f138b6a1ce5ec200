//! Detailed-change normalizer — regroups the flat "Detailed information"
//! buffer into one [`DetailedChangeRecord`] per path.
//!
//! A `File:`/`Directory:`/`Link:` line opens a record; following
//! `attribute: old | new` lines attach to it. Records that collect no
//! attribute lines are dropped.

use crate::timestamp::TimestampNormalizer;
use crate::types::{AttributeDiff, DetailedChangeRecord};

/// Folds detail lines into records.
#[derive(Debug)]
pub struct DetailNormalizer<'a> {
    prefixes: &'a [String],
    timestamps: &'a TimestampNormalizer,
    current: Option<DetailedChangeRecord>,
    records: Vec<DetailedChangeRecord>,
}

impl<'a> DetailNormalizer<'a> {
    /// `prefixes` are the record-opening labels without the trailing colon.
    pub fn new(prefixes: &'a [String], timestamps: &'a TimestampNormalizer) -> Self {
        Self {
            prefixes,
            timestamps,
            current: None,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some((object_type, path)) = self.record_header(line) {
            self.flush();
            self.current = Some(DetailedChangeRecord {
                object_type: object_type.to_string(),
                path: path.trim().to_string(),
                changes: Vec::new(),
            });
            return;
        }

        if !(line.contains(':') && line.contains('|')) {
            return;
        }
        let Some(record) = self.current.as_mut() else {
            tracing::trace!(line, "attribute diff before any record header, dropped");
            return;
        };

        let Some((attribute, values)) = line.split_once(':') else {
            return;
        };
        let (old, new) = values.split_once('|').unwrap_or((values, ""));
        record.changes.push(AttributeDiff {
            attribute: attribute.trim().to_string(),
            old_value: self.timestamps.reformat_value(old.trim()),
            new_value: self.timestamps.reformat_value(new.trim()),
        });
    }

    pub fn finish(mut self) -> Vec<DetailedChangeRecord> {
        self.flush();
        self.records
    }

    fn record_header<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let (prefix, rest) = line.split_once(':')?;
        self.prefixes
            .iter()
            .any(|p| p == prefix)
            .then_some((prefix, rest))
    }

    fn flush(&mut self) {
        match self.current.take() {
            Some(record) if !record.changes.is_empty() => self.records.push(record),
            Some(record) => {
                tracing::debug!(path = %record.path, "detail record without attribute diffs, dropped");
            }
            None => {}
        }
    }
}

/// Normalize a whole detail buffer.
pub fn normalize_detailed<S: AsRef<str>>(
    lines: &[S],
    prefixes: &[String],
    timestamps: &TimestampNormalizer,
) -> Vec<DetailedChangeRecord> {
    let mut normalizer = DetailNormalizer::new(prefixes, timestamps);
    for line in lines {
        normalizer.push(line.as_ref());
    }
    normalizer.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
