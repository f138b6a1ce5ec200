//! Report assembler — composes scanner, classifier and detail normalizer
//! into one [`NormalizedReport`].
//!
//! [`ReportEngine::normalize`] is total: any input, including no input at all,
//! yields a report. The engine holds only immutable settings, so one instance
//! can serve concurrent callers.

use crate::classifier::EntryClassifier;
use crate::config::ReportSettings;
use crate::detail::normalize_detailed;
use crate::scanner::{Section, SectionScanner};
use crate::timestamp::TimestampNormalizer;
use crate::types::{ChangeEntry, DatabaseAttributes, NormalizedReport};

#[derive(Debug, Clone)]
pub struct ReportEngine {
    timestamps: TimestampNormalizer,
    classifier: EntryClassifier,
    record_prefixes: Vec<String>,
}

impl ReportEngine {
    pub fn new(settings: &ReportSettings) -> Self {
        Self {
            timestamps: TimestampNormalizer::new(
                settings.source_zone,
                settings.display_zone,
                settings.display_format.clone(),
            ),
            classifier: EntryClassifier::from_settings(settings),
            record_prefixes: settings.record_prefixes.clone(),
        }
    }

    pub fn timestamps(&self) -> &TimestampNormalizer {
        &self.timestamps
    }

    pub fn classifier(&self) -> &EntryClassifier {
        &self.classifier
    }

    pub fn normalize<S: AsRef<str>>(&self, lines: &[S]) -> NormalizedReport {
        let scan = SectionScanner::scan(&self.timestamps, lines);
        let buffers = &scan.buffers;

        let report = NormalizedReport {
            added: self.classify_section(buffers.get(Section::Added)),
            removed: self.classify_section(buffers.get(Section::Removed)),
            changed: self.classify_section(buffers.get(Section::Changed)),
            detailed: normalize_detailed(
                buffers.get(Section::DetailedInfo),
                &self.record_prefixes,
                &self.timestamps,
            ),
            db_attributes: DatabaseAttributes::from_lines(buffers.get(Section::DbAttributes)),
            db_info: scan.db_info,
            summary: scan.summary,
        };

        tracing::debug!(
            lines = lines.len(),
            added = report.added.len(),
            removed = report.removed.len(),
            changed = report.changed.len(),
            detailed = report.detailed.len(),
            db_attributes = report.db_attributes.len(),
            "normalized scan output"
        );
        report
    }

    fn classify_section(&self, lines: &[String]) -> Vec<ChangeEntry> {
        lines
            .iter()
            .map(|line| self.classifier.classify(line))
            .filter(|c| c.is_recoverable())
            .map(|c| c.into_entry())
            .collect()
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new(&ReportSettings::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
