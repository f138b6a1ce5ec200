//! Read-only view of the monitored paths in a scan configuration file.
//!
//! Two line shapes matter: `/some/path RULE` selects a path for monitoring,
//! and `NAME = p+i+sha256` defines a rule group. Anything else (comments,
//! `@@define` macros, `database=` settings) is skipped.

use crate::{FeedError, FeedResult};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;

fn selection_re() -> &'static Regex {
    static SELECTION_RE: OnceLock<Regex> = OnceLock::new();
    SELECTION_RE.get_or_init(|| {
        Regex::new(r"^(/[\w/.\-*$]+)\s+(.+)$").expect("valid selection regex")
    })
}

fn rule_group_re() -> &'static Regex {
    static RULE_GROUP_RE: OnceLock<Regex> = OnceLock::new();
    RULE_GROUP_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*([A-Za-z0-9+]+)$").expect("valid rule group regex")
    })
}

/// One monitored path and the rule expression applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSelection {
    pub path: String,
    pub rule: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitoredPaths {
    /// Selections in file order.
    pub selections: Vec<PathSelection>,
    /// Rule group names, sorted and unique.
    pub rule_groups: Vec<String>,
}

impl MonitoredPaths {
    pub fn from_path(path: &Path) -> FeedResult<Self> {
        let file = std::fs::File::open(path).map_err(|source| FeedError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file)).map_err(|err| match err {
            FeedError::Stream { source, .. } => FeedError::File {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_reader<R: BufRead>(reader: R) -> FeedResult<Self> {
        let mut selections = Vec::new();
        let mut groups = BTreeSet::new();

        for line in reader.lines() {
            let line = line.map_err(|source| FeedError::Stream {
                name: "scan configuration".to_string(),
                source,
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = selection_re().captures(line) {
                selections.push(PathSelection {
                    path: caps[1].to_string(),
                    rule: caps[2].to_string(),
                });
            } else if let Some(caps) = rule_group_re().captures(line) {
                if caps[2].contains('+') {
                    groups.insert(caps[1].to_string());
                }
            }
        }

        tracing::debug!(
            selections = selections.len(),
            rule_groups = groups.len(),
            "read monitored paths"
        );
        Ok(Self {
            selections,
            rule_groups: groups.into_iter().collect(),
        })
    }
}
