//! aidr-core — AIDE report normalizer core library.
//!
//! Turns the free-text output of an integrity scan into a
//! [`NormalizedReport`]. The engine is a pure, synchronous transform: one call
//! consumes the whole line sequence and returns one value.
//!
//! # Architecture
//!
//! ```text
//! raw lines ──► SectionScanner ──► EntryClassifier ───────┐
//!                    │                                     ├──► NormalizedReport
//!                    └──────────► DetailNormalizer ────────┘
//!                 (TimestampNormalizer used throughout)
//! ```

pub mod classifier;
pub mod config;
pub mod detail;
pub mod error;
pub mod report;
pub mod scanner;
pub mod timestamp;
pub mod types;

pub use classifier::{Classification, Encoding, EntryClassifier};
pub use config::{Config, ReportSettings};
pub use error::ConfigError;
pub use report::ReportEngine;
pub use scanner::{LineKind, ScanOutcome, Section, SectionScanner};
pub use timestamp::TimestampNormalizer;
pub use types::{
    AttributeDiff, ChangeEntry, DatabaseAttributes, DetailedChangeRecord, NormalizedReport,
    Summary,
};
