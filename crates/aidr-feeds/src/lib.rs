//! aidr-feeds — raw scan-output sources for aidr.
//!
//! Each source reads raw bytes from somewhere (a stored report file, stdin,
//! any reader), converts them to UTF-8 lossily and hands back the lines for
//! the report engine. [`capture`] trims a freshly captured scan down to the
//! part worth storing; [`rules`] reads the monitored-path selections of a
//! scan configuration.

pub mod capture;
pub mod file;
pub mod reader;
pub mod rules;

use std::path::PathBuf;
use thiserror::Error;

pub use capture::{differences_found, CaptureFilter, QuickStats};
pub use file::FileSource;
pub use reader::ReaderSource;
pub use rules::{MonitoredPaths, PathSelection};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {name}: {source}")]
    Stream {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type FeedResult<T> = Result<T, FeedError>;

/// Implemented by each raw-output source.
pub trait RawSource {
    /// Human-readable name for logs and error messages.
    fn name(&self) -> String;

    /// Read the whole output as lines, without trailing newlines.
    fn read_lines(&mut self) -> FeedResult<Vec<String>>;
}

/// Split lossily-decoded bytes into lines, dropping `\r` from CRLF endings.
pub(crate) fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
