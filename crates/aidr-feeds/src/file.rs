//! Stored scan output read from a file.

use crate::{split_lines, FeedError, FeedResult, RawSource};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RawSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&mut self) -> FeedResult<Vec<String>> {
        let bytes = std::fs::read(&self.path).map_err(|source| FeedError::File {
            path: self.path.clone(),
            source,
        })?;
        let lines = split_lines(&bytes);
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "read scan output");
        Ok(lines)
    }
}
