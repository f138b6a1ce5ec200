//! Scan output read from any byte stream (stdin in the CLI).

use crate::{split_lines, FeedError, FeedResult, RawSource};
use std::io::Read;

pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl ReaderSource<std::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new("<stdin>", std::io::stdin())
    }
}

impl<R: Read> RawSource for ReaderSource<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_lines(&mut self) -> FeedResult<Vec<String>> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .map_err(|source| FeedError::Stream {
                name: self.name.clone(),
                source,
            })?;
        let lines = split_lines(&bytes);
        tracing::debug!(source = %self.name, lines = lines.len(), "read scan output");
        Ok(lines)
    }
}
