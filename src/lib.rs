//! aidr — AIDE report normalizer.
//!
//! Reads the free-text output of an integrity scan and turns it into a
//! structured [`NormalizedReport`]. This crate re-exports the two workspace
//! members so integration tests and the binary can import everything from one
//! place, and adds [`output`] for turning a report into JSON or text.
//!
//! # Architecture
//!
//! ```text
//! feeds (file / stdin) ──► capture filter ──► ReportEngine ──► output
//! ```
//!
//! Every stage is synchronous; one invocation handles one scan output.

pub mod output;

pub use aidr_core::*;
pub use aidr_feeds as feeds;
