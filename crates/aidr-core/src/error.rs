//! Errors raised while loading and resolving configuration.
//!
//! The normalization engine itself never fails; only turning a configuration
//! document into [`ReportSettings`](crate::config::ReportSettings) can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("unknown time zone {value:?} for `{field}`")]
    UnknownZone { field: &'static str, value: String },
    #[error("invalid code {code:?} in `{table}`: expected a single character")]
    InvalidCode { table: &'static str, code: String },
    #[error("invalid display format {0:?}")]
    InvalidFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
