//! Configuration types for aidr.
//!
//! [`Config::load`] layers an optional user file and `AIDR_*` environment
//! variables over the embedded defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).
//! [`Config::settings`] validates the raw values into [`ReportSettings`], the
//! form the engine is constructed from.

use crate::error::{ConfigError, ConfigResult};
use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[time]
source_zone    = "UTC"
display_zone   = "Asia/Karachi"
display_format = "%d-%m-%Y %H:%M:%S"

[codes]
fallback_object_label = "Object"

[[codes.object_kinds]]
code = "f"
label = "File"
[[codes.object_kinds]]
code = "d"
label = "Directory"
[[codes.object_kinds]]
code = "l"
label = "Link"
[[codes.object_kinds]]
code = "L"
label = "Symlink"
[[codes.object_kinds]]
code = "s"
label = "Socket"
[[codes.object_kinds]]
code = "b"
label = "Block Device"
[[codes.object_kinds]]
code = "c"
label = "Character Device"

[[codes.attribute_flags]]
code = "p"
label = "permissions"
[[codes.attribute_flags]]
code = "i"
label = "inode"
[[codes.attribute_flags]]
code = "n"
label = "number of links"
[[codes.attribute_flags]]
code = "u"
label = "user ID"
[[codes.attribute_flags]]
code = "g"
label = "group ID"
[[codes.attribute_flags]]
code = "s"
label = "size"
[[codes.attribute_flags]]
code = "b"
label = "block count"
[[codes.attribute_flags]]
code = "m"
label = "modification time"
[[codes.attribute_flags]]
code = "a"
label = "access time"
[[codes.attribute_flags]]
code = "c"
label = "checksum/content"
[[codes.attribute_flags]]
code = "l"
label = "link name"
[[codes.attribute_flags]]
code = "x"
label = "extended attributes"

[detail]
record_prefixes = ["Directory", "File", "Link"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration as read from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub codes: CodesConfig,
    #[serde(default)]
    pub detail: DetailConfig,
}

/// `[time]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeConfig {
    #[serde(default = "default_source_zone")]
    pub source_zone: String,
    #[serde(default = "default_display_zone")]
    pub display_zone: String,
    #[serde(default = "default_display_format")]
    pub display_format: String,
}

fn default_source_zone() -> String { "UTC".to_string() }
fn default_display_zone() -> String { "Asia/Karachi".to_string() }
fn default_display_format() -> String { "%d-%m-%Y %H:%M:%S".to_string() }

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            source_zone: default_source_zone(),
            display_zone: default_display_zone(),
            display_format: default_display_format(),
        }
    }
}

/// One `{ code, label }` row of a code table.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeLabel {
    pub code: String,
    pub label: String,
}

/// `[codes]` section: the status-flag lookup tables.
#[derive(Debug, Clone, Deserialize)]
pub struct CodesConfig {
    #[serde(default = "default_fallback_object_label")]
    pub fallback_object_label: String,
    #[serde(default)]
    pub object_kinds: Vec<CodeLabel>,
    #[serde(default)]
    pub attribute_flags: Vec<CodeLabel>,
}

fn default_fallback_object_label() -> String { "Object".to_string() }

impl Default for CodesConfig {
    fn default() -> Self {
        Self {
            fallback_object_label: default_fallback_object_label(),
            object_kinds: Vec::new(),
            attribute_flags: Vec::new(),
        }
    }
}

/// `[detail]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailConfig {
    /// Line prefixes (before the `:`) that open a detailed-change record.
    #[serde(default = "default_record_prefixes")]
    pub record_prefixes: Vec<String>,
}

fn default_record_prefixes() -> Vec<String> {
    ["Directory", "File", "Link"].iter().map(|s| s.to_string()).collect()
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self { record_prefixes: default_record_prefixes() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `path` (or the per-user file when
    /// `path` is `None` and the file exists), then `AIDR_*` environment
    /// variables. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let user_file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .add_source(
                config::Environment::with_prefix("AIDR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Validate into engine settings.
    pub fn settings(&self) -> ConfigResult<ReportSettings> {
        let display_format = self.time.display_format.clone();
        if StrftimeItems::new(&display_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidFormat(display_format));
        }

        Ok(ReportSettings {
            source_zone: parse_zone("time.source_zone", &self.time.source_zone)?,
            display_zone: parse_zone("time.display_zone", &self.time.display_zone)?,
            display_format,
            fallback_object_label: self.codes.fallback_object_label.clone(),
            object_kinds: code_table("codes.object_kinds", &self.codes.object_kinds)?,
            attribute_flags: code_table("codes.attribute_flags", &self.codes.attribute_flags)?,
            record_prefixes: self.detail.record_prefixes.clone(),
        })
    }
}

/// Validated settings the engine is built from.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub source_zone: Tz,
    pub display_zone: Tz,
    pub display_format: String,
    pub fallback_object_label: String,
    pub object_kinds: HashMap<char, String>,
    pub attribute_flags: HashMap<char, String>,
    pub record_prefixes: Vec<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Config::defaults()
            .settings()
            .expect("built-in default config must resolve to valid settings")
    }
}

fn parse_zone(field: &'static str, value: &str) -> ConfigResult<Tz> {
    value.trim().parse::<Tz>().map_err(|_| ConfigError::UnknownZone {
        field,
        value: value.to_string(),
    })
}

fn code_table(table: &'static str, rows: &[CodeLabel]) -> ConfigResult<HashMap<char, String>> {
    rows.iter()
        .map(|row| {
            let mut chars = row.code.chars();
            match (chars.next(), chars.next()) {
                (Some(code), None) => Ok((code, row.label.clone())),
                _ => Err(ConfigError::InvalidCode {
                    table,
                    code: row.code.clone(),
                }),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("aidr")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
