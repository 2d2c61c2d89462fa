use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::Level;

/// Configuration for the logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Path of the log file; nothing is opened when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Minimum level written
    #[serde(default)]
    pub level: Level,
    /// Rotation threshold in bytes (0 disables rotation).
    /// Accepts a number of bytes or a string with a K/M/G unit, e.g. "5M".
    #[serde(default, deserialize_with = "deserialize_size")]
    pub max_bytes: u64,
    /// Echo each record to standard output
    #[serde(default = "default_console")]
    pub console: bool,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            path: None,
            level: Level::Debug,
            max_bytes: 0,
            console: default_console(),
        }
    }

    /// Set the log file path
    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the rotation threshold
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Enable console echo
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_console() -> bool {
    true
}

/// Parse a size string with an optional unit (K/M/G, case-insensitive).
/// A bare number is taken as bytes.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let Some(last) = s.chars().last() else {
        return Err("empty size string".to_string());
    };

    let (num_str, multiplier) = if last.is_alphabetic() {
        let multiplier: u64 = match last.to_ascii_uppercase() {
            'K' => 1024,
            'M' => 1024 * 1024,
            'G' => 1024 * 1024 * 1024,
            unit => return Err(format!("invalid unit: {}, supported: K/M/G", unit)),
        };
        (s[..s.len() - last.len_utf8()].trim_end(), multiplier)
    } else {
        (s, 1)
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| "size too large".to_string())
}

/// Size value that can be a number or string with units.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Number(u64),
    String(String),
}

fn deserialize_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match SizeValue::deserialize(deserializer)? {
        SizeValue::Number(n) => Ok(n),
        SizeValue::String(s) => parse_size(&s).map_err(serde::de::Error::custom),
    }
}
