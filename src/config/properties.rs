//! # Properties Files
//!
//! Reader for the `key=value` property files the database settings live in.
//!
//! Supported: `=` or `:` separators, `#` and `!` comment lines, blank lines,
//! and surrounding whitespace. Escapes and line continuations are not.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::errors::{ConfigError, ConfigResult};

/// Parsed properties, later keys overriding earlier ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Read and parse a properties file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse properties text
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let mut entries = BTreeMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some(sep) = line.find(['=', ':']) else {
                return Err(ConfigError::Syntax {
                    line: idx + 1,
                    content: raw.to_string(),
                });
            };

            let key = line[..sep].trim();
            if key.is_empty() {
                return Err(ConfigError::Syntax {
                    line: idx + 1,
                    content: raw.to_string(),
                });
            }
            let value = line[sep + 1..].trim();
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
