//! Environment file loading
//!
//! The deployment configuration is a flat, line-oriented `KEY=VALUE` file
//! (`.env` by default). deckhand only validates it - the orchestration tool
//! is the real consumer - so parsing is deliberately forgiving: comments and
//! blank lines are skipped, an `export ` prefix is tolerated, and values may
//! be wrapped in single or double quotes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DispatchError, DispatchResult};

/// A loaded environment file, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl EnvFile {
    /// Load an environment file from disk.
    ///
    /// An absent file is `ConfigMissing` - the dispatcher must refuse to
    /// present any menu without the deployment configuration in place.
    pub fn load(path: &Path) -> DispatchResult<Self> {
        if !path.is_file() {
            return Err(DispatchError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            entries: parse(&content),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
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

    /// Required keys that are absent or set to an empty value.
    ///
    /// Missing keys are reported as warnings, never as failures - compose
    /// may still be able to start a partially configured stack.
    pub fn missing_keys(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|key| self.get(key).map(str::trim).unwrap_or("").is_empty())
            .cloned()
            .collect()
    }
}

/// Parse `KEY=VALUE` lines into a map.
///
/// Lines without `=` are ignored rather than rejected; the orchestration
/// tool has the final word on what it accepts.
pub fn parse(content: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        entries.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    entries
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
