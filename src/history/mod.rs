mod record;

pub use record::{PlayRecord, TIMESTAMP_FIELD};

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::json_kind;
use crate::state::atomic_write;
use crate::{PlayFilterError, Result};

/// Ordered sequence of play records, loaded and saved as one JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayHistory {
    records: Vec<PlayRecord>,
}

impl PlayHistory {
    #[must_use]
    pub const fn new(records: Vec<PlayRecord>) -> Self {
        Self { records }
    }

    /// Load the whole history file into memory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or is
    /// not an array of objects.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PlayFilterError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let history = Self::from_json_str(&content, path)?;
        debug!(path = %path.display(), records = history.len(), "loaded play history");
        Ok(history)
    }

    /// Parse a history from JSON text. `path` is used for error messages only.
    ///
    /// # Errors
    /// `JsonParse`, `NotAnArray` or `NotAnObject`.
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|source| PlayFilterError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;

        let found = json_kind(&value);
        let Value::Array(items) = value else {
            return Err(PlayFilterError::NotAnArray {
                path: path.to_path_buf(),
                found,
            });
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(PlayRecord::new(fields)),
                other => Err(PlayFilterError::NotAnObject {
                    index,
                    found: json_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Serialize as a JSON array indented with two spaces, without a trailing newline.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Overwrite `path` with this history.
    ///
    /// The file is replaced atomically; on failure the previous content stays.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        atomic_write(path, json.as_bytes())?;
        debug!(path = %path.display(), records = self.len(), bytes = json.len(), "saved play history");
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[PlayRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<PlayRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PlayRecord> for PlayHistory {
    fn from_iter<I: IntoIterator<Item = PlayRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
