use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::json_kind;
use crate::timestamp::parse_timestamp;
use crate::{PlayFilterError, Result};

/// Field holding a record's event timestamp.
pub const TIMESTAMP_FIELD: &str = "ts";

/// One listening event.
///
/// Fields are kept as an ordered JSON map. Only `ts` is ever read; everything
/// else is opaque payload written back exactly as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayRecord(Map<String, Value>);

impl PlayRecord {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw `ts` value, if present.
    #[must_use]
    pub fn raw_timestamp(&self) -> Option<&Value> {
        self.0.get(TIMESTAMP_FIELD)
    }

    /// Parse this record's `ts` field.
    ///
    /// `index` is the record's position in the history and only feeds the error.
    ///
    /// # Errors
    /// `MissingTimestamp`, `TimestampNotString` or `InvalidTimestamp`.
    pub fn timestamp(&self, index: usize) -> Result<DateTime<FixedOffset>> {
        let value = self
            .raw_timestamp()
            .ok_or(PlayFilterError::MissingTimestamp { index })?;

        let Value::String(raw) = value else {
            return Err(PlayFilterError::TimestampNotString {
                index,
                found: json_kind(value),
            });
        };

        parse_timestamp(raw).map_err(|source| PlayFilterError::InvalidTimestamp {
            index,
            value: raw.clone(),
            source,
        })
    }
}
