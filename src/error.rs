use std::path::PathBuf;

use thiserror::Error;

use crate::timestamp::TimestampError;

#[derive(Error, Debug)]
pub enum PlayFilterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array of records in {path}, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("Record {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Record {index} has no `ts` field")]
    MissingTimestamp { index: usize },

    #[error("Record {index} has a non-string `ts` field (found {found})")]
    TimestampNotString { index: usize, found: &'static str },

    #[error("Record {index} has an unparseable timestamp: {value:?}")]
    InvalidTimestamp {
        index: usize,
        value: String,
        #[source]
        source: TimestampError,
    },

    #[error("Invalid window bound: {value:?}")]
    InvalidWindowBound {
        value: String,
        #[source]
        source: TimestampError,
    },

    #[error("Window start {start} is after window end {end}")]
    WindowOrder { start: String, end: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {path}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PlayFilterError {
    /// Short stable name of the variant, used in debug logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::JsonParse { .. } => "JsonParse",
            Self::NotAnArray { .. } => "NotAnArray",
            Self::NotAnObject { .. } => "NotAnObject",
            Self::MissingTimestamp { .. } => "MissingTimestamp",
            Self::TimestampNotString { .. } => "TimestampNotString",
            Self::InvalidTimestamp { .. } => "InvalidTimestamp",
            Self::InvalidWindowBound { .. } => "InvalidWindowBound",
            Self::WindowOrder { .. } => "WindowOrder",
            Self::Io(_) => "Io",
            Self::TomlParse { .. } => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Errors caused by configuration rather than by the history file.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::TomlParse { .. }
                | Self::InvalidWindowBound { .. }
                | Self::WindowOrder { .. }
        )
    }

    /// Errors raised by a single record's `ts` field.
    #[must_use]
    pub const fn is_field_error(&self) -> bool {
        matches!(
            self,
            Self::MissingTimestamp { .. }
                | Self::TimestampNotString { .. }
                | Self::InvalidTimestamp { .. }
        )
    }
}

/// Name of a JSON value's kind, for error messages.
#[must_use]
pub const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, PlayFilterError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
