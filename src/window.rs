use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::timestamp::parse_timestamp;
use crate::{PlayFilterError, Result};

/// Half-open interval `[start, end)` of play timestamps to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl ExclusionWindow {
    /// Build a window from two parsed bounds.
    ///
    /// `start == end` is allowed and yields a window that excludes nothing.
    ///
    /// # Errors
    /// Returns `WindowOrder` if `start` is after `end`.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Result<Self> {
        if start > end {
            return Err(PlayFilterError::WindowOrder {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Build a window from two timestamp strings, using the record timestamp rules.
    ///
    /// # Errors
    /// Returns `InvalidWindowBound` if either bound does not parse, or
    /// `WindowOrder` if the bounds are reversed.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let parse_bound = |value: &str| {
            parse_timestamp(value).map_err(|source| PlayFilterError::InvalidWindowBound {
                value: value.to_string(),
                source,
            })
        };
        Self::new(parse_bound(start)?, parse_bound(end)?)
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// True if `ts` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, ts: &DateTime<FixedOffset>) -> bool {
        self.start <= *ts && *ts < self.end
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for ExclusionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
