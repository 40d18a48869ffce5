//! Parsing of record timestamps.
//!
//! History files store `ts` as an ISO-8601 string, usually with a trailing `Z`
//! for UTC. Every parsed value carries its offset so comparisons never mix
//! naive and zoned times.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, ParseError, Timelike};
use thiserror::Error;

/// Date layouts tried after RFC 3339: extended (`2022-06-15`) and basic (`20220615`).
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Time layouts, each with an optional fraction where seconds are present.
///
/// `%#z` takes `+HH:MM`, `+HHMM` and `+HH` offsets.
const EXTENDED_TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f%#z", "%H:%M%#z", "%H%#z"];
const BASIC_TIME_FORMATS: [&str; 3] = ["%H%M%S%.f%#z", "%H%M%#z", "%H%#z"];

const DATE_TIME_SEPARATORS: [char; 2] = ['T', ' '];

/// Chrono's encoding of a leap second: a nanosecond count past one second.
const LEAP_SECOND_NANOS: u32 = 1_000_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("second must be in 0..59")]
    LeapSecond,
}

/// Replace a trailing literal `Z` with an explicit `+00:00` offset.
#[must_use]
pub fn normalize_utc_suffix(raw: &str) -> Cow<'_, str> {
    raw.strip_suffix('Z')
        .map_or(Cow::Borrowed(raw), |head| Cow::Owned(format!("{head}+00:00")))
}

fn digit_at(s: &str, index: usize) -> bool {
    s.as_bytes().get(index).is_some_and(u8::is_ascii_digit)
}

/// True unless `s` starts with a digit and its only whitespace is one space
/// between the date and time digits.
///
/// Chrono's format parser skips whitespace before numeric fields, which the
/// RFC 3339 parser never does.
fn has_loose_layout(s: &str) -> bool {
    if !digit_at(s, 0) {
        return true;
    }
    let mut spaces = s.match_indices(char::is_whitespace);
    match (spaces.next(), spaces.next()) {
        (None, _) => false,
        (Some((index, " ")), None) => !(digit_at(s, index - 1) && digit_at(s, index + 1)),
        _ => true,
    }
}

fn parse_iso_fallback(normalized: &str) -> Option<DateTime<FixedOffset>> {
    if has_loose_layout(normalized) {
        return None;
    }
    DATE_TIME_SEPARATORS.iter().find_map(|separator| {
        DATE_FORMATS
            .iter()
            .zip([EXTENDED_TIME_FORMATS, BASIC_TIME_FORMATS])
            .flat_map(|(date, times)| times.map(|time| format!("{date}{separator}{time}")))
            .find_map(|format| DateTime::parse_from_str(normalized, &format).ok())
    })
}

/// Parse a record timestamp into an offset-aware value.
///
/// Accepts RFC 3339 (`T` or space separator, optional fractional seconds)
/// and the other ISO-8601 forms history exports use: basic `YYYYMMDDTHHMMSS`
/// dates and times, minute or hour precision, and `+HHMM` or `+HH` offsets.
/// A string without an offset is rejected, and so is a leap second.
///
/// # Errors
/// Returns the parse error of the RFC 3339 attempt when no layout matches, or
/// `LeapSecond` for a `:60` second.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let normalized = normalize_utc_suffix(raw);
    let parsed = DateTime::parse_from_rfc3339(&normalized)
        .or_else(|err| parse_iso_fallback(&normalized).ok_or(err))?;

    if parsed.nanosecond() >= LEAP_SECOND_NANOS {
        return Err(TimestampError::LeapSecond);
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
