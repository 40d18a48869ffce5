//! Removal of plays that fall inside an exclusion window.

use tracing::debug;

use crate::Result;
use crate::history::PlayHistory;
use crate::window::ExclusionWindow;

/// Record counts before and after a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub original: usize,
    pub retained: usize,
    pub removed: usize,
}

impl FilterSummary {
    #[must_use]
    pub const fn new(original: usize, retained: usize) -> Self {
        Self {
            original,
            retained,
            removed: original.saturating_sub(retained),
        }
    }

    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.removed > 0
    }
}

/// Drop every record whose `ts` lies in `window`, keeping the rest in order.
///
/// Every record is parsed; the first one with a missing or malformed `ts`
/// aborts the whole pass and nothing is returned.
///
/// # Errors
/// Returns the field error of the first bad record.
pub fn filter_history(
    history: PlayHistory,
    window: &ExclusionWindow,
) -> Result<(PlayHistory, FilterSummary)> {
    let original = history.len();
    let mut retained = Vec::with_capacity(original);

    for (index, record) in history.into_records().into_iter().enumerate() {
        let ts = record.timestamp(index)?;
        if window.contains(&ts) {
            debug!(index, ts = %ts.to_rfc3339(), "excluding play");
            continue;
        }
        retained.push(record);
    }

    let summary = FilterSummary::new(original, retained.len());
    Ok((PlayHistory::new(retained), summary))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
