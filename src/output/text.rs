use std::fmt::Write;

use crate::filter::FilterSummary;

use super::OutputFormatter;

/// Plain three-line report: original count, retained count, removed count.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &FilterSummary) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Original number of plays: {}", summary.original);
        let _ = writeln!(
            output,
            "Number of plays after filtering: {}",
            summary.retained
        );
        let _ = writeln!(output, "Removed {} plays", summary.removed);
        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
