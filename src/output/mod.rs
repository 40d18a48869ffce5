mod text;

pub use text::TextFormatter;

use crate::filter::FilterSummary;

/// Trait for rendering a filter summary for the console.
pub trait OutputFormatter {
    fn format(&self, summary: &FilterSummary) -> String;
}
