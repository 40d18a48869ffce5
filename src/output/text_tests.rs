use super::*;

#[test]
fn formats_three_lines() {
    let output = TextFormatter.format(&FilterSummary::new(3, 2));
    assert_eq!(
        output,
        "Original number of plays: 3\nNumber of plays after filtering: 2\nRemoved 1 plays\n"
    );
}

#[test]
fn formats_empty_history() {
    let output = TextFormatter.format(&FilterSummary::default());
    assert_eq!(output.lines().count(), 3);
    assert!(output.contains("Original number of plays: 0"));
    assert!(output.contains("Number of plays after filtering: 0"));
    assert!(output.contains("Removed 0 plays"));
}

#[test]
fn large_counts_are_not_grouped() {
    let output = TextFormatter.format(&FilterSummary::new(123_456, 120_000));
    assert!(output.contains("Original number of plays: 123456"));
    assert!(output.contains("Removed 3456 plays"));
}
