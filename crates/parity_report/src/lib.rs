//! docparity report collaborator.
//!
//! Renders a [`ComparisonResult`] into the plain-text report an operator
//! reads after a migration run: one row per divergent page with its diverging
//! channels, or a single `All Pages | MATCH` row when the documents are
//! equivalent. This sits outside the comparison core; it only consumes the
//! serialized-contract fields of the result.

use std::fmt::Write;

use parity_compare::{ComparisonResult, PageVerdict};

/// Render the comparison report as plain text.
pub fn render_report(result: &ComparisonResult) -> String {
    let mut out = String::new();

    out.push_str("Document Comparison Report\n");
    out.push_str("==========================\n");
    let _ = writeln!(
        out,
        "Pages: {} (before) vs {} (after)",
        result.page_count_before, result.page_count_after
    );
    if result.page_count_mismatch() {
        let _ = writeln!(
            out,
            "Page count differs; compared the first {} page(s).",
            result.verdicts.len()
        );
    }
    out.push('\n');

    out.push_str("Page      | Diverging channels\n");
    out.push_str("----------+-------------------\n");
    let divergent: Vec<&PageVerdict> = result.verdicts.iter().filter(|v| !v.matches()).collect();
    if divergent.is_empty() {
        out.push_str("All Pages | MATCH\n");
    } else {
        for verdict in divergent {
            let channels = verdict
                .diverging_channels
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "{:<9} | {}", verdict.page_index, channels);
        }
    }

    out.push('\n');
    if result.overall_match {
        out.push_str("Result: MATCH\n");
    } else {
        out.push_str("Result: DIFFERENCES FOUND\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_compare::Channel;
    use std::collections::BTreeSet;

    fn verdict(page_index: usize, channels: &[Channel]) -> PageVerdict {
        PageVerdict {
            page_index,
            diverging_channels: channels.iter().copied().collect::<BTreeSet<_>>(),
            changed_regions: Vec::new(),
        }
    }

    #[test]
    fn matching_result_renders_fallback_row() {
        let result = ComparisonResult::new(2, 2, vec![verdict(1, &[]), verdict(2, &[])]);
        let report = render_report(&result);
        assert!(report.contains("All Pages | MATCH"));
        assert!(report.contains("Result: MATCH"));
        assert!(!report.contains("Page count differs"));
    }

    #[test]
    fn divergent_pages_get_one_row_each() {
        let result = ComparisonResult::new(
            3,
            3,
            vec![
                verdict(1, &[]),
                verdict(2, &[Channel::Text, Channel::Visual]),
                verdict(3, &[Channel::Assets]),
            ],
        );
        let report = render_report(&result);
        assert!(report.contains("2         | TEXT, VISUAL"));
        assert!(report.contains("3         | ASSETS"));
        assert!(!report.contains("All Pages"));
        assert!(report.contains("Result: DIFFERENCES FOUND"));
    }

    #[test]
    fn page_count_mismatch_is_called_out() {
        let result = ComparisonResult::new(3, 5, vec![verdict(1, &[]), verdict(2, &[]), verdict(3, &[])]);
        let report = render_report(&result);
        assert!(report.contains("Pages: 3 (before) vs 5 (after)"));
        assert!(report.contains("compared the first 3 page(s)"));
        assert!(report.contains("Result: DIFFERENCES FOUND"));
    }
}
