use docparity::{
    compare_documents, render_report, Channel, CompareOptions, MemDocument, MemPage,
};

fn options() -> CompareOptions {
    CompareOptions::default()
}

fn page(text: &str) -> MemPage {
    MemPage::new().with_text(text)
}

#[test]
fn page_count_mismatch_compares_overlap_and_fails_overall() {
    let before = MemDocument::new(vec![page("one"), page("two"), page("three")]);
    let after = MemDocument::new(vec![
        page("one"),
        page("two"),
        page("three"),
        page("four"),
        page("five"),
    ]);

    let result = compare_documents(&before, &after, &options()).unwrap();
    assert_eq!(result.verdicts.len(), 3);
    assert_eq!(result.page_count_before, 3);
    assert_eq!(result.page_count_after, 5);
    assert!(result.page_count_mismatch());
    // All three compared pages match perfectly, yet the run cannot.
    assert!(result.verdicts.iter().all(|v| v.diverging_channels.is_empty()));
    assert!(!result.overall_match);
}

#[test]
fn visual_only_divergence_is_isolated_to_the_visual_channel() {
    // Same text, assets, and typography; only the rendered pixels moved.
    let before = MemDocument::new(vec![MemPage::new()
        .with_text("The chart below.")
        .with_image(vec![7; 32])
        .with_span("Helvetica", 11.0, 0)
        .with_pixels(2, 2, vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255])]);
    let after = MemDocument::new(vec![MemPage::new()
        .with_text("The chart below.")
        .with_image(vec![7; 32])
        .with_span("Helvetica", 11.0, 0)
        .with_pixels(2, 2, vec![255, 255, 255, 0, 0, 0, 255, 255, 255, 255, 255, 255])]);

    let result = compare_documents(&before, &after, &options()).unwrap();
    let verdict = &result.verdicts[0];
    assert_eq!(
        verdict.diverging_channels.iter().copied().collect::<Vec<_>>(),
        vec![Channel::Visual]
    );
    assert!(verdict.changed_regions.is_empty());
}

#[test]
fn localization_is_after_side_only() {
    let with_blocks = |texts: &[&str]| {
        let mut p = MemPage::new().with_text(texts.join(" "));
        for (i, t) in texts.iter().enumerate() {
            p = p.with_block(*t, 0.0, i as f64 * 20.0, 200.0, 15.0);
        }
        MemDocument::new(vec![p])
    };

    let before = with_blocks(&["alpha", "bravo"]);
    let after = with_blocks(&["alpha"]);

    // Forward: pure deletion. TEXT diverges but there is no "after" location
    // to highlight.
    let forward = compare_documents(&before, &after, &options()).unwrap();
    assert!(forward.verdicts[0].diverging_channels.contains(&Channel::Text));
    assert!(forward.verdicts[0].changed_regions.is_empty());

    // Reverse: the same content difference is now an insertion, so the
    // region list is non-empty. Asymmetry is by design.
    let reverse = compare_documents(&after, &before, &options()).unwrap();
    assert_eq!(reverse.verdicts[0].changed_regions.len(), 1);
    assert_eq!(reverse.verdicts[0].changed_regions[0].y, 20.0);
}

#[test]
fn replaced_block_is_localized_to_one_region() {
    let doc = |middle: &str| {
        MemDocument::new(vec![MemPage::new()
            .with_text(format!("A {middle} C"))
            .with_block("A", 10.0, 10.0, 100.0, 12.0)
            .with_block(middle, 10.0, 30.0, 100.0, 12.0)
            .with_block("C", 10.0, 50.0, 100.0, 12.0)])
    };

    let result = compare_documents(&doc("B"), &doc("X"), &options()).unwrap();
    let verdict = &result.verdicts[0];
    assert_eq!(verdict.changed_regions.len(), 1);
    assert_eq!(verdict.changed_regions[0].x, 10.0);
    assert_eq!(verdict.changed_regions[0].y, 30.0);
}

#[test]
fn asset_content_change_diverges_on_assets() {
    let before = MemDocument::new(vec![MemPage::new().with_text("t").with_image(vec![1, 2, 3])]);
    let after = MemDocument::new(vec![MemPage::new().with_text("t").with_image(vec![1, 2, 4])]);

    let result = compare_documents(&before, &after, &options()).unwrap();
    assert!(result.verdicts[0].diverging_channels.contains(&Channel::Assets));
    assert!(!result.verdicts[0].diverging_channels.contains(&Channel::Text));
}

#[test]
fn typography_change_diverges_on_typography() {
    let before =
        MemDocument::new(vec![MemPage::new().with_text("t").with_span("Helvetica", 11.0, 0)]);
    let after =
        MemDocument::new(vec![MemPage::new().with_text("t").with_span("Helvetica", 11.5, 0)]);

    let result = compare_documents(&before, &after, &options()).unwrap();
    assert!(result.verdicts[0]
        .diverging_channels
        .contains(&Channel::Typography));
}

#[test]
fn end_to_end_report_renders_verdict_rows() {
    let before = MemDocument::new(vec![page("same"), page("old wording")]);
    let after = MemDocument::new(vec![page("same"), page("new wording")]);

    let result = compare_documents(&before, &after, &options()).unwrap();
    let report = render_report(&result);
    assert!(report.contains("2         | TEXT"));
    assert!(report.contains("Result: DIFFERENCES FOUND"));

    let clean = compare_documents(&before, &before, &options()).unwrap();
    let clean_report = render_report(&clean);
    assert!(clean_report.contains("All Pages | MATCH"));
}
