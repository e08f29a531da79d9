use docparity::{compare_documents, CompareOptions, MemDocument, MemPage};

fn numbered_doc(count: usize, divergent_every: usize) -> (MemDocument, MemDocument) {
    let before = MemDocument::new(
        (0..count)
            .map(|i| MemPage::new().with_text(format!("page {i} original")))
            .collect(),
    );
    let after = MemDocument::new(
        (0..count)
            .map(|i| {
                let text = if divergent_every != 0 && i % divergent_every == 0 {
                    format!("page {i} rewritten")
                } else {
                    format!("page {i} original")
                };
                MemPage::new().with_text(text)
            })
            .collect(),
    );
    (before, after)
}

#[test]
fn parallel_verdicts_keep_ascending_page_order() {
    let (before, after) = numbered_doc(64, 0);
    let options = CompareOptions {
        use_parallel: true,
        ..Default::default()
    };

    let result = compare_documents(&before, &after, &options).unwrap();
    let indices: Vec<usize> = result.verdicts.iter().map(|v| v.page_index).collect();
    assert_eq!(indices, (1..=64).collect::<Vec<usize>>());
    assert!(result.overall_match);
}

#[test]
fn parallel_and_sequential_agree_on_every_verdict() {
    let (before, after) = numbered_doc(48, 5);

    let sequential = compare_documents(&before, &after, &CompareOptions::default()).unwrap();
    let parallel = compare_documents(
        &before,
        &after,
        &CompareOptions {
            use_parallel: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(sequential, parallel);
    assert!(!sequential.overall_match);
    assert_eq!(
        sequential.divergent_pages(),
        (0..48).filter(|i| i % 5 == 0).map(|i| i + 1).collect::<Vec<_>>()
    );
}
