use std::error::Error;

use docparity::{
    compare_documents, render_report, CompareOptions, MemDocument, MemPage,
};

/// Demo: compare two in-memory renditions of a three-page document where the
/// migration dropped an image on page 2 and reworded a block on page 3.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let before = MemDocument::new(vec![
        MemPage::new()
            .with_text("Quarterly Report\nRevenue grew 4% year over year.")
            .with_span("Helvetica-Bold", 18.0, 0x000000)
            .with_span("Helvetica", 11.0, 0x000000),
        MemPage::new()
            .with_text("Figure 1 shows the trend.")
            .with_image(vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A])
            .with_span("Helvetica", 11.0, 0x000000),
        MemPage::new()
            .with_text("Outlook remains stable for the next quarter.")
            .with_block("Outlook remains stable", 72.0, 90.0, 400.0, 14.0)
            .with_block("for the next quarter.", 72.0, 108.0, 400.0, 14.0)
            .with_span("Helvetica", 11.0, 0x000000),
    ]);

    let after = MemDocument::new(vec![
        MemPage::new()
            .with_text("Quarterly Report\nRevenue grew 4% year over year.")
            .with_span("Helvetica-Bold", 18.0, 0x000000)
            .with_span("Helvetica", 11.0, 0x000000),
        MemPage::new()
            .with_text("Figure 1 shows the trend.")
            .with_span("Helvetica", 11.0, 0x000000),
        MemPage::new()
            .with_text("Outlook remains uncertain for the next quarter.")
            .with_block("Outlook remains uncertain", 72.0, 90.0, 400.0, 14.0)
            .with_block("for the next quarter.", 72.0, 108.0, 400.0, 14.0)
            .with_span("Helvetica", 11.0, 0x000000),
    ]);

    let result = compare_documents(&before, &after, &CompareOptions::default())?;

    println!("{}", render_report(&result));
    println!("Structured result:\n{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
