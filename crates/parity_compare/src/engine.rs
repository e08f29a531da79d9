use std::time::Instant;

use parity_align::changed_regions;
use parity_document::{Document, Page};
use parity_signature::{extract_blocks, extract_signature, SignatureConfig};
use rayon::prelude::*;
use tracing::{info, warn, Level};

use crate::channel::{compare_signatures, Channel};
use crate::error::{CompareError, Side};
use crate::options::CompareOptions;
use crate::verdict::{ComparisonResult, PageVerdict};

/// Compare one page pair and produce its verdict.
///
/// Exposed separately from [`compare_documents`] so callers can bound work
/// (timeouts, cancellation) at page granularity. `page_index` is 1-based and
/// only labels the verdict and any error.
pub fn compare_page(
    before: &dyn Page,
    after: &dyn Page,
    options: &CompareOptions,
    page_index: usize,
) -> Result<PageVerdict, CompareError> {
    let signature_config = SignatureConfig {
        resolution_dpi: options.resolution_dpi,
    };
    let before_signature = extract_signature(before, &signature_config)
        .map_err(|err| CompareError::extraction(Side::Before, page_index, err))?;
    let after_signature = extract_signature(after, &signature_config)
        .map_err(|err| CompareError::extraction(Side::After, page_index, err))?;

    let diverging_channels = compare_signatures(&before_signature, &after_signature);

    // Localization only makes sense when the text channel moved: the aligner
    // works over normalized block text, and equal page text cannot produce a
    // non-trivial edit script worth reporting.
    let regions = if options.localize && diverging_channels.contains(&Channel::Text) {
        let before_blocks = extract_blocks(before)
            .map_err(|err| CompareError::extraction(Side::Before, page_index, err))?;
        let after_blocks = extract_blocks(after)
            .map_err(|err| CompareError::extraction(Side::After, page_index, err))?;
        changed_regions(&before_blocks, &after_blocks)
    } else {
        Vec::new()
    };

    Ok(PageVerdict {
        page_index,
        diverging_channels,
        changed_regions: regions,
    })
}

/// Compare two documents page by page.
///
/// Compares `min(page_count)` pages; a page-count mismatch is recorded in the
/// result, not raised. Verdicts come back in ascending page order regardless
/// of `use_parallel` — the parallel path collects by index, never by
/// completion. Any extraction failure aborts the run with no partial result.
pub fn compare_documents(
    before: &dyn Document,
    after: &dyn Document,
    options: &CompareOptions,
) -> Result<ComparisonResult, CompareError> {
    options.validate()?;
    let start = Instant::now();

    let page_count_before = before.page_count();
    let page_count_after = after.page_count();
    let compared_pages = page_count_before.min(page_count_after);

    let span = tracing::span!(
        Level::INFO,
        "parity_compare.compare",
        page_count_before,
        page_count_after,
        resolution_dpi = options.resolution_dpi,
        localize = options.localize,
        parallel = options.use_parallel,
    );
    let _guard = span.enter();

    let verdicts: Result<Vec<PageVerdict>, CompareError> = if options.use_parallel {
        // Ordered collect is the index-keyed collection point: rayon yields
        // items in input order no matter which worker finishes first.
        (0..compared_pages)
            .into_par_iter()
            .map(|index| compare_index(before, after, options, index))
            .collect()
    } else {
        (0..compared_pages)
            .map(|index| compare_index(before, after, options, index))
            .collect()
    };

    match verdicts {
        Ok(verdicts) => {
            let result = ComparisonResult::new(page_count_before, page_count_after, verdicts);
            info!(
                compared_pages,
                overall_match = result.overall_match,
                divergent_pages = result.divergent_pages().len(),
                elapsed_micros = start.elapsed().as_micros() as u64,
                "compare_success"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(error = %err, "compare_failure");
            Err(err)
        }
    }
}

fn compare_index(
    before: &dyn Document,
    after: &dyn Document,
    options: &CompareOptions,
    index: usize,
) -> Result<PageVerdict, CompareError> {
    let page_index = index + 1;
    let before_page = before
        .page(index)
        .map_err(|err| CompareError::extraction(Side::Before, page_index, err))?;
    let after_page = after
        .page(index)
        .map_err(|err| CompareError::extraction(Side::After, page_index, err))?;
    compare_page(before_page.as_ref(), after_page.as_ref(), options, page_index)
}
