use std::collections::BTreeSet;

use parity_signature::BBox;
use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// Per-page comparison outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageVerdict {
    /// 1-based page number, matching how operators read documents.
    pub page_index: usize,
    /// Channels on which the pair diverged; empty means the page matches.
    pub diverging_channels: BTreeSet<Channel>,
    /// "After"-side regions touched by text changes. Populated only when
    /// localization ran and the aligner found non-equal opcodes.
    pub changed_regions: Vec<BBox>,
}

impl PageVerdict {
    /// True iff no channel diverged.
    pub fn matches(&self) -> bool {
        self.diverging_channels.is_empty()
    }
}

/// Root artifact of one comparison run.
///
/// Serializes to the structured contract consumed by report generation and
/// transport layers: both page counts, one verdict per compared page in
/// ascending order, and the overall flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub page_count_before: usize,
    pub page_count_after: usize,
    /// One entry per compared page index; length is the shorter page count.
    pub verdicts: Vec<PageVerdict>,
    /// True iff the page counts are equal and every verdict is clean.
    pub overall_match: bool,
}

impl ComparisonResult {
    /// Assemble a result, deriving `overall_match` from the parts.
    ///
    /// The flag is computed here and nowhere else, so it can never drift out
    /// of sync with the verdicts it summarizes.
    pub fn new(
        page_count_before: usize,
        page_count_after: usize,
        verdicts: Vec<PageVerdict>,
    ) -> Self {
        let overall_match =
            page_count_before == page_count_after && verdicts.iter().all(PageVerdict::matches);
        Self {
            page_count_before,
            page_count_after,
            verdicts,
            overall_match,
        }
    }

    /// Whether the two documents disagreed on page count. Recorded, reported,
    /// and never an error: the overlapping range is still compared.
    pub fn page_count_mismatch(&self) -> bool {
        self.page_count_before != self.page_count_after
    }

    /// 1-based numbers of every divergent page, in ascending order.
    pub fn divergent_pages(&self) -> Vec<usize> {
        self.verdicts
            .iter()
            .filter(|v| !v.matches())
            .map(|v| v.page_index)
            .collect()
    }
}
