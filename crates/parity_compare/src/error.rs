use std::fmt;

use parity_document::ExtractionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two documents an extraction failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Before => "before",
            Side::After => "after",
        })
    }
}

/// Errors that abort a comparison run.
///
/// Channel divergences and page-count mismatches are never errors; they are
/// data in the [`crate::ComparisonResult`]. A failed comparison yields one of
/// these instead of a false "match".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A page could not be parsed or rendered. Fail-fast: no partial result
    /// is surfaced for the affected document.
    #[error("extraction failed on page {page_index} of the {side} document: {source}")]
    Extraction {
        side: Side,
        /// 1-based, matching verdict numbering.
        page_index: usize,
        source: ExtractionError,
    },
}

impl CompareError {
    pub(crate) fn extraction(side: Side, page_index: usize, source: ExtractionError) -> Self {
        Self::Extraction {
            side,
            page_index,
            source,
        }
    }
}
