use thiserror::Error;

/// Errors raised by a document backend while pulling raw page content.
///
/// Extraction failures are not recoverable by the comparison core: a page
/// either yields its full content or the run aborts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A page index past the end of the document was requested.
    #[error("page {index} is out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    /// The backend could not parse the page's content streams.
    #[error("failed to parse page content: {reason}")]
    Parse { reason: String },

    /// The backend could not rasterize the page.
    #[error("failed to render page at {dpi} dpi: {reason}")]
    Render { dpi: u32, reason: String },
}
