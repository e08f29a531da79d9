use crate::error::ExtractionError;
use crate::types::{RawTextBlock, RawTypographySpan, RenderedPage};

/// An open, read-only document handle.
///
/// Opening and closing (and whatever temp-file or transport plumbing that
/// involves) belongs to the caller; the comparison core only iterates pages.
/// `Send + Sync` is required so page-level work can be fanned out across
/// worker threads.
pub trait Document: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Fetch page `index` (0-based).
    fn page(&self, index: usize) -> Result<Box<dyn Page + '_>, ExtractionError>;
}

/// Raw content capabilities of a single page.
///
/// Every method is a pure read of page content at call time; backends may
/// block on I/O or native rasterization but must not mutate the document.
pub trait Page {
    /// Flat reading-order text of the page.
    fn text(&self) -> Result<String, ExtractionError>;

    /// Positioned text blocks in reading order. No re-sorting by position.
    fn text_blocks(&self) -> Result<Vec<RawTextBlock>, ExtractionError>;

    /// Raw bytes of every embedded binary asset referenced by the page.
    fn images(&self) -> Result<Vec<Vec<u8>>, ExtractionError>;

    /// Every observed (font, size, color) text-span style, duplicates allowed.
    fn typography_spans(&self) -> Result<Vec<RawTypographySpan>, ExtractionError>;

    /// Rasterize the full page at `dpi` to packed RGB8, no alpha.
    fn render(&self, dpi: u32) -> Result<RenderedPage, ExtractionError>;
}

impl std::fmt::Debug for dyn Page + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Page")
    }
}
