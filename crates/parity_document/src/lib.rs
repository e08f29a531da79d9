//! docparity document capability surface.
//!
//! The comparison core never touches file paths, uploads, or a concrete PDF
//! library. It is handed already-open [`Document`] handles and pulls raw page
//! content through the [`Page`] trait: flat text, positioned text blocks, raw
//! embedded-asset bytes, typography spans, and a rendered pixel buffer.
//!
//! Any parser/rasterizer backend can sit behind these traits. The crate ships
//! one implementation, [`MemDocument`], which serves tests, demos, and any
//! caller that already holds extracted page content in memory.
//!
//! Extraction is fail-fast: a page that cannot be parsed or rendered yields an
//! [`ExtractionError`], and the comparison core aborts the whole run rather
//! than surface a half-analyzed document.

mod error;
mod memory;
mod traits;
mod types;

pub use crate::error::ExtractionError;
pub use crate::memory::{MemDocument, MemPage};
pub use crate::traits::{Document, Page};
pub use crate::types::{RawTextBlock, RawTypographySpan, RenderedPage, DEFAULT_RESOLUTION_DPI};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mem_document_round_trips_page_content() {
        let doc = MemDocument::new(vec![MemPage::new()
            .with_text("hello world")
            .with_image(vec![1, 2, 3])
            .with_span("Helvetica", 11.0, 0)
            .with_block("hello", 10.0, 20.0, 100.0, 12.0)]);

        assert_eq!(doc.page_count(), 1);
        let page = doc.page(0).expect("page 0 exists");
        assert_eq!(page.text().unwrap(), "hello world");
        assert_eq!(page.images().unwrap(), vec![vec![1, 2, 3]]);
        assert_eq!(page.typography_spans().unwrap().len(), 1);
        assert_eq!(page.text_blocks().unwrap()[0].text, "hello");
    }

    #[test]
    fn page_out_of_range_is_reported() {
        let doc = MemDocument::new(vec![MemPage::new()]);
        let err = doc.page(3).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::PageOutOfRange {
                index: 3,
                page_count: 1
            }
        );
    }

    #[test]
    fn failing_page_surfaces_parse_error() {
        let doc = MemDocument::new(vec![MemPage::failing("corrupt stream")]);
        let page = doc.page(0).unwrap();
        let err = page.text().unwrap_err();
        assert!(matches!(err, ExtractionError::Parse { .. }));
    }

    #[test]
    fn default_render_is_blank_and_alpha_free() {
        let page = MemPage::new();
        let rendered = page.render(DEFAULT_RESOLUTION_DPI).unwrap();
        // RGB8: exactly three bytes per pixel, all white.
        assert_eq!(
            rendered.pixels.len(),
            (rendered.width * rendered.height * 3) as usize
        );
        assert!(rendered.pixels.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn explicit_pixels_are_returned_verbatim() {
        let page = MemPage::new().with_pixels(2, 1, vec![0, 0, 0, 255, 255, 255]);
        let rendered = page.render(144).unwrap();
        assert_eq!(rendered.width, 2);
        assert_eq!(rendered.height, 1);
        assert_eq!(rendered.pixels, vec![0, 0, 0, 255, 255, 255]);
    }
}
