use crate::error::ExtractionError;
use crate::traits::{Document, Page};
use crate::types::{RawTextBlock, RawTypographySpan, RenderedPage};

/// In-memory document backend.
///
/// Holds fully materialized page content, so the comparison core can be
/// exercised with no parser, rasterizer, or filesystem in the loop. Also the
/// natural adapter for callers that already extracted content upstream.
#[derive(Debug, Clone, Default)]
pub struct MemDocument {
    pages: Vec<MemPage>,
}

impl MemDocument {
    pub fn new(pages: Vec<MemPage>) -> Self {
        Self { pages }
    }
}

impl Document for MemDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Box<dyn Page + '_>, ExtractionError> {
        match self.pages.get(index) {
            Some(page) => Ok(Box::new(page.clone())),
            None => Err(ExtractionError::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            }),
        }
    }
}

/// One in-memory page, built up with `with_*` chaining.
///
/// `failing` builds a page whose every accessor returns a parse error, for
/// exercising the fail-fast path without a corrupt fixture file.
#[derive(Debug, Clone, Default)]
pub struct MemPage {
    text: String,
    blocks: Vec<RawTextBlock>,
    images: Vec<Vec<u8>>,
    spans: Vec<RawTypographySpan>,
    pixels: Option<RenderedPage>,
    failure: Option<String>,
}

impl MemPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page that fails extraction with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_block(mut self, text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.blocks.push(RawTextBlock {
            text: text.into(),
            x,
            y,
            width,
            height,
        });
        self
    }

    pub fn with_image(mut self, bytes: Vec<u8>) -> Self {
        self.images.push(bytes);
        self
    }

    pub fn with_span(mut self, font_name: impl Into<String>, size: f32, color: u32) -> Self {
        self.spans.push(RawTypographySpan {
            font_name: font_name.into(),
            size,
            color,
        });
        self
    }

    /// Fix the rendered pixel buffer returned by [`Page::render`].
    ///
    /// `pixels` must be packed RGB8 of length `width * height * 3`. When no
    /// buffer is set the page renders as a small blank white canvas.
    pub fn with_pixels(mut self, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 3) as usize);
        self.pixels = Some(RenderedPage {
            width,
            height,
            pixels,
        });
        self
    }

    fn check_failure(&self) -> Result<(), ExtractionError> {
        match &self.failure {
            Some(reason) => Err(ExtractionError::Parse {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Page for MemPage {
    fn text(&self) -> Result<String, ExtractionError> {
        self.check_failure()?;
        Ok(self.text.clone())
    }

    fn text_blocks(&self) -> Result<Vec<RawTextBlock>, ExtractionError> {
        self.check_failure()?;
        Ok(self.blocks.clone())
    }

    fn images(&self) -> Result<Vec<Vec<u8>>, ExtractionError> {
        self.check_failure()?;
        Ok(self.images.clone())
    }

    fn typography_spans(&self) -> Result<Vec<RawTypographySpan>, ExtractionError> {
        self.check_failure()?;
        Ok(self.spans.clone())
    }

    fn render(&self, dpi: u32) -> Result<RenderedPage, ExtractionError> {
        self.check_failure().map_err(|err| match err {
            ExtractionError::Parse { reason } => ExtractionError::Render { dpi, reason },
            other => other,
        })?;
        Ok(match &self.pixels {
            Some(rendered) => rendered.clone(),
            // Blank white canvas so untouched pages compare visually equal.
            None => RenderedPage {
                width: 8,
                height: 8,
                pixels: vec![0xFF; 8 * 8 * 3],
            },
        })
    }
}
