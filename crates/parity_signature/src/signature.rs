use std::collections::BTreeSet;

use parity_document::{ExtractionError, Page, RawTypographySpan, DEFAULT_RESOLUTION_DPI};
use serde::{Deserialize, Serialize};

use crate::fingerprint::{fingerprint_bytes, fingerprint_pixels};
use crate::normalize::collapse_whitespace;

/// Configuration for signature extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureConfig {
    /// Rasterization resolution for the visual fingerprint.
    ///
    /// Must be held constant across a run; fingerprints taken at different
    /// resolutions are not comparable.
    pub resolution_dpi: u32,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            resolution_dpi: DEFAULT_RESOLUTION_DPI,
        }
    }
}

/// One distinct text-span style, made totally ordered so it can live in a
/// `BTreeSet`.
///
/// Span sizes arrive as floats; they are quantized to thousandths of a point
/// here. The quantization is part of the fingerprint definition and is applied
/// identically to both documents, so it can never create a one-sided
/// divergence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypographyFingerprint {
    pub font_name: String,
    pub size_millis: u32,
    pub color: u32,
}

impl From<&RawTypographySpan> for TypographyFingerprint {
    fn from(span: &RawTypographySpan) -> Self {
        Self {
            font_name: span.font_name.clone(),
            size_millis: (f64::from(span.size.max(0.0)) * 1000.0).round() as u32,
            color: span.color,
        }
    }
}

/// Derived, immutable structural signature of one page.
///
/// Each field is one comparison channel. The two set-valued channels use
/// `BTreeSet`: equality is set equality (extraction order and duplicates are
/// irrelevant) and iteration order is already sorted, which doubles as the
/// stable serialized representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSignature {
    /// Whitespace-collapsed, trimmed page text. Order- and case-preserving.
    pub text: String,
    /// SHA-256 hex digest of each embedded asset's raw bytes.
    pub asset_fingerprints: BTreeSet<String>,
    /// Distinct (font, size, color) styles observed in text spans.
    pub typography_fingerprints: BTreeSet<TypographyFingerprint>,
    /// SHA-256 hex digest of the page rendered at the configured resolution.
    pub visual_fingerprint: String,
}

/// Build the [`PageSignature`] for one page.
///
/// Fails with the backend's [`ExtractionError`] if the page cannot be parsed
/// or rendered; callers abort the whole comparison on failure rather than
/// carry a partial signature.
pub fn extract_signature(
    page: &dyn Page,
    config: &SignatureConfig,
) -> Result<PageSignature, ExtractionError> {
    let text = collapse_whitespace(&page.text()?);

    let mut asset_fingerprints = BTreeSet::new();
    for bytes in page.images()? {
        // Assets that resolve to zero bytes carry no content to compare.
        if !bytes.is_empty() {
            asset_fingerprints.insert(fingerprint_bytes(&bytes));
        }
    }

    let typography_fingerprints = page
        .typography_spans()?
        .iter()
        .map(TypographyFingerprint::from)
        .collect();

    let rendered = page.render(config.resolution_dpi)?;
    let visual_fingerprint = fingerprint_pixels(&rendered);

    Ok(PageSignature {
        text,
        asset_fingerprints,
        typography_fingerprints,
        visual_fingerprint,
    })
}
