//! Workspace umbrella crate for docparity.
//!
//! docparity verifies that two renditions of the same document — typically
//! "before" and "after" a content-migration or re-export pipeline — are
//! equivalent, and pinpoints where and how they diverge. Each page is reduced
//! to independent structural signatures (normalized text, embedded-asset
//! fingerprints, typography fingerprints, rendered-pixel fingerprint); the
//! signatures are compared channel by channel, and text changes are localized
//! to page regions with a block-level sequence alignment.
//!
//! This crate stitches the pipeline crates together so callers get a single
//! API entry point: hand [`compare_documents`] two open [`Document`] handles
//! and options, get back a serializable [`ComparisonResult`], and optionally
//! render it with [`render_report`].

pub use parity_align::{align_blocks, changed_regions, OpTag, Opcode, SequenceMatcher};
pub use parity_compare::{
    compare_documents, compare_page, compare_signatures, Channel, CompareError, CompareOptions,
    ComparisonResult, PageVerdict, Side,
};
pub use parity_document::{
    Document, ExtractionError, MemDocument, MemPage, Page, RawTextBlock, RawTypographySpan,
    RenderedPage, DEFAULT_RESOLUTION_DPI,
};
pub use parity_report::render_report;
pub use parity_signature::{
    collapse_whitespace, extract_blocks, extract_signature, fingerprint_bytes, fingerprint_pixels,
    BBox, PageSignature, SignatureConfig, TextBlock, TypographyFingerprint,
};

mod config;

pub use crate::config::{ConfigLoadError, ParityConfig};
