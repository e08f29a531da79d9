use parity_document::{ExtractionError, Page};
use serde::{Deserialize, Serialize};

use crate::normalize::collapse_whitespace;

/// Axis-aligned bounding box in page coordinates.
///
/// Values are carried through from extraction unmodified; the core never
/// rounds or clips them. Reporting layers decide presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One positioned text block with normalized content, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub bbox: BBox,
}

/// Extract the ordered block sequence used for diff localization.
///
/// Applies the same whitespace normalization as page-level text, preserves
/// the backend's reading order, and drops blocks whose normalized text is
/// empty (they carry nothing alignable).
pub fn extract_blocks(page: &dyn Page) -> Result<Vec<TextBlock>, ExtractionError> {
    let mut blocks = Vec::new();
    for raw in page.text_blocks()? {
        let text = collapse_whitespace(&raw.text);
        if text.is_empty() {
            continue;
        }
        blocks.push(TextBlock {
            text,
            bbox: BBox {
                x: raw.x,
                y: raw.y,
                width: raw.width,
                height: raw.height,
            },
        });
    }
    Ok(blocks)
}
