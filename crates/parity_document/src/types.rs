use serde::{Deserialize, Serialize};

/// Default rasterization resolution for visual fingerprinting.
///
/// Comparing pages rendered at different resolutions is undefined; callers
/// must hold one resolution constant across a whole run.
pub const DEFAULT_RESOLUTION_DPI: u32 = 144;

/// One positioned text block as reported by the backend, in reading order.
///
/// Coordinates are page points with the origin at the top-left corner. The
/// text is raw (not yet whitespace-normalized); normalization is the
/// signature layer's job so that channel-level and block-level diffing share
/// one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTextBlock {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One text-span style observation: font name, size in points, and color.
///
/// Color is a packed integer as most backends report it (e.g. 0xRRGGBB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTypographySpan {
    pub font_name: String,
    pub size: f32,
    pub color: u32,
}

/// A page rasterized to a packed RGB8 buffer, row-major, no alpha channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}
