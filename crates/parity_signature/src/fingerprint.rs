use parity_document::RenderedPage;
use sha2::{Digest, Sha256};

/// Hash raw bytes with SHA-256 and return a lowercase hex digest.
///
/// Used for embedded-asset fingerprints: a digest stands in for byte-for-byte
/// content equality, so two assets compare equal iff their bytes do.
pub fn fingerprint_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hash a rendered page's raw pixel buffer with SHA-256.
///
/// The digest covers the packed RGB8 samples only; the buffer carries no
/// alpha channel. Fingerprints are only comparable between pages rendered at
/// the same resolution.
pub fn fingerprint_pixels(rendered: &RenderedPage) -> String {
    fingerprint_bytes(&rendered.pixels)
}
