//! docparity signature layer.
//!
//! Turns one page into derived, comparable artifacts:
//!
//! - [`extract_signature`] builds a [`PageSignature`]: whitespace-normalized
//!   text, a set of SHA-256 asset fingerprints, a set of typography
//!   fingerprints, and a single visual fingerprint over the rendered pixels.
//! - [`extract_blocks`] builds the ordered [`TextBlock`] sequence used for
//!   block-level diff localization.
//!
//! ## Pure function guarantee
//!
//! Both extractors are pure functions of page content at call time: no clock,
//! no OS dependence, no mutation of the source document. Same page content and
//! config, same signature, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - The set-valued channels are true sets (`BTreeSet`): extraction order and
//!   duplicates never affect equality, and iteration is already sorted for a
//!   stable serialized representation.
//! - Block extraction uses the same normalization rule as page text, so
//!   channel-level and block-level diffing can never disagree about what a
//!   whitespace-only change is.

mod blocks;
mod fingerprint;
mod normalize;
mod signature;

pub use crate::blocks::{extract_blocks, BBox, TextBlock};
pub use crate::fingerprint::{fingerprint_bytes, fingerprint_pixels};
pub use crate::normalize::collapse_whitespace;
pub use crate::signature::{
    extract_signature, PageSignature, SignatureConfig, TypographyFingerprint,
};
