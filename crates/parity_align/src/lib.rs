//! docparity block alignment layer.
//!
//! Given the "before" and "after" block sequences of one page, this crate
//! computes an edit script over the blocks' normalized text and collects the
//! bounding boxes of all content that exists only on the "after" side.
//!
//! The matcher deliberately reproduces the classic longest-matching-block
//! strategy: find the longest run of equal tokens, then recurse on the
//! unmatched flanks. Multiple minimal edit scripts can exist for one input
//! pair; this strategy picks one of them deterministically, which is what
//! actually matters — reruns on identical input must produce identical
//! regions.
//!
//! Blocks are opaque tokens here: two blocks match iff their normalized text
//! is equal. A block that moved to a different position comes out as a
//! delete+insert pair, never as a move.

mod matcher;
mod opcode;
mod regions;

pub use crate::matcher::SequenceMatcher;
pub use crate::opcode::{OpTag, Opcode};
pub use crate::regions::{align_blocks, changed_regions};
