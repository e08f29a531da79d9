use parity_signature::{BBox, TextBlock};

use crate::matcher::SequenceMatcher;
use crate::opcode::{OpTag, Opcode};

/// Compute the edit script between two block sequences.
///
/// Blocks are matched by their normalized text only; bounding boxes play no
/// part in alignment and are carried through untouched for reporting.
pub fn align_blocks(before: &[TextBlock], after: &[TextBlock]) -> Vec<Opcode> {
    let before_texts: Vec<&str> = before.iter().map(|b| b.text.as_str()).collect();
    let after_texts: Vec<&str> = after.iter().map(|b| b.text.as_str()).collect();
    SequenceMatcher::new(&before_texts, &after_texts).opcodes()
}

/// Bounding boxes of all "after"-side content touched by a non-equal opcode,
/// in the order the opcodes occur along the sequence.
///
/// Deletions have no "after" location, so they contribute nothing here; a
/// pure deletion still surfaces as a TEXT divergence at the channel level.
pub fn changed_regions(before: &[TextBlock], after: &[TextBlock]) -> Vec<BBox> {
    let mut regions = Vec::new();
    for op in align_blocks(before, after) {
        if op.tag == OpTag::Equal {
            continue;
        }
        for block in &after[op.after_start..op.after_end] {
            regions.push(block.bbox);
        }
    }
    regions
}
