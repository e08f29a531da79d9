use serde::{Deserialize, Serialize};

/// Kind of one edit-script operation.
///
/// A contiguous run deleted from "before" immediately followed by a run
/// inserted into "after" at the same position is folded into `Replace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// One edit-script operation over two token sequences.
///
/// `before_start..before_end` indexes the "before" sequence and
/// `after_start..after_end` the "after" sequence. For `Delete` the after
/// range is empty; for `Insert` the before range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub before_start: usize,
    pub before_end: usize,
    pub after_start: usize,
    pub after_end: usize,
}
