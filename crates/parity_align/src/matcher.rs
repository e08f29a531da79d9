use std::collections::HashMap;
use std::hash::Hash;

use crate::opcode::{OpTag, Opcode};

/// Longest-matching-block sequence matcher over opaque tokens.
///
/// Finds the longest run of equal tokens between the two sequences, then
/// recurses on the flanks to the left and right of that run. Where several
/// minimal edit scripts exist, this strategy resolves the ambiguity the same
/// way on every run: the earliest-starting longest match wins at each step.
pub struct SequenceMatcher<'a, T: Eq + Hash> {
    a: &'a [T],
    b: &'a [T],
    // Token -> ascending positions in `b`, so candidate match extensions are
    // found without rescanning `b` for every element of `a`.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::with_capacity(b.len());
        for (j, token) in b.iter().enumerate() {
            b2j.entry(token).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest run of equal tokens within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns `(i, j, size)` with `a[i..i+size] == b[j..j+size]`. Of all
    /// maximal runs it returns the one starting earliest in `a`, and of those
    /// the one starting earliest in `b`; `size` is zero when the windows share
    /// no token.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // j2len[j] = length of the longest run ending at a[i-1], b[j-1].
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for (i, token) in self.a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(token) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = match j.checked_sub(1) {
                        Some(prev) => j2len.get(&prev).copied().unwrap_or(0) + 1,
                        None => 1,
                    };
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        (best_i, best_j, best_size)
    }

    /// All matching runs in ascending order, adjacent runs merged, terminated
    /// by a zero-length sentinel at `(a.len(), b.len())`.
    pub fn matching_blocks(&self) -> Vec<(usize, usize, usize)> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut matches = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, size) = self.longest_match(alo, ahi, blo, bhi);
            if size > 0 {
                matches.push((i, j, size));
                if alo < i && blo < j {
                    queue.push((alo, i, blo, j));
                }
                if i + size < ahi && j + size < bhi {
                    queue.push((i + size, ahi, j + size, bhi));
                }
            }
        }
        matches.sort_unstable();

        let mut merged: Vec<(usize, usize, usize)> = Vec::with_capacity(matches.len() + 1);
        for (i, j, size) in matches {
            match merged.last_mut() {
                Some((mi, mj, msize)) if *mi + *msize == i && *mj + *msize == j => *msize += size,
                _ => merged.push((i, j, size)),
            }
        }
        merged.push((self.a.len(), self.b.len(), 0));
        merged
    }

    /// The full edit script covering both sequences end to end.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0, 0);
        for (ai, bj, size) in self.matching_blocks() {
            let tag = if i < ai && j < bj {
                Some(OpTag::Replace)
            } else if i < ai {
                Some(OpTag::Delete)
            } else if j < bj {
                Some(OpTag::Insert)
            } else {
                None
            };
            if let Some(tag) = tag {
                ops.push(Opcode {
                    tag,
                    before_start: i,
                    before_end: ai,
                    after_start: j,
                    after_end: bj,
                });
            }
            i = ai + size;
            j = bj + size;
            if size > 0 {
                ops.push(Opcode {
                    tag: OpTag::Equal,
                    before_start: ai,
                    before_end: i,
                    after_start: bj,
                    after_end: j,
                });
            }
        }
        ops
    }
}
