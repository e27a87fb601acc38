//! Split and merge policies keeping chunk lengths close to `√n`.
//!
//! A chunk of length `L` is split once `L² > n × SPLIT_FACTOR`, and two
//! neighbours of combined length `M` are merged once `M² × MERGE_FACTOR ≤ n`.
//! The gap between the two factors keeps alternating inserts and removals at
//! the same boundary from flipping between a split and a merge.

use tracing::{debug, trace};

use crate::directory::Directory;

/// Chunks shorter than this are never split.
pub const SPLIT_MIN_LEN: usize = 16;

/// A chunk of length `L` is split when `L² > n × SPLIT_FACTOR`.
pub const SPLIT_FACTOR: usize = 8;

/// Two neighbours of combined length `M` are merged when `M² × MERGE_FACTOR ≤ n`.
pub const MERGE_FACTOR: usize = 64;

/// After an insert or a removal, a full compaction pass runs with
/// probability `1 / COMPACTION_ODDS`.
pub const COMPACTION_ODDS: u32 = 4096;

const _: () = assert!(
    SPLIT_FACTOR * MERGE_FACTOR > 1,
    "merge threshold must sit below the split threshold"
);

#[inline]
pub fn should_split(chunk_len: usize, len: usize) -> bool {
    chunk_len >= SPLIT_MIN_LEN
        && chunk_len.saturating_mul(chunk_len) > len.saturating_mul(SPLIT_FACTOR)
}

#[inline]
pub fn should_merge(combined_len: usize, len: usize) -> bool {
    combined_len
        .saturating_mul(combined_len)
        .saturating_mul(MERGE_FACTOR)
        <= len
}

/// Rolls the dice for an amortized compaction pass.
pub fn should_compact() -> bool {
    rand::random_ratio(1, COMPACTION_ODDS)
}

impl<T> Directory<T> {
    /// Splits the chunk at `index` in two halves, the first half becoming a
    /// new chunk inserted right before it.
    pub fn split_chunk(&mut self, index: usize) {
        let Some(chunk) = self.chunk_mut(index) else {
            panic!("Index out of bounds: cannot split the chunk at index {index}");
        };

        let front = chunk.split_front(chunk.len() / 2);

        trace!(
            chunk = index,
            left = front.len(),
            right = chunk.len(),
            "split chunk"
        );

        self.insert_chunk_at(index, front);
    }

    /// Merges the chunk at `index + 1` into the chunk at `index`.
    pub fn merge_chunks(&mut self, index: usize) {
        assert!(
            index + 1 < self.len(),
            "Index out of bounds: cannot merge the chunk at index {index} with its successor"
        );

        let mut right = self.remove_chunk_at(index + 1);
        let left = &mut self.as_mut_slice()[index];

        trace!(
            chunk = index,
            left = left.len(),
            right = right.len(),
            "merge chunks"
        );

        left.append(&mut right);
    }

    /// Drops every empty chunk, keeping a single one when nothing else is left.
    pub fn remove_empty_chunks(&mut self) {
        let mut index = 0;
        while index < self.len() && self.len() > 1 {
            if self.chunk_len(index) == 0 {
                self.remove_chunk_at(index);
            } else {
                index += 1;
            }
        }
    }

    /// Restores the balance of the whole directory for a deque of `len`
    /// elements: empty chunks go first, then every oversized chunk is split
    /// and every undersized pair of neighbours is merged.
    ///
    /// Running it twice in a row leaves the second pass with nothing to do.
    pub fn compact(&mut self, len: usize) {
        let before = self.len();

        self.remove_empty_chunks();

        let mut index = 0;
        while index < self.len() {
            if should_split(self.chunk_len(index), len) {
                self.split_chunk(index);
            } else {
                index += 1;
            }
        }

        let mut index = 0;
        while index + 1 < self.len() {
            if should_merge(self.chunk_len(index) + self.chunk_len(index + 1), len) {
                self.merge_chunks(index);
            } else {
                index += 1;
            }
        }

        debug!(len, before, after = self.len(), "compacted chunk directory");
    }

    /// Whether the directory is balanced for a deque of `len` elements.
    #[cfg(test)]
    pub fn is_balanced(&self, len: usize) -> bool {
        let chunks = self.as_slice();

        chunks.iter().all(|chunk| !should_split(chunk.len(), len))
            && chunks
                .windows(2)
                .all(|pair| !should_merge(pair[0].len() + pair[1].len(), len))
    }
}
