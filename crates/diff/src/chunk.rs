use std::ops::Range;

use derive_more::Display;

use crate::line_diff::{DiffLine, DiffLineKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of a chunk of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChunkKind {
    /// Only unchanged lines
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// Removed and added lines, in any mix
    #[display(fmt = "Changed")]
    Changed,
}

impl From<DiffLineKind> for ChunkKind {
    fn from(kind: DiffLineKind) -> Self {
        if kind.is_change() {
            ChunkKind::Changed
        } else {
            ChunkKind::Unchanged
        }
    }
}

/// A maximal run of lines that fold or expand together
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    /// The status shared by every line of the chunk
    pub kind: ChunkKind,

    /// The lines of the chunk, as indices into the flat line sequence
    pub range: Range<usize>,
}

impl Chunk {
    /// The chunk's lines out of the flat line sequence it was built from
    pub fn lines<'a>(&self, lines: &'a [DiffLine]) -> &'a [DiffLine] {
        &lines[self.range.clone()]
    }

    /// Number of lines in the chunk
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.kind == ChunkKind::Changed
    }
}

/// Group a flat line sequence into chunks.
///
/// Consecutive lines share a chunk while they are all unchanged or all
/// changes; removed and added lines merge into one changed chunk. Every
/// chunk is non-empty and the chunk ranges tile `0..lines.len()` in order.
pub fn chunkify(lines: &[DiffLine]) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let kind = ChunkKind::from(line.kind);
        match chunks.last_mut() {
            Some(chunk) if chunk.kind == kind => chunk.range.end = index + 1,
            _ => chunks.push(Chunk {
                kind,
                range: index..index + 1,
            }),
        }
    }

    chunks
}
