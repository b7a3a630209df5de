use std::collections::BTreeSet;
use std::ops::Range;

use crate::chunk::{Chunk, ChunkKind};
use crate::options::DiffOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One display row of a folded diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Row {
    /// A visible line, by index into the flat line sequence
    Line(usize),

    /// A collapsed run of unchanged lines
    Fold {
        /// Number of lines hidden behind the marker
        hidden: usize,
        /// The hidden lines, as indices into the flat line sequence
        range: Range<usize>,
    },
}

impl Chunk {
    /// Whether this chunk collapses when not expanded
    pub fn is_foldable(&self, options: &DiffOptions) -> bool {
        self.kind == ChunkKind::Unchanged && self.len() > options.fold_threshold()
    }

    /// Display rows for this chunk.
    ///
    /// A foldable chunk that is not expanded shows its first and last
    /// `context` lines around a fold marker. Everything else is shown in full.
    pub fn rows(&self, options: &DiffOptions, expanded: bool) -> Vec<Row> {
        if expanded || !self.is_foldable(options) {
            return self.range.clone().map(Row::Line).collect();
        }

        let context = options.context;
        let start = self.range.start.saturating_add(context);
        let hidden = start..self.range.end.saturating_sub(context);

        let mut rows = Vec::with_capacity(self.len() - hidden.len() + 1);
        rows.extend((self.range.start..hidden.start).map(Row::Line));
        rows.push(Row::Fold {
            hidden: hidden.len(),
            range: hidden.clone(),
        });
        rows.extend((hidden.end..self.range.end).map(Row::Line));
        rows
    }
}

/// Which chunks the user has expanded.
///
/// Chunks are collapsed by default. The state is kept apart from the chunks
/// so expanding never touches diff data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldState {
    expanded: BTreeSet<usize>,
}

impl FoldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the chunk at `index`. Expanding twice is the same as once.
    pub fn expand(&mut self, index: usize) {
        self.expanded.insert(index);
    }

    /// Collapse the chunk at `index` again
    pub fn collapse(&mut self, index: usize) {
        self.expanded.remove(&index);
    }

    /// Flip the chunk at `index` between expanded and collapsed
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Collapse every chunk
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Display rows for a whole chunk list under this state
    pub fn rows(&self, chunks: &[Chunk], options: &DiffOptions) -> Vec<Row> {
        chunks
            .iter()
            .enumerate()
            .flat_map(|(index, chunk)| chunk.rows(options, self.is_expanded(index)))
            .collect()
    }
}
