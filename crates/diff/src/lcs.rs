use derive_more::Display;
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a single edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditKind {
    /// The token exists in both sequences
    #[display(fmt = "Equal")]
    Equal,

    /// The token only exists in the new sequence
    #[display(fmt = "Added")]
    Added,

    /// The token only exists in the old sequence
    #[display(fmt = "Removed")]
    Removed,
}

/// One step of an edit script produced by [`LcsTable::backtrack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOp<'a, T> {
    /// What happened to the token
    pub kind: EditKind,

    /// Index into the old sequence (present for equal and removed ops)
    pub old_index: Option<usize>,

    /// Index into the new sequence (present for equal and added ops)
    pub new_index: Option<usize>,

    /// The token itself, borrowed from whichever sequence it came from
    pub value: &'a T,
}

/// Dense table of longest-common-subsequence lengths.
///
/// `get(i, j)` is the LCS length of the first `i` tokens of the old
/// sequence and the first `j` tokens of the new one. The table holds
/// `(m + 1) * (n + 1)` cells, so memory grows with the product of both
/// input lengths. Large inputs are not bounded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    /// Number of tokens in the old sequence
    rows: usize,

    /// Number of tokens in the new sequence
    cols: usize,

    /// Row-major cells, `(rows + 1) * (cols + 1)` of them
    cells: Vec<usize>,
}

impl LcsTable {
    /// Build the table for two token sequences, comparing by value
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let rows = old.len();
        let cols = new.len();
        let width = cols + 1;
        let mut cells = vec![0usize; (rows + 1) * width];

        trace!("building lcs table {}x{}", rows + 1, cols + 1);

        for i in 1..=rows {
            for j in 1..=cols {
                cells[i * width + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of tokens in the old sequence
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tokens in the new sequence
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `old[..i]` and `new[..j]`
    ///
    /// Panics if `i > rows()` or `j > cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * (self.cols + 1) + j]
    }

    /// Length of the longest common subsequence of the full inputs
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows, self.cols)
    }

    /// Walk the table from the bottom-right corner back to the origin and
    /// produce an edit script, oldest index first.
    ///
    /// When both directions keep the same LCS length the walk steps left,
    /// emitting an added op. That choice fixes which of several minimal
    /// scripts comes out, so it must not change.
    ///
    /// `old` and `new` must be the sequences the table was built from.
    pub fn backtrack<'a, T: PartialEq>(&self, old: &'a [T], new: &'a [T]) -> Vec<EditOp<'a, T>> {
        debug_assert_eq!(old.len(), self.rows);
        debug_assert_eq!(new.len(), self.cols);

        let mut ops = Vec::with_capacity(self.rows.max(self.cols));
        let mut i = self.rows;
        let mut j = self.cols;

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
                ops.push(EditOp {
                    kind: EditKind::Equal,
                    old_index: Some(i - 1),
                    new_index: Some(j - 1),
                    value: &old[i - 1],
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || self.get(i, j - 1) >= self.get(i - 1, j)) {
                ops.push(EditOp {
                    kind: EditKind::Added,
                    old_index: None,
                    new_index: Some(j - 1),
                    value: &new[j - 1],
                });
                j -= 1;
            } else {
                ops.push(EditOp {
                    kind: EditKind::Removed,
                    old_index: Some(i - 1),
                    new_index: None,
                    value: &old[i - 1],
                });
                i -= 1;
            }
        }

        ops.reverse();
        ops
    }
}

/// Build the table and backtrack in one go
pub fn diff_sequences<'a, T: PartialEq>(old: &'a [T], new: &'a [T]) -> Vec<EditOp<'a, T>> {
    LcsTable::build(old, new).backtrack(old, new)
}
