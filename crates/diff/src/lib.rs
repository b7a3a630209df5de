// Core diff library for Twin
// Line and word level diffing over a shared LCS engine, plus chunking and
// folding of the result for display.

mod chunk;
mod file_diff;
mod fold;
mod lcs;
mod line_diff;
mod options;
mod stats;
mod word_diff;

pub use chunk::{chunkify, Chunk, ChunkKind};
pub use file_diff::FileDiff;
pub use fold::{FoldState, Row};
pub use lcs::{diff_sequences, EditKind, EditOp, LcsTable};
pub use line_diff::{diff_lines, split_lines, DiffLine, DiffLineKind, LineDiff};
pub use options::{DiffOptions, DEFAULT_CONTEXT};
pub use stats::DiffStats;
pub use word_diff::{coalesce, diff_words, render_inline, tokenize, WordSegment};
