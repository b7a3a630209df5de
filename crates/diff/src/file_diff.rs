use crate::chunk::{chunkify, Chunk};
use crate::fold::{FoldState, Row};
use crate::line_diff::{diff_lines, DiffLine, DiffLineKind, LineDiff};
use crate::options::DiffOptions;
use crate::stats::DiffStats;
use crate::word_diff::WordSegment;

/// Everything a renderer needs for one compared file: the flat line diff,
/// its chunks and its tallies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// The line-level diff with pairings and word segments
    diff: LineDiff,

    /// The chunks covering `diff`
    chunks: Vec<Chunk>,

    /// Line counts of `diff`
    stats: DiffStats,
}

impl FileDiff {
    /// Create a new diff between two texts
    pub fn new(old_text: &str, new_text: &str) -> Self {
        let diff = diff_lines(old_text, new_text);
        let chunks = chunkify(diff.lines());
        let stats = DiffStats::from_lines(diff.lines());

        Self {
            diff,
            chunks,
            stats,
        }
    }

    /// Get the underlying line diff
    pub fn line_diff(&self) -> &LineDiff {
        &self.diff
    }

    /// All lines in display order
    pub fn lines(&self) -> &[DiffLine] {
        self.diff.lines()
    }

    /// Get the chunks
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Get the line tallies
    pub fn stats(&self) -> DiffStats {
        self.stats
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.stats.has_changes()
    }

    /// The line paired with the line at `index`, if any
    pub fn paired_with(&self, index: usize) -> Option<usize> {
        self.diff.paired_with(index)
    }

    /// Word segments for the line at `index`, if it is paired
    pub fn segments(&self, index: usize) -> Option<&[WordSegment]> {
        self.diff.segments(index)
    }

    /// Display rows under the given fold state
    pub fn rows(&self, options: &DiffOptions, folds: &FoldState) -> Vec<Row> {
        folds.rows(&self.chunks, options)
    }

    /// Render the folded diff as plain text with ` `, `-` and `+` prefixes
    /// and `@@ N hidden lines @@` markers for folds
    pub fn render_plain(&self, options: &DiffOptions, folds: &FoldState) -> String {
        let mut out = String::new();

        for row in self.rows(options, folds) {
            match row {
                Row::Line(index) => {
                    let Some(line) = self.diff.line(index) else {
                        continue;
                    };
                    out.push(match line.kind {
                        DiffLineKind::Unchanged => ' ',
                        DiffLineKind::Removed => '-',
                        DiffLineKind::Added => '+',
                    });
                    out.push_str(&line.content);
                }
                Row::Fold { hidden, .. } => {
                    out.push_str(&format!("@@ {} hidden lines @@", hidden));
                }
            }
            out.push('\n');
        }

        out
    }
}
