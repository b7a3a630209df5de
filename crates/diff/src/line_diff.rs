use std::collections::BTreeMap;

use derive_more::Display;
use log::{debug, trace};

use crate::lcs::{diff_sequences, EditKind, EditOp};
use crate::word_diff::{diff_words, WordSegment};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of one line in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffLineKind {
    /// The line exists in both versions
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// The line only exists in the new version
    #[display(fmt = "Added")]
    Added,

    /// The line only exists in the old version
    #[display(fmt = "Removed")]
    Removed,
}

impl DiffLineKind {
    pub fn is_change(self) -> bool {
        self != DiffLineKind::Unchanged
    }

    /// The word-segment side a line of this kind renders
    pub fn side(self) -> EditKind {
        match self {
            DiffLineKind::Unchanged => EditKind::Equal,
            DiffLineKind::Added => EditKind::Added,
            DiffLineKind::Removed => EditKind::Removed,
        }
    }
}

impl From<EditKind> for DiffLineKind {
    fn from(kind: EditKind) -> Self {
        match kind {
            EditKind::Equal => DiffLineKind::Unchanged,
            EditKind::Added => DiffLineKind::Added,
            EditKind::Removed => DiffLineKind::Removed,
        }
    }
}

/// A single line of a diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffLine {
    /// The status of the line
    pub kind: DiffLineKind,

    /// 1-based line number in the old text (absent for added lines)
    pub old_line_no: Option<usize>,

    /// 1-based line number in the new text (absent for removed lines)
    pub new_line_no: Option<usize>,

    /// The line without its newline
    pub content: String,

    /// Index of the counterpart line this one is paired with for word
    /// highlighting, in the same [`LineDiff`]
    pub paired_with: Option<usize>,
}

impl DiffLine {
    fn from_op(op: &EditOp<'_, &str>) -> Self {
        Self {
            kind: op.kind.into(),
            old_line_no: op.old_index.map(|i| i + 1),
            new_line_no: op.new_index.map(|i| i + 1),
            content: (*op.value).to_string(),
            paired_with: None,
        }
    }
}

/// The line-level diff of two texts.
///
/// Word segments of a paired removed/added couple are computed once and
/// stored against the index of the removed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineDiff {
    /// Lines in display order
    lines: Vec<DiffLine>,

    /// Word segments keyed by the removed line's index
    segments: BTreeMap<usize, Vec<WordSegment>>,
}

impl LineDiff {
    /// All lines in display order
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    /// Get a line by index
    pub fn line(&self, index: usize) -> Option<&DiffLine> {
        self.lines.get(index)
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line paired with the line at `index`, if any
    pub fn paired_with(&self, index: usize) -> Option<usize> {
        self.lines.get(index)?.paired_with
    }

    /// Word segments shared by the line at `index` and its counterpart.
    ///
    /// Both sides of a pair return the same slice; unpaired lines return `None`.
    pub fn segments(&self, index: usize) -> Option<&[WordSegment]> {
        let line = self.lines.get(index)?;
        let removed = match line.kind {
            DiffLineKind::Removed => index,
            DiffLineKind::Added => line.paired_with?,
            DiffLineKind::Unchanged => return None,
        };
        self.segments.get(&removed).map(Vec::as_slice)
    }

    /// Number of removed/added couples with word segments
    pub fn pair_count(&self) -> usize {
        self.segments.len()
    }
}

/// Split text on `\n`. A trailing newline leaves a trailing empty line and
/// the empty string is a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Diff two texts line by line
pub fn diff_lines(old_text: &str, new_text: &str) -> LineDiff {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    let ops = diff_sequences(&old_lines, &new_lines);
    let lines = resequence(&ops);

    let mut diff = LineDiff {
        lines,
        segments: BTreeMap::new(),
    };
    pair_adjacent(&mut diff);

    debug!(
        "line diff: {} old, {} new, {} output lines, {} pairs",
        old_lines.len(),
        new_lines.len(),
        diff.lines.len(),
        diff.segments.len()
    );

    diff
}

/// Turn an edit script into display lines.
///
/// Unchanged lines pass through. Inside each run of changes, the removed
/// and added lines are interleaved by position: removed[0], added[0],
/// removed[1], added[1], and so on, with the longer side's leftovers at the end.
fn resequence(ops: &[EditOp<'_, &str>]) -> Vec<DiffLine> {
    let mut lines = Vec::with_capacity(ops.len());
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for op in ops {
        match op.kind {
            EditKind::Equal => {
                flush_run(&mut lines, &mut removed, &mut added);
                lines.push(DiffLine::from_op(op));
            }
            EditKind::Removed => removed.push(DiffLine::from_op(op)),
            EditKind::Added => added.push(DiffLine::from_op(op)),
        }
    }
    flush_run(&mut lines, &mut removed, &mut added);

    lines
}

fn flush_run(lines: &mut Vec<DiffLine>, removed: &mut Vec<DiffLine>, added: &mut Vec<DiffLine>) {
    if removed.is_empty() && added.is_empty() {
        return;
    }

    trace!("change run: {} removed, {} added", removed.len(), added.len());

    let mut removed = removed.drain(..);
    let mut added = added.drain(..);
    loop {
        let r = removed.next();
        let a = added.next();
        if r.is_none() && a.is_none() {
            break;
        }
        lines.extend(r);
        lines.extend(a);
    }
}

/// Link each index-adjacent removed/added couple whose lines are both still
/// unpaired, and compute their word segments.
fn pair_adjacent(diff: &mut LineDiff) {
    for i in 1..diff.lines.len() {
        let (prev, curr) = (&diff.lines[i - 1], &diff.lines[i]);
        if prev.paired_with.is_some() || curr.paired_with.is_some() {
            continue;
        }

        let removed = match (prev.kind, curr.kind) {
            (DiffLineKind::Removed, DiffLineKind::Added) => i - 1,
            (DiffLineKind::Added, DiffLineKind::Removed) => i,
            _ => continue,
        };
        let added = if removed == i { i - 1 } else { i };

        let segments = diff_words(&diff.lines[removed].content, &diff.lines[added].content);
        diff.lines[removed].paired_with = Some(added);
        diff.lines[added].paired_with = Some(removed);
        diff.segments.insert(removed, segments);
    }
}
