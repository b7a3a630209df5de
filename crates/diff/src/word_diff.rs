use std::sync::LazyLock;

use regex::Regex;

use crate::lcs::{diff_sequences, EditKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Word characters, whitespace runs, or a single other character
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|\s+|[^\w\s]").expect("word token pattern is valid"));

/// A piece of an intra-line diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordSegment {
    /// Whether the text is shared, only on the removed line, or only on the added line
    pub kind: EditKind,

    /// The text of the segment
    pub value: String,
}

impl WordSegment {
    pub fn new(kind: EditKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Whether a renderer should show this segment on a line of the given side.
    ///
    /// Equal segments appear on both lines, removed ones only on the removed
    /// line and added ones only on the added line.
    pub fn visible_on(&self, side: EditKind) -> bool {
        self.kind == EditKind::Equal || self.kind == side
    }
}

/// Split a line into word tokens.
///
/// Every character of the input ends up in exactly one token, so joining
/// the tokens gives back the line.
pub fn tokenize(line: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}

/// Compute the intra-line segments between a removed line and the added
/// line it is paired with. Adjacent segments of the same kind are merged.
pub fn diff_words(old_line: &str, new_line: &str) -> Vec<WordSegment> {
    let old_tokens = tokenize(old_line);
    let new_tokens = tokenize(new_line);

    let ops = diff_sequences(&old_tokens, &new_tokens);

    coalesce(ops.into_iter().map(|op| WordSegment::new(op.kind, *op.value)))
}

/// Merge neighbouring segments that share a kind
pub fn coalesce(segments: impl IntoIterator<Item = WordSegment>) -> Vec<WordSegment> {
    let mut merged: Vec<WordSegment> = Vec::new();

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.kind == segment.kind => last.value.push_str(&segment.value),
            _ => merged.push(segment),
        }
    }

    merged
}

/// Render segments on one line, marking removed text as `[-...-]` and
/// added text as `{+...+}`
pub fn render_inline(segments: &[WordSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.kind {
            EditKind::Equal => out.push_str(&segment.value),
            EditKind::Removed => {
                out.push_str("[-");
                out.push_str(&segment.value);
                out.push_str("-]");
            }
            EditKind::Added => {
                out.push_str("{+");
                out.push_str(&segment.value);
                out.push_str("+}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_every_character() {
        let line = "let x = foo(bar, 42);  // done";
        assert_eq!(tokenize(line).concat(), line);
    }

    #[test]
    fn test_tokenize_splits_punctuation_individually() {
        assert_eq!(tokenize("a.b()"), vec!["a", ".", "b", "(", ")"]);
        assert_eq!(tokenize("  foo_bar\t"), vec!["  ", "foo_bar", "\t"]);
    }

    #[test]
    fn test_coalesce_merges_runs() {
        let merged = coalesce(vec![
            WordSegment::new(EditKind::Equal, "a"),
            WordSegment::new(EditKind::Equal, " "),
            WordSegment::new(EditKind::Removed, "b"),
            WordSegment::new(EditKind::Removed, "c"),
            WordSegment::new(EditKind::Added, "d"),
        ]);
        assert_eq!(
            merged,
            vec![
                WordSegment::new(EditKind::Equal, "a "),
                WordSegment::new(EditKind::Removed, "bc"),
                WordSegment::new(EditKind::Added, "d"),
            ]
        );
    }
}
