use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffOp};
use twin_diff::{
    chunkify, diff_lines, diff_sequences, diff_words, split_lines, ChunkKind, DiffLineKind,
    EditKind,
};

/// Small alphabets so that generated texts share plenty of lines
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("[abc]{0,2}", 0..12).prop_map(|lines| lines.join("\n"))
}

fn line() -> impl Strategy<Value = String> {
    "[ab .]{0,12}"
}

fn rebuild(lines: &[twin_diff::DiffLine], skip: DiffLineKind) -> String {
    lines
        .iter()
        .filter(|l| l.kind != skip)
        .map(|l| l.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn test_edit_script_rebuilds_both_texts(old in text(), new in text()) {
        let diff = diff_lines(&old, &new);

        prop_assert_eq!(rebuild(diff.lines(), DiffLineKind::Added), old);
        prop_assert_eq!(rebuild(diff.lines(), DiffLineKind::Removed), new);
    }

    #[test]
    fn test_line_numbers_count_up(old in text(), new in text()) {
        let diff = diff_lines(&old, &new);

        let old_numbers: Vec<_> = diff.lines().iter().filter_map(|l| l.old_line_no).collect();
        let new_numbers: Vec<_> = diff.lines().iter().filter_map(|l| l.new_line_no).collect();

        prop_assert_eq!(old_numbers, (1..=split_lines(&old).len()).collect::<Vec<_>>());
        prop_assert_eq!(new_numbers, (1..=split_lines(&new).len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_identical_texts_are_unchanged(body in text()) {
        let diff = diff_lines(&body, &body);

        prop_assert_eq!(diff.len(), split_lines(&body).len());
        for line in diff.lines() {
            prop_assert_eq!(line.kind, DiffLineKind::Unchanged);
            prop_assert_eq!(line.old_line_no, line.new_line_no);
        }
    }

    #[test]
    fn test_edit_script_is_minimal(old in text(), new in text()) {
        let old_lines = split_lines(&old);
        let new_lines = split_lines(&new);

        let equal = diff_sequences(&old_lines, &new_lines)
            .iter()
            .filter(|op| op.kind == EditKind::Equal)
            .count();

        let reference: usize = capture_diff_slices(Algorithm::Myers, &old_lines, &new_lines)
            .iter()
            .map(|op| match op {
                DiffOp::Equal { len, .. } => *len,
                _ => 0,
            })
            .sum();

        prop_assert_eq!(equal, reference);
    }

    #[test]
    fn test_pairs_are_mutual_and_adjacent(old in text(), new in text()) {
        let diff = diff_lines(&old, &new);

        for (i, line) in diff.lines().iter().enumerate() {
            if let Some(j) = line.paired_with {
                prop_assert_eq!(diff.paired_with(j), Some(i));
                prop_assert_eq!(i.abs_diff(j), 1);
                prop_assert!(line.kind.is_change());
                prop_assert_ne!(line.kind, diff.lines()[j].kind);
                prop_assert!(diff.segments(i).is_some());
            } else {
                prop_assert!(diff.segments(i).is_none());
            }
        }
    }

    #[test]
    fn test_chunks_tile_the_diff(old in text(), new in text()) {
        let diff = diff_lines(&old, &new);
        let chunks = chunkify(diff.lines());

        let mut next = 0;
        for chunk in &chunks {
            prop_assert!(!chunk.is_empty());
            prop_assert_eq!(chunk.range.start, next);
            next = chunk.range.end;

            let changed = chunk.kind == ChunkKind::Changed;
            for line in chunk.lines(diff.lines()) {
                prop_assert_eq!(line.kind.is_change(), changed);
            }
        }
        prop_assert_eq!(next, diff.len());

        // Neighbouring chunks always differ in kind
        for pair in chunks.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn test_word_segments_are_coalesced(old in line(), new in line()) {
        let segments = diff_words(&old, &new);

        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
        for segment in &segments {
            prop_assert!(!segment.value.is_empty());
        }

        let old_side: String = segments
            .iter()
            .filter(|s| s.visible_on(EditKind::Removed))
            .map(|s| s.value.as_str())
            .collect();
        let new_side: String = segments
            .iter()
            .filter(|s| s.visible_on(EditKind::Added))
            .map(|s| s.value.as_str())
            .collect();
        prop_assert_eq!(old_side, old);
        prop_assert_eq!(new_side, new);
    }
}
