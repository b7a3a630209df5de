use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use twin_source::{Comparison, DiffStats, MatchKind, PairSummary, SourceFile, SourceOptions};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_compare_directories() {
    let base = tempdir().unwrap();
    let target = tempdir().unwrap();

    write(base.path(), "a_v1.js", "x\ny\n");
    write(base.path(), "lib/util-legacy.js", "u\n");
    write(target.path(), "a_v2.js", "x\nz\n");
    write(target.path(), "lib/util-modern.js", "u\n");
    write(target.path(), "new.js", "n\n");

    let comparison = Comparison::load(base.path(), target.path(), &SourceOptions::default()).unwrap();

    assert_eq!(comparison.base_files().len(), 2);
    assert_eq!(comparison.target_files().len(), 3);
    assert_eq!(comparison.len(), 3);

    let summaries = comparison.summaries();
    let overview: Vec<_> = summaries
        .iter()
        .map(|s| (s.slug.as_str(), s.kind, s.path.as_str()))
        .collect();
    assert_eq!(
        overview,
        vec![
            ("a", MatchKind::Modified, "a_v2.js"),
            ("new", MatchKind::Added, "new.js"),
            ("util", MatchKind::Modified, "lib/util-modern.js"),
        ]
    );

    assert_eq!(
        summaries[0].stats,
        DiffStats {
            added: 1,
            removed: 1,
            unchanged: 2
        }
    );
    // An added file diffs against the empty text
    assert_eq!(
        summaries[1].stats,
        DiffStats {
            added: 1,
            removed: 0,
            unchanged: 1
        }
    );
    assert!(!summaries[2].stats.has_changes());

    assert_eq!(
        comparison.totals(),
        DiffStats {
            added: 2,
            removed: 1,
            unchanged: 5
        }
    );
}

#[test]
fn test_diff_selected_pair() {
    let comparison = Comparison::new(
        vec![SourceFile::new("notes_v1.txt", "foo\nbar\n")],
        vec![SourceFile::new("notes_v2.txt", "foo\nbaz\n")],
    );

    let index = comparison.find("notes").unwrap();
    let diff = comparison.diff(index).unwrap();

    assert_eq!(diff.stats().added, 1);
    assert_eq!(diff.stats().removed, 1);
    assert_eq!(diff.paired_with(1), Some(2));
    assert_eq!(diff.chunks().len(), 3);

    assert!(comparison.diff(5).is_none());
    assert!(comparison.find("missing").is_none());
}

#[test]
fn test_deleted_pair() {
    let comparison = Comparison::new(vec![SourceFile::new("gone.md", "bye")], Vec::new());

    let pair = comparison.pair(0).unwrap();
    assert_eq!(pair.kind, MatchKind::Deleted);
    assert_eq!(pair.path(), "gone.md");

    // "bye" against the single empty line of ""
    let diff = comparison.diff(0).unwrap();
    assert_eq!(diff.stats().removed, 1);
    assert_eq!(diff.stats().added, 1);
}

#[test]
fn test_empty_comparison() {
    let comparison = Comparison::new(Vec::new(), Vec::new());

    assert!(comparison.is_empty());
    assert!(comparison.pairs().is_empty());
    assert!(comparison.summaries().is_empty());
    assert_eq!(comparison.totals(), DiffStats::default());
}

#[test]
fn test_totals_from_existing_summaries() {
    let comparison = Comparison::new(
        vec![
            SourceFile::new("app_v1.rs", "fn main() {}\n"),
            SourceFile::new("gone.md", "bye"),
        ],
        vec![
            SourceFile::new("app_v2.rs", "fn main() {\n    run();\n}\n"),
            SourceFile::new("readme-new.md", "hi\n"),
        ],
    );

    let summaries = comparison.summaries();
    let totals = PairSummary::totals(&summaries);

    assert_eq!(totals, comparison.totals());
    assert_eq!(
        totals.added,
        summaries.iter().map(|s| s.stats.added).sum::<usize>()
    );
    assert_eq!(PairSummary::totals(&[]), DiffStats::default());
}
