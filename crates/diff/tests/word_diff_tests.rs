use pretty_assertions::assert_eq;
use twin_diff::{diff_words, render_inline, tokenize, EditKind, WordSegment};

#[test]
fn test_word_level_diff() {
    let segments = diff_words(
        "The quick brown fox jumps over the lazy dog",
        "The quick red fox jumps over the lazy dog",
    );

    assert_eq!(
        segments,
        vec![
            WordSegment::new(EditKind::Equal, "The quick "),
            WordSegment::new(EditKind::Removed, "brown"),
            WordSegment::new(EditKind::Added, "red"),
            WordSegment::new(EditKind::Equal, " fox jumps over the lazy dog"),
        ]
    );
}

#[test]
fn test_appended_words() {
    let segments = diff_words("a b", "a b c");

    assert_eq!(
        segments,
        vec![
            WordSegment::new(EditKind::Equal, "a b"),
            WordSegment::new(EditKind::Added, " c"),
        ]
    );
}

#[test]
fn test_code_tokens() {
    let segments = diff_words(
        "        sum += items[i].price;",
        "        sum += items[i].price * items[i].quantity;",
    );

    // The shared prefix and the final semicolon survive
    assert_eq!(segments.first().map(|s| s.kind), Some(EditKind::Equal));
    assert_eq!(segments.last().map(|s| s.kind), Some(EditKind::Equal));
    assert!(segments.iter().all(|s| s.kind != EditKind::Removed));

    let added: String = segments
        .iter()
        .filter(|s| s.kind == EditKind::Added)
        .map(|s| s.value.as_str())
        .collect();
    assert_eq!(added, " * items[i].quantity");
}

#[test]
fn test_empty_lines() {
    assert!(diff_words("", "").is_empty());
    assert_eq!(
        diff_words("", "new"),
        vec![WordSegment::new(EditKind::Added, "new")]
    );
    assert_eq!(
        diff_words("old", ""),
        vec![WordSegment::new(EditKind::Removed, "old")]
    );
}

#[test]
fn test_whitespace_is_a_token() {
    let segments = diff_words("Line 2", "Line  2");

    assert_eq!(
        segments,
        vec![
            WordSegment::new(EditKind::Equal, "Line"),
            WordSegment::new(EditKind::Removed, " "),
            WordSegment::new(EditKind::Added, "  "),
            WordSegment::new(EditKind::Equal, "2"),
        ]
    );
}

#[test]
fn test_segments_rebuild_both_lines() {
    let old = "let total = price * count;";
    let new = "let sum = price * amount + tax;";

    let segments = diff_words(old, new);

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

    assert_eq!(old_side, old);
    assert_eq!(new_side, new);
}

#[test]
fn test_unicode_words() {
    let segments = diff_words("naïve café 🚀", "naïve bistro 🚀");

    assert_eq!(
        segments,
        vec![
            WordSegment::new(EditKind::Equal, "naïve "),
            WordSegment::new(EditKind::Removed, "café"),
            WordSegment::new(EditKind::Added, "bistro"),
            WordSegment::new(EditKind::Equal, " 🚀"),
        ]
    );
    assert_eq!(tokenize("🚀🚀"), vec!["🚀", "🚀"]);
}

#[test]
fn test_render_inline() {
    let segments = diff_words("value = 1", "value = 2");
    assert_eq!(render_inline(&segments), "value = [-1-]{+2+}");
}
