use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator followed by an optional `v`, a number, and optional dotted parts: `_v2`, `-1.2.3`
static VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.\s]v?\d+(?:\.\d+)*").expect("version marker pattern is valid"));

/// Separator followed by a release-stage word: `-legacy`, `_final`
static STAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-_.\s](?:legacy|modern|old|new|final|latest)").expect("stage marker pattern is valid")
});

/// Normalized, filename-derived identity of a file.
///
/// Not unique: several files in one tree can share a slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slug(String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// Derive the slug of a path.
///
/// Takes the file name, lowercases it, strips version markers, then
/// stage markers, then the extension, then surrounding whitespace. Never
/// fails; odd input can give an empty slug.
pub fn slug(path: &str) -> Slug {
    let name = path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
        .to_lowercase();

    // Versions, then stages, then the extension
    let name = VERSION_MARKER.replace_all(&name, "");
    let name = STAGE_MARKER.replace_all(&name, "");

    let stem = match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => &name[..],
    };

    Slug(stem.trim().to_string())
}
