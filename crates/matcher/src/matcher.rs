use std::collections::{BTreeMap, BTreeSet};

use derive_more::Display;
use log::debug;

use crate::slug::Slug;
use crate::source_file::SourceFile;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a slug shows up across the two trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchKind {
    /// Present in both trees
    #[display(fmt = "Modified")]
    Modified,

    /// Only present in the target tree
    #[display(fmt = "Added")]
    Added,

    /// Only present in the base tree
    #[display(fmt = "Deleted")]
    Deleted,
}

/// A match expressed as indices into the base and target collections
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchEntry {
    /// How the slug shows up across the trees
    pub kind: MatchKind,

    /// The shared slug
    pub slug: Slug,

    /// Index of the base file (absent for added entries)
    pub base: Option<usize>,

    /// Index of the target file (absent for deleted entries)
    pub target: Option<usize>,
}

/// A base file and target file that share a slug, borrowed from the
/// collections they were matched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair<'a> {
    /// How the slug shows up across the trees
    pub kind: MatchKind,

    /// The shared slug
    pub slug: Slug,

    /// The base file (absent for added pairs)
    pub base: Option<&'a SourceFile>,

    /// The target file (absent for deleted pairs)
    pub target: Option<&'a SourceFile>,
}

impl<'a> MatchedPair<'a> {
    /// Path to show for this pair, preferring the target side
    pub fn path(&self) -> &'a str {
        self.target
            .or(self.base)
            .map(|file| file.path.as_str())
            .unwrap_or_default()
    }

    /// Content on the base side, empty for added pairs
    pub fn old_content(&self) -> &'a str {
        self.base.map(|file| file.content.as_str()).unwrap_or_default()
    }

    /// Content on the target side, empty for deleted pairs
    pub fn new_content(&self) -> &'a str {
        self.target
            .map(|file| file.content.as_str())
            .unwrap_or_default()
    }
}

/// Group file indices by slug, keeping insertion order within a slug
fn index_by_slug(files: &[SourceFile]) -> BTreeMap<Slug, Vec<usize>> {
    let mut by_slug: BTreeMap<Slug, Vec<usize>> = BTreeMap::new();
    for (index, file) in files.iter().enumerate() {
        by_slug.entry(file.slug()).or_default().push(index);
    }
    by_slug
}

/// Match two collections by slug, returning index entries sorted by slug.
///
/// When several files on one side share a slug only the first is used;
/// the rest are dropped from the result.
pub fn match_indices(base: &[SourceFile], target: &[SourceFile]) -> Vec<MatchEntry> {
    let base_by_slug = index_by_slug(base);
    let target_by_slug = index_by_slug(target);

    let slugs: BTreeSet<&Slug> = base_by_slug.keys().chain(target_by_slug.keys()).collect();

    let entries: Vec<MatchEntry> = slugs
        .into_iter()
        .map(|slug| {
            let base_indices = base_by_slug.get(slug).map(Vec::as_slice).unwrap_or_default();
            let target_indices = target_by_slug.get(slug).map(Vec::as_slice).unwrap_or_default();

            if base_indices.len() > 1 || target_indices.len() > 1 {
                debug!(
                    "slug {:?} is shared by {} base and {} target files, keeping the first of each",
                    slug.as_str(),
                    base_indices.len(),
                    target_indices.len()
                );
            }

            let base = base_indices.first().copied();
            let target = target_indices.first().copied();
            let kind = match (base, target) {
                (Some(_), Some(_)) => MatchKind::Modified,
                (Some(_), None) => MatchKind::Deleted,
                _ => MatchKind::Added,
            };

            MatchEntry {
                kind,
                slug: slug.clone(),
                base,
                target,
            }
        })
        .collect();

    debug!(
        "matched {} base and {} target files into {} entries",
        base.len(),
        target.len(),
        entries.len()
    );

    entries
}

/// Match two collections by slug, sorted by slug
pub fn match_files<'a>(base: &'a [SourceFile], target: &'a [SourceFile]) -> Vec<MatchedPair<'a>> {
    match_indices(base, target)
        .into_iter()
        .map(|entry| MatchedPair {
            kind: entry.kind,
            slug: entry.slug,
            base: entry.base.map(|i| &base[i]),
            target: entry.target.map(|i| &target[i]),
        })
        .collect()
}
