use std::path::Path;

use anyhow::Result;
use log::info;
use rayon::prelude::*;
use twin_diff::{DiffStats, FileDiff};
use twin_match::{match_indices, MatchEntry, MatchKind, MatchedPair, SourceFile};

use crate::options::SourceOptions;
use crate::tree::SourceTree;

/// Per-pair overview for a file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSummary {
    /// How the slug shows up across the trees
    pub kind: MatchKind,

    /// The shared slug
    pub slug: String,

    /// Path to show, preferring the target side
    pub path: String,

    /// Line tallies of the pair's diff
    pub stats: DiffStats,
}

impl PairSummary {
    /// Sum the line tallies of already computed summaries
    pub fn totals(summaries: &[PairSummary]) -> DiffStats {
        summaries.iter().map(|summary| summary.stats).sum()
    }
}

/// One comparison session between a base and a target collection.
///
/// Matching happens once on construction; diffs are computed on demand.
/// Starting over means building a new `Comparison`.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Files of the base tree
    base: Vec<SourceFile>,

    /// Files of the target tree
    target: Vec<SourceFile>,

    /// Matches sorted by slug
    entries: Vec<MatchEntry>,
}

impl Comparison {
    /// Match two file collections
    pub fn new(base: Vec<SourceFile>, target: Vec<SourceFile>) -> Self {
        let entries = match_indices(&base, &target);
        Self {
            base,
            target,
            entries,
        }
    }

    /// Load two directory trees with the same options and match them
    pub fn load<P, Q>(base_root: P, target_root: Q, options: &SourceOptions) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let base_tree = SourceTree::open(base_root, options.clone())?;
        let target_tree = SourceTree::open(target_root, options.clone())?;

        let (base, target) = rayon::join(|| base_tree.load(), || target_tree.load());

        let comparison = Self::new(base, target);
        info!(
            "Compared {} and {}: {} pairs",
            base_tree.root().display(),
            target_tree.root().display(),
            comparison.len()
        );

        Ok(comparison)
    }

    /// Get the base files
    pub fn base_files(&self) -> &[SourceFile] {
        &self.base
    }

    /// Get the target files
    pub fn target_files(&self) -> &[SourceFile] {
        &self.target
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a pair by index
    pub fn pair(&self, index: usize) -> Option<MatchedPair<'_>> {
        self.entries.get(index).map(|entry| self.resolve(entry))
    }

    /// All pairs, sorted by slug
    pub fn pairs(&self) -> Vec<MatchedPair<'_>> {
        self.entries.iter().map(|entry| self.resolve(entry)).collect()
    }

    /// Index of the pair with the given slug
    pub fn find(&self, slug: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| entry.slug.as_str().cmp(slug))
            .ok()
    }

    /// Diff one pair. A missing side diffs as the empty text.
    ///
    /// The empty text splits into one empty line, so an added or deleted
    /// file whose content does not end with a newline also reports that
    /// empty line on the missing side: a deleted `"bye"` counts one removed
    /// and one added line.
    pub fn diff(&self, index: usize) -> Option<FileDiff> {
        let pair = self.pair(index)?;
        Some(FileDiff::new(pair.old_content(), pair.new_content()))
    }

    /// Diff every pair in parallel and summarise, in pair order
    pub fn summaries(&self) -> Vec<PairSummary> {
        self.entries
            .par_iter()
            .map(|entry| {
                let pair = self.resolve(entry);
                let stats = FileDiff::new(pair.old_content(), pair.new_content()).stats();
                PairSummary {
                    kind: pair.kind,
                    slug: pair.slug.to_string(),
                    path: pair.path().to_string(),
                    stats,
                }
            })
            .collect()
    }

    /// Sum of all pairs' line tallies. Diffs every pair; use
    /// [`PairSummary::totals`] when the summaries are already at hand.
    pub fn totals(&self) -> DiffStats {
        PairSummary::totals(&self.summaries())
    }

    fn resolve(&self, entry: &MatchEntry) -> MatchedPair<'_> {
        MatchedPair {
            kind: entry.kind,
            slug: entry.slug.clone(),
            base: entry.base.and_then(|i| self.base.get(i)),
            target: entry.target.and_then(|i| self.target.get(i)),
        }
    }
}
