use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::line_diff::{DiffLine, DiffLineKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line tallies of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Number of added lines
    pub added: usize,

    /// Number of removed lines
    pub removed: usize,

    /// Number of unchanged lines
    pub unchanged: usize,
}

impl DiffStats {
    /// Count the lines of a flat diff
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            match line.kind {
                DiffLineKind::Added => stats.added += 1,
                DiffLineKind::Removed => stats.removed += 1,
                DiffLineKind::Unchanged => stats.unchanged += 1,
            }
            stats
        })
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.added + self.removed > 0
    }
}

impl Add for DiffStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            added: self.added + other.added,
            removed: self.removed + other.removed,
            unchanged: self.unchanged + other.unchanged,
        }
    }
}

impl AddAssign for DiffStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for DiffStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
