#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of context lines kept around a fold
pub const DEFAULT_CONTEXT: usize = 3;

/// Display options for a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffOptions {
    /// Lines shown at each end of a folded unchanged chunk
    pub context: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
        }
    }
}

impl DiffOptions {
    /// Set the fold context size
    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    /// Unchanged chunks longer than this are folded
    pub fn fold_threshold(&self) -> usize {
        self.context.saturating_mul(2).saturating_add(2)
    }
}
