// File access for Twin
// Loads two directory trees as text files and compares them pair by pair

mod comparison;
mod ignore;
mod options;
mod tree;

pub use comparison::{Comparison, PairSummary};
pub use ignore::IgnoreSet;
pub use options::SourceOptions;
pub use tree::{load_tree, SourceTree};

pub use twin_diff::{DiffOptions, DiffStats, FileDiff, FoldState};
pub use twin_match::{MatchKind, MatchedPair, SourceFile};
