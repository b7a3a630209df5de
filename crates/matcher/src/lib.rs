// File identity for Twin
// Derives filename slugs and pairs two file collections by slug

mod matcher;
mod slug;
mod source_file;

pub use matcher::{match_files, match_indices, MatchEntry, MatchKind, MatchedPair};
pub use slug::{slug, Slug};
pub use source_file::SourceFile;
