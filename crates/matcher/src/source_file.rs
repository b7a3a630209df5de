use crate::slug::{slug, Slug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A text file read from one of the compared trees
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceFile {
    /// Path of the file, relative to its tree root, `/`-separated
    pub path: String,

    /// The decoded text content
    pub content: String,

    /// Size of the file in bytes
    pub size: u64,
}

impl SourceFile {
    /// Create a file whose size is the byte length of its content
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            path: path.into(),
            size: content.len() as u64,
            content,
        }
    }

    /// Override the recorded size, e.g. with the on-disk length
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// The identity slug of this file's path
    pub fn slug(&self) -> Slug {
        slug(&self.path)
    }
}
