#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paths skipped by default, matched against every path component
const DEFAULT_IGNORE: &[&str] = &[".git", "node_modules", ".DS_Store"];

/// Extensions treated as binary by default
const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd", "pdf", "zip", "gz", "tgz",
    "bz2", "xz", "tar", "7z", "rar", "jar", "class", "exe", "dll", "so", "dylib", "o", "a", "lib",
    "bin", "wasm", "pyc", "woff", "woff2", "ttf", "otf", "eot", "mp3", "mp4", "wav", "ogg",
    "flac", "mov", "avi", "mkv",
];

/// Options controlling which files of a tree are loaded
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SourceOptions {
    /// Glob patterns of paths to skip.
    ///
    /// A pattern without `/` matches any single path component; one with
    /// `/` matches from the tree root. `*` and `?` stay within a component,
    /// `**` crosses them.
    pub ignore: Vec<String>,

    /// Extensions of files never read, compared case-insensitively
    pub binary_extensions: Vec<String>,

    /// Files larger than this many bytes are skipped
    pub max_file_size: Option<u64>,

    /// Whether to follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|p| p.to_string()).collect(),
            binary_extensions: DEFAULT_BINARY_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            max_file_size: None,
            follow_links: false,
        }
    }
}

impl SourceOptions {
    /// Add an ignore pattern
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// Replace the ignore patterns
    pub fn ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Add a binary extension, without the leading dot
    pub fn binary_extension(mut self, extension: impl Into<String>) -> Self {
        self.binary_extensions.push(extension.into());
        self
    }

    /// Set the size ceiling
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    /// Follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Whether a path has one of the binary extensions
    pub fn is_binary(&self, path: &str) -> bool {
        let name = path.rsplit('/').next().unwrap_or(path);
        match name.rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() => self
                .binary_extensions
                .iter()
                .any(|e| e.eq_ignore_ascii_case(extension)),
            _ => false,
        }
    }
}
