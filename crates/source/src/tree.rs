use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use twin_match::SourceFile;
use walkdir::WalkDir;

use crate::ignore::IgnoreSet;
use crate::options::SourceOptions;

/// A directory whose text files can be loaded for comparison
#[derive(Debug, Clone)]
pub struct SourceTree {
    /// The tree's root directory
    root: PathBuf,

    /// What to skip while loading
    options: SourceOptions,

    /// Compiled form of `options.ignore`
    ignore: IgnoreSet,
}

impl SourceTree {
    /// Open a tree rooted at the given directory
    pub fn open<P: AsRef<Path>>(root: P, options: SourceOptions) -> Result<Self> {
        let root = root.as_ref();
        let metadata = fs::metadata(root)
            .with_context(|| format!("Failed to open source tree at {}", root.display()))?;
        if !metadata.is_dir() {
            bail!("Source tree root is not a directory: {}", root.display());
        }

        let ignore = IgnoreSet::new(&options.ignore)?;

        Ok(Self {
            root: root.to_path_buf(),
            options,
            ignore,
        })
    }

    /// Get the tree's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative `/`-separated paths of the files that would be loaded,
    /// after ignore patterns and binary extensions are applied
    pub fn paths(&self) -> Vec<String> {
        let walker = WalkDir::new(&self.root)
            .follow_links(self.options.follow_links)
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || self
                        .relative_path(entry.path())
                        .map_or(true, |rel| !self.ignore.is_ignored(&rel))
            });

        let mut paths: Vec<String> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_path(entry.path()))
            .filter(|rel| {
                let binary = self.options.is_binary(rel);
                if binary {
                    debug!("Skipping binary file {}", rel);
                }
                !binary
            })
            .collect();

        paths.sort();
        paths
    }

    /// Read every candidate file in parallel.
    ///
    /// Files that cannot be read are logged and left out; content that is
    /// not valid UTF-8 is decoded lossily. The result is sorted by path.
    pub fn load(&self) -> Vec<SourceFile> {
        let paths = self.paths();

        let files: Vec<SourceFile> = paths
            .par_iter()
            .filter_map(|rel| self.read_file(rel))
            .collect();

        info!(
            "Loaded {} of {} files from {}",
            files.len(),
            paths.len(),
            self.root.display()
        );

        files
    }

    /// Read one file relative to the root
    fn read_file(&self, rel: &str) -> Option<SourceFile> {
        let full = self.root.join(rel);

        if let Some(limit) = self.options.max_file_size {
            match fs::metadata(&full) {
                Ok(metadata) if metadata.len() > limit => {
                    warn!(
                        "Skipping {}: {} bytes exceeds the {} byte limit",
                        rel,
                        metadata.len(),
                        limit
                    );
                    return None;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("Skipping {}: {}", rel, err);
                    return None;
                }
            }
        }

        let bytes = match fs::read(&full) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Skipping {}: {}", rel, err);
                return None;
            }
        };

        let size = bytes.len() as u64;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                debug!("{} is not valid UTF-8, decoding lossily", rel);
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        Some(SourceFile::new(rel, content).with_size(size))
    }

    /// The `/`-separated path of `path` relative to the root
    fn relative_path(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<_> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }
}

/// Open a tree and load its files in one step
pub fn load_tree<P: AsRef<Path>>(root: P, options: &SourceOptions) -> Result<Vec<SourceFile>> {
    Ok(SourceTree::open(root, options.clone())?.load())
}
