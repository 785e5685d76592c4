//! Filesystem probes used by the locator.
//!
//! The locator never touches the filesystem directly; it asks a
//! [`FileSystemProbe`]. [`RealFileSystem`] answers from disk and
//! [`MemoryFileSystem`] answers from a fixed set of paths, which lets tests
//! enumerate the real Windows candidate list on any host.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Read-only filesystem queries.
pub trait FileSystemProbe {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Expand a wildcard pattern into existing paths.
    ///
    /// Matches are returned in lexical order. Malformed patterns expand to
    /// nothing.
    fn expand(&self, pattern: &str) -> Vec<PathBuf>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystemProbe for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn expand(&self, pattern: &str) -> Vec<PathBuf> {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!("Skipping invalid search pattern '{}': {}", pattern, e);
                return Vec::new();
            }
        };

        let mut matches: Vec<PathBuf> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!("Unreadable entry while searching '{}': {}", pattern, e);
                    None
                }
            })
            .collect();
        matches.sort();
        matches
    }
}

/// Probe over an in-memory set of paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path that exists.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Add a path that exists, in place.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.files.insert(path.into());
    }
}

impl FileSystemProbe for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn expand(&self, pattern: &str) -> Vec<PathBuf> {
        let Ok(pattern) = glob::Pattern::new(pattern) else {
            return Vec::new();
        };
        // BTreeSet iteration is already lexical.
        self.files
            .iter()
            .filter(|path| pattern.matches_path(path))
            .cloned()
            .collect()
    }
}
