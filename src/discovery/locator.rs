//! Priority-ordered library discovery.

use std::path::{Path, PathBuf};

use crate::config::SdkSettings;

use super::defaults::default_sources;
use super::probe::{FileSystemProbe, RealFileSystem};
use super::source::{DiscoveryResult, DiscoverySource, SourceKind};

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Finds the SDK library across an ordered list of sources.
///
/// Tiers are evaluated environment variable first, then fixed paths, then
/// wildcard patterns, whatever order the sources were supplied in. Within
/// a tier the supplied order is kept. An environment variable that is
/// unset, empty, or points at nothing is skipped silently.
pub struct LibraryLocator {
    sources: Vec<DiscoverySource>,
    fs: Box<dyn FileSystemProbe>,
    env: EnvLookup,
}

impl LibraryLocator {
    /// Create a locator over the real filesystem and process environment.
    pub fn new(sources: Vec<DiscoverySource>) -> Self {
        Self::with_probes(sources, RealFileSystem, |key: &str| {
            std::env::var(key).ok()
        })
    }

    /// Create a locator for the built-in sources plus configured extras.
    pub fn from_settings(cwd: &Path, settings: &SdkSettings) -> Self {
        Self::new(default_sources(cwd, settings))
    }

    /// Create a locator with custom filesystem and env var lookups.
    ///
    /// This allows testing without modifying the real filesystem or
    /// environment.
    pub fn with_probes<P, F>(sources: Vec<DiscoverySource>, fs: P, env: F) -> Self
    where
        P: FileSystemProbe + 'static,
        F: Fn(&str) -> Option<String> + 'static,
    {
        Self {
            sources,
            fs: Box::new(fs),
            env: Box::new(env),
        }
    }

    /// The configured sources, in the order they were supplied.
    pub fn sources(&self) -> &[DiscoverySource] {
        &self.sources
    }

    /// Return the first existing library, or `None` if every source misses.
    pub fn locate(&self) -> Option<DiscoveryResult> {
        for tier in SourceKind::TIERS {
            for source in self.sources.iter().filter(|s| s.kind() == tier) {
                if let Some(path) = self.probe(source) {
                    tracing::debug!("Library found via {}: {}", tier, path.display());
                    return Some(DiscoveryResult {
                        path,
                        source: source.clone(),
                    });
                }
            }
        }

        tracing::debug!("No library found in {} sources", self.sources.len());
        None
    }

    fn probe(&self, source: &DiscoverySource) -> Option<PathBuf> {
        match source {
            DiscoverySource::EnvironmentVariable(name) => {
                let value = (self.env)(name).filter(|v| !v.is_empty())?;
                let path = PathBuf::from(value);
                if self.fs.exists(&path) {
                    Some(path)
                } else {
                    tracing::debug!("${} points at missing {}", name, path.display());
                    None
                }
            }
            DiscoverySource::FixedPath(path) => {
                tracing::debug!("Checking {}", path.display());
                self.fs.exists(path).then(|| path.clone())
            }
            DiscoverySource::GlobPattern(pattern) => {
                tracing::debug!("Searching {}", pattern);
                self.fs.expand(pattern).into_iter().next()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::defaults::{KNOWN_INSTALL_PATHS, SEARCH_PATTERNS};
    use crate::discovery::MemoryFileSystem;
    use std::collections::HashMap;

    const ENV: &str = "EVERYTHING_SDK_PATH";

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + 'static {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn sources() -> Vec<DiscoverySource> {
        vec![
            DiscoverySource::EnvironmentVariable(ENV.into()),
            DiscoverySource::FixedPath("/fixed/one.dll".into()),
            DiscoverySource::FixedPath("/fixed/two.dll".into()),
            DiscoverySource::GlobPattern("/glob/a/*.dll".into()),
            DiscoverySource::GlobPattern("/glob/b/*.dll".into()),
        ]
    }

    #[test]
    fn env_var_beats_existing_fixed_path() {
        let fs = MemoryFileSystem::new()
            .with_file("/env/lib.dll")
            .with_file("/fixed/one.dll");
        let locator = LibraryLocator::with_probes(sources(), fs, env_of(&[(ENV, "/env/lib.dll")]));

        let found = locator.locate().unwrap();
        assert_eq!(found.kind(), SourceKind::EnvironmentVariable);
        assert_eq!(found.path, PathBuf::from("/env/lib.dll"));
    }

    #[test]
    fn env_var_to_missing_path_falls_through() {
        let fs = MemoryFileSystem::new().with_file("/fixed/two.dll");
        let locator =
            LibraryLocator::with_probes(sources(), fs, env_of(&[(ENV, "/nowhere/lib.dll")]));

        let found = locator.locate().unwrap();
        assert_eq!(found.kind(), SourceKind::FixedPath);
        assert_eq!(found.path, PathBuf::from("/fixed/two.dll"));
    }

    #[test]
    fn empty_env_var_is_absent() {
        let fs = MemoryFileSystem::new()
            .with_file("")
            .with_file("/fixed/one.dll");
        let locator = LibraryLocator::with_probes(sources(), fs, env_of(&[(ENV, "")]));

        assert_eq!(locator.locate().unwrap().kind(), SourceKind::FixedPath);
    }

    #[test]
    fn lowest_index_fixed_path_beats_globs() {
        let fs = MemoryFileSystem::new()
            .with_file("/fixed/two.dll")
            .with_file("/fixed/one.dll")
            .with_file("/glob/a/Everything64.dll");
        let locator = LibraryLocator::with_probes(sources(), fs, env_of(&[]));

        let found = locator.locate().unwrap();
        assert_eq!(found.path, PathBuf::from("/fixed/one.dll"));
        assert_eq!(
            found.source,
            DiscoverySource::FixedPath("/fixed/one.dll".into())
        );
    }

    #[test]
    fn first_nonempty_pattern_wins_with_lexical_tie_break() {
        let fs = MemoryFileSystem::new()
            .with_file("/glob/b/a.dll")
            .with_file("/glob/a/zz.dll")
            .with_file("/glob/a/mm.dll");
        let locator = LibraryLocator::with_probes(sources(), fs, env_of(&[]));

        let found = locator.locate().unwrap();
        assert_eq!(found.kind(), SourceKind::GlobPattern);
        assert_eq!(found.path, PathBuf::from("/glob/a/mm.dll"));
    }

    #[test]
    fn later_pattern_used_when_earlier_is_empty() {
        let fs = MemoryFileSystem::new().with_file("/glob/b/lib.dll");
        let locator = LibraryLocator::with_probes(sources(), fs, env_of(&[]));

        let found = locator.locate().unwrap();
        assert_eq!(
            found.source,
            DiscoverySource::GlobPattern("/glob/b/*.dll".into())
        );
    }

    #[test]
    fn nothing_matches_returns_none() {
        let fs = MemoryFileSystem::new().with_file("/unrelated/file.txt");
        let locator =
            LibraryLocator::with_probes(sources(), fs, env_of(&[(ENV, "/missing.dll")]));
        assert!(locator.locate().is_none());
    }

    #[test]
    fn tiers_apply_even_when_sources_are_shuffled() {
        let shuffled = vec![
            DiscoverySource::GlobPattern("/glob/a/*.dll".into()),
            DiscoverySource::FixedPath("/fixed/two.dll".into()),
            DiscoverySource::EnvironmentVariable(ENV.into()),
            DiscoverySource::FixedPath("/fixed/one.dll".into()),
        ];
        let fs = MemoryFileSystem::new()
            .with_file("/glob/a/lib.dll")
            .with_file("/fixed/one.dll")
            .with_file("/fixed/two.dll");
        let locator = LibraryLocator::with_probes(shuffled, fs, env_of(&[]));

        // Supplied order is kept within the fixed tier.
        assert_eq!(
            locator.locate().unwrap().path,
            PathBuf::from("/fixed/two.dll")
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let fs = MemoryFileSystem::new()
            .with_file("/glob/a/x.dll")
            .with_file("/glob/a/y.dll");
        let locator = LibraryLocator::with_probes(sources(), fs, env_of(&[]));
        assert_eq!(locator.locate(), locator.locate());
    }

    #[test]
    fn builtin_windows_candidates_resolve_in_memory() {
        let settings = SdkSettings::default();
        let fs = MemoryFileSystem::new()
            .with_file(KNOWN_INSTALL_PATHS[1])
            .with_file(r"D:\tools\Everything-SDK\dll\Everything64.dll");
        let locator = LibraryLocator::with_probes(
            default_sources(Path::new("/work"), &settings),
            fs,
            env_of(&[]),
        );

        let found = locator.locate().unwrap();
        assert_eq!(found.path, PathBuf::from(KNOWN_INSTALL_PATHS[1]));
        assert_eq!(found.kind(), SourceKind::FixedPath);
    }

    #[test]
    fn builtin_drive_pattern_matches_alternate_root() {
        let settings = SdkSettings::default();
        let fs = MemoryFileSystem::new().with_file(r"D:\tools\Everything-SDK\dll\Everything64.dll");
        let locator = LibraryLocator::with_probes(
            default_sources(Path::new("/work"), &settings),
            fs,
            env_of(&[]),
        );

        let found = locator.locate().unwrap();
        assert_eq!(
            found.source,
            DiscoverySource::GlobPattern(SEARCH_PATTERNS[2].into())
        );
    }

    #[test]
    fn real_filesystem_working_directory_candidate() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("Everything64.dll"), b"").unwrap();

        let locator = LibraryLocator::with_probes(
            default_sources(temp.path(), &SdkSettings::default()),
            RealFileSystem,
            env_of(&[]),
        );

        let found = locator.locate().unwrap();
        assert_eq!(found.path, temp.path().join("Everything64.dll"));
    }
}
