//! Discovery source and result types.

use std::fmt;
use std::path::PathBuf;

/// One place the library may be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoverySource {
    /// Environment variable whose value is a path to the library.
    EnvironmentVariable(String),
    /// A single candidate path.
    FixedPath(PathBuf),
    /// A wildcard pattern expanded against the filesystem.
    GlobPattern(String),
}

impl DiscoverySource {
    /// The tier this source belongs to.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::EnvironmentVariable(_) => SourceKind::EnvironmentVariable,
            Self::FixedPath(_) => SourceKind::FixedPath,
            Self::GlobPattern(_) => SourceKind::GlobPattern,
        }
    }
}

impl fmt::Display for DiscoverySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentVariable(name) => write!(f, "${}", name),
            Self::FixedPath(path) => write!(f, "{}", path.display()),
            Self::GlobPattern(pattern) => write!(f, "{}", pattern),
        }
    }
}

/// Discovery tier, ordered by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    EnvironmentVariable,
    FixedPath,
    GlobPattern,
}

impl SourceKind {
    /// All tiers, highest precedence first.
    pub const TIERS: [SourceKind; 3] = [
        SourceKind::EnvironmentVariable,
        SourceKind::FixedPath,
        SourceKind::GlobPattern,
    ];

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EnvironmentVariable => "environment variable",
            Self::FixedPath => "known location",
            Self::GlobPattern => "search",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A located library and the source that produced it.
///
/// The path existed when it was checked; nothing guarantees it still does
/// by the time a consumer opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryResult {
    /// Path to the library.
    pub path: PathBuf,
    /// Source entry that matched.
    pub source: DiscoverySource,
}

impl DiscoveryResult {
    /// Tier of the matching source.
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }
}
