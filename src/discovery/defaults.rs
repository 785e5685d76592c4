//! Built-in discovery sources for the Everything SDK.

use std::path::{Path, PathBuf};

use crate::config::SdkSettings;

use super::source::DiscoverySource;

/// Environment variable naming the SDK library explicitly.
pub const DEFAULT_SDK_ENV_VAR: &str = "EVERYTHING_SDK_PATH";

/// File name of the 64-bit SDK library.
pub const DEFAULT_LIBRARY_NAME: &str = "Everything64.dll";

/// Default install locations, in lookup order.
pub const KNOWN_INSTALL_PATHS: &[&str] = &[
    r"C:\Program Files\Everything\Everything64.dll",
    r"C:\Program Files (x86)\Everything\Everything64.dll",
    r"D:\dev\tools\Everything-SDK\dll\Everything64.dll",
];

/// Wildcard searches over alternate drives and install roots, in lookup order.
pub const SEARCH_PATTERNS: &[&str] = &[
    r"C:\Program Files\Everything\Everything*.dll",
    r"C:\Program Files (x86)\Everything\Everything*.dll",
    r"D:\*\Everything-SDK\dll\Everything*.dll",
    r"C:\*\Everything-SDK\dll\Everything*.dll",
];

/// Build the ordered source list for a working directory and settings.
///
/// Configured extras are appended to the end of their tier, so they never
/// outrank a built-in candidate.
pub fn default_sources(cwd: &Path, settings: &SdkSettings) -> Vec<DiscoverySource> {
    let mut sources = vec![DiscoverySource::EnvironmentVariable(
        settings.env_var.clone(),
    )];

    sources.extend(
        KNOWN_INSTALL_PATHS
            .iter()
            .map(|p| DiscoverySource::FixedPath(PathBuf::from(p))),
    );
    sources.push(DiscoverySource::FixedPath(
        cwd.join(&settings.library_name),
    ));
    sources.extend(
        settings
            .search_paths
            .iter()
            .map(|p| DiscoverySource::FixedPath(p.clone())),
    );

    sources.extend(
        SEARCH_PATTERNS
            .iter()
            .map(|p| DiscoverySource::GlobPattern((*p).to_string())),
    );
    sources.extend(
        settings
            .search_patterns
            .iter()
            .map(|p| DiscoverySource::GlobPattern(p.clone())),
    );

    sources
}
