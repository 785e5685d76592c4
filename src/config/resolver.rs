//! The configuration layer's own library lookup.
//!
//! The server resolves the SDK library through its configuration layer at
//! runtime, not through [`LibraryLocator`](crate::discovery::LibraryLocator).
//! [`LibraryResolver`] is that boundary: one call, a path or an error. The
//! pipeline only consumes it through
//! [`ConfigOracle`](crate::checks::ConfigOracle), so any implementation
//! (including test doubles) can be substituted.

use std::path::PathBuf;

use crate::config::schema::SdkSettings;
use crate::discovery::defaults::KNOWN_INSTALL_PATHS;
use crate::error::{PreflightError, Result};

/// Resolves the path to the required shared library.
pub trait LibraryResolver {
    /// Resolve the library path, or fail with a descriptive error.
    fn resolve_library(&self) -> Result<PathBuf>;
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Resolver backed by the `sdk` section of the configuration.
///
/// Lookup order is the environment variable, then the configured
/// `search_paths`, then the known install locations. Unlike the locator it
/// does no wildcard searching.
pub struct SdkConfigResolver {
    settings: SdkSettings,
    env: EnvLookup,
}

impl SdkConfigResolver {
    /// Create a resolver reading the real process environment.
    pub fn new(settings: SdkSettings) -> Self {
        Self::with_env(settings, |key: &str| std::env::var(key).ok())
    }

    /// Create a resolver with a custom env var lookup function.
    pub fn with_env<F>(settings: SdkSettings, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        Self {
            settings,
            env: Box::new(env),
        }
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(value) = (self.env)(&self.settings.env_var).filter(|v| !v.is_empty()) {
            candidates.push(PathBuf::from(value));
        }
        candidates.extend(self.settings.search_paths.iter().cloned());
        candidates.extend(KNOWN_INSTALL_PATHS.iter().map(PathBuf::from));
        candidates
    }
}

impl LibraryResolver for SdkConfigResolver {
    fn resolve_library(&self) -> Result<PathBuf> {
        let candidates = self.candidates();
        match candidates.iter().find(|path| path.is_file()) {
            Some(found) => Ok(found.clone()),
            None => Err(PreflightError::LibraryNotFound {
                checked: candidates,
            }),
        }
    }
}
