//! Cross-check against the configuration layer.

use std::path::PathBuf;

use crate::config::LibraryResolver;

use super::outcome::{FailureKind, StageOutcome};

/// Asks the configuration layer to resolve the library on its own.
///
/// The server resolves the library through configuration, not through
/// discovery, so this is the check that predicts whether the server will
/// start. Its answer may disagree with discovery.
pub struct ConfigOracle {
    resolver: Box<dyn LibraryResolver>,
}

impl ConfigOracle {
    /// Wrap a resolver.
    pub fn new(resolver: Box<dyn LibraryResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve, converting any error into a failed outcome.
    pub fn check(&self) -> (StageOutcome, Option<PathBuf>) {
        match self.resolver.resolve_library() {
            Ok(path) => (
                StageOutcome::passed(format!("Configuration resolved: {}", path.display())),
                Some(path),
            ),
            Err(e) => {
                tracing::debug!("Configuration resolver failed: {:?}", e);
                (
                    StageOutcome::failed(
                        FailureKind::ConfigInconsistency,
                        format!("Configuration check failed: {}", e),
                    ),
                    None,
                )
            }
        }
    }
}
