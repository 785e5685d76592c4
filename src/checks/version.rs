//! Interpreter version floor.

use super::outcome::{FailureKind, StageOutcome};
use super::runtime::{RuntimeProbe, RuntimeVersion};

/// Oldest supported interpreter version as `(major, minor)`.
pub const MIN_VERSION: (u32, u32) = (3, 7);

/// Gate passing iff the interpreter is at least [`MIN_VERSION`].
pub struct VersionGate;

impl VersionGate {
    /// Whether `version` meets the floor. Patch level is ignored.
    pub fn meets_minimum(version: RuntimeVersion) -> bool {
        let (min_major, min_minor) = MIN_VERSION;
        version.major > min_major || (version.major == min_major && version.minor >= min_minor)
    }

    /// Judge an already-known version.
    pub fn evaluate(version: RuntimeVersion) -> StageOutcome {
        if Self::meets_minimum(version) {
            StageOutcome::passed(format!("Python version: {}", version))
        } else {
            StageOutcome::failed(
                FailureKind::EnvironmentUnmet,
                format!(
                    "Python version too old: {}.{} (requires {}.{} or newer)",
                    version.major, version.minor, MIN_VERSION.0, MIN_VERSION.1
                ),
            )
        }
    }

    /// Ask the probe for its version and judge it.
    pub fn check(probe: &dyn RuntimeProbe) -> StageOutcome {
        match probe.version() {
            Ok(version) => Self::evaluate(version),
            Err(e) => StageOutcome::failed(FailureKind::EnvironmentUnmet, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PreflightError, Result};

    struct FixedVersion(Option<RuntimeVersion>);

    impl RuntimeProbe for FixedVersion {
        fn name(&self) -> &str {
            "python3"
        }

        fn version(&self) -> Result<RuntimeVersion> {
            self.0.ok_or_else(|| PreflightError::RuntimeProbeFailed {
                interpreter: "python3".into(),
                message: "not installed".into(),
            })
        }

        fn has_facility(&self, _module: &str) -> bool {
            true
        }
    }

    #[test]
    fn boundary_3_7_0_passes() {
        assert!(VersionGate::evaluate(RuntimeVersion::new(3, 7, 0)).succeeded());
    }

    #[test]
    fn boundary_3_6_99_fails() {
        let outcome = VersionGate::evaluate(RuntimeVersion::new(3, 6, 99));
        assert!(!outcome.succeeded());
        assert!(outcome.halt_pipeline());
        assert_eq!(outcome.failure(), Some(FailureKind::EnvironmentUnmet));
        assert!(outcome.detail().contains("3.6"));
    }

    #[test]
    fn matches_rule_over_a_grid() {
        for major in 0..=5 {
            for minor in 0..=12 {
                let expected = major > 3 || (major == 3 && minor >= 7);
                let version = RuntimeVersion::new(major, minor, 0);
                assert_eq!(
                    VersionGate::meets_minimum(version),
                    expected,
                    "version {}",
                    version
                );
            }
        }
    }

    #[test]
    fn newer_major_passes_with_low_minor() {
        assert!(VersionGate::meets_minimum(RuntimeVersion::new(4, 0, 0)));
    }

    #[test]
    fn passing_detail_names_version() {
        let outcome = VersionGate::evaluate(RuntimeVersion::new(3, 11, 4));
        assert_eq!(outcome.detail(), "Python version: 3.11.4");
    }

    #[test]
    fn probe_failure_is_environment_unmet() {
        let outcome = VersionGate::check(&FixedVersion(None));
        assert_eq!(outcome.failure(), Some(FailureKind::EnvironmentUnmet));
        assert!(outcome.detail().contains("not installed"));
    }

    #[test]
    fn check_uses_probe_version() {
        let outcome = VersionGate::check(&FixedVersion(Some(RuntimeVersion::new(3, 12, 1))));
        assert!(outcome.succeeded());
    }
}
