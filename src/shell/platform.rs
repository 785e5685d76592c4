//! Platform detection.

/// Variables whose presence marks a CI runner.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Whether the process runs under CI, where nobody can answer a prompt.
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var_os(name).is_some())
}

fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_runner_variable_means_ci() {
        assert!(is_ci_with(|name| name == "GITHUB_ACTIONS"));
        assert!(is_ci_with(|name| name == "JENKINS_URL"));
    }

    #[test]
    fn clean_environment_is_not_ci() {
        assert!(!is_ci_with(|_| false));
        assert!(!is_ci_with(|name| name == "PREFLIGHT_SDK_PATH"));
    }
}
