//! Continuous-integration environment detection.
//!
//! CI runners advertise themselves through well-known environment
//! variables. Detection is exposed in two shapes: a pure function over an
//! injected map, and a convenience reading the real process environment.
//! Downstream decision logic should take the boolean, not re-probe.

use crate::is_truthy;
use std::collections::HashMap;
use std::env;

/// Environment variables recognized as CI markers.
///
/// A marker only counts when its value is truthy, so `CI=false` is an
/// explicit opt-out rather than a detection hit.
pub const CI_MARKERS: &[&str] = &[
    crate::vars::CI,
    crate::vars::GITHUB_ACTIONS,
    crate::vars::GITLAB_CI,
    crate::vars::CIRCLECI,
    crate::vars::TRAVIS,
    crate::vars::BUILDKITE,
    crate::vars::TF_BUILD,
];

/// Check an environment map for a truthy CI marker.
pub fn is_ci(env: &HashMap<String, String>) -> bool {
    CI_MARKERS
        .iter()
        .any(|marker| env.get(*marker).is_some_and(|v| is_truthy(v)))
}

/// Check the process environment for a truthy CI marker.
pub fn is_ci_process_env() -> bool {
    CI_MARKERS
        .iter()
        .any(|marker| env::var(marker).is_ok_and(|v| is_truthy(&v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_environment_is_not_ci() {
        assert!(!is_ci(&HashMap::new()));
    }

    #[test]
    fn test_truthy_markers_detected() {
        assert!(is_ci(&env_of(&[("CI", "true")])));
        assert!(is_ci(&env_of(&[("CI", "1")])));
        assert!(is_ci(&env_of(&[("GITHUB_ACTIONS", "true")])));
        assert!(is_ci(&env_of(&[("BUILDKITE", "yes")])));
    }

    #[test]
    fn test_falsy_markers_ignored() {
        assert!(!is_ci(&env_of(&[("CI", "false")])));
        assert!(!is_ci(&env_of(&[("CI", "0")])));
        assert!(!is_ci(&env_of(&[("GITHUB_ACTIONS", "")])));
    }

    #[test]
    fn test_unrelated_variables_ignored() {
        let env = env_of(&[("HOME", "/home/dev"), ("EDITOR", "vim")]);
        assert!(!is_ci(&env));
    }

    #[test]
    fn test_any_single_marker_suffices() {
        let env = env_of(&[("CI", "false"), ("GITLAB_CI", "true")]);
        assert!(is_ci(&env));
    }

    #[test]
    fn test_all_markers_are_recognized() {
        for marker in CI_MARKERS {
            assert!(
                is_ci(&env_of(&[(marker, "true")])),
                "marker {} not detected",
                marker
            );
        }
    }
}
