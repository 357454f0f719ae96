//! Environment variable handling for Kurage.
//!
//! Process-environment access goes through [`Environment`] so that
//! truthiness parsing and `.env` loading behave the same everywhere.
//! CI detection lives in the [`ci`] module.

use std::env;
use thiserror::Error;

pub mod ci;

pub use ci::{is_ci, is_ci_process_env, CI_MARKERS};

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required environment variable not set: {var}")]
    NotSet { var: String },

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Continuous integration markers
    pub const CI: &str = "CI";
    pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";
    pub const GITLAB_CI: &str = "GITLAB_CI";
    pub const CIRCLECI: &str = "CIRCLECI";
    pub const TRAVIS: &str = "TRAVIS";
    pub const BUILDKITE: &str = "BUILDKITE";
    pub const TF_BUILD: &str = "TF_BUILD";

    // Configuration
    pub const KURAGE_CONFIG_PATH: &str = "KURAGE_CONFIG_PATH";
    pub const KURAGE_LOG_LEVEL: &str = "KURAGE_LOG_LEVEL";

    // Development
    pub const NODE_ENV: &str = "NODE_ENV";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (), // Prevent construction outside module
}

impl Environment {
    /// Initialize environment from .env files.
    pub fn init() -> Result<Self, EnvError> {
        // Load .env files in order (later overrides earlier)
        let _ = dotenvy::from_filename(".env");
        let _ = dotenvy::from_filename(".env.local");

        // Load environment-specific file
        if let Ok(env) = env::var(vars::NODE_ENV) {
            let _ = dotenvy::from_filename(format!(".env.{}", env));
        }

        Ok(Self { _guard: () })
    }

    /// Get a required string variable.
    pub fn require(var: &str) -> Result<String, EnvError> {
        env::var(var).map_err(|_| EnvError::NotSet { var: var.to_string() })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }

    /// Get a variable with a default value.
    pub fn get_or(var: &str, default: &str) -> String {
        env::var(var).unwrap_or_else(|_| default.to_string())
    }

    /// Get a boolean variable.
    pub fn get_bool(var: &str) -> Option<bool> {
        env::var(var).ok().map(|v| is_truthy(&v))
    }
}

/// Truthiness rule shared by [`Environment::get_bool`] and CI detection.
///
/// Accepts `true`, `1`, and `yes` (case-insensitive); everything else is
/// falsy, so `CI=false` reads as "not in CI".
pub fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
