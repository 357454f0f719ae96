//! Project-level dev-server defaults.
//!
//! The host/port/cors/headers baseline comes from `.kurage/devserver.yaml`
//! when present, with built-in values filling anything the file omits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Relative path of the defaults file inside a project.
pub const DEFAULTS_FILE: &str = ".kurage/devserver.yaml";

/// Defaults-loading errors.
#[derive(Debug, Error)]
pub enum DefaultsError {
    #[error("failed to read defaults: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },
}

/// Fixed dev-server defaults defined by the surrounding project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerDefaults {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Permissive cross-origin flag.
    pub cors: bool,
    /// Extra response headers.
    pub headers: HashMap<String, String>,
}

impl Default for DevServerDefaults {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5173,
            cors: true,
            headers: HashMap::new(),
        }
    }
}

/// Defaults loader for a project directory.
pub struct DefaultsLoader {
    base_path: PathBuf,
}

impl DefaultsLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Load defaults from `.kurage/devserver.yaml`.
    ///
    /// A missing file yields the built-in defaults; a present but
    /// malformed file is an error for direct callers (the resolver
    /// downgrades it to a warning).
    pub fn load(&self) -> Result<DevServerDefaults, DefaultsError> {
        let path = self.base_path.join(DEFAULTS_FILE);

        if !path.exists() {
            return Ok(DevServerDefaults::default());
        }

        let contents = std::fs::read_to_string(&path)?;

        let defaults: DevServerDefaults =
            serde_yaml::from_str(&contents).map_err(|e| DefaultsError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&defaults)?;
        Ok(defaults)
    }

    fn validate(&self, defaults: &DevServerDefaults) -> Result<(), DefaultsError> {
        if defaults.host.is_empty() {
            return Err(DefaultsError::ValidationError {
                message: "host must not be empty".to_string(),
            });
        }

        if defaults.headers.keys().any(|name| name.is_empty()) {
            return Err(DefaultsError::ValidationError {
                message: "header names must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let loader = DefaultsLoader::new(dir.path());
        let defaults = loader.load().unwrap();
        assert_eq!(defaults, DevServerDefaults::default());
        assert_eq!(defaults.host, "localhost");
        assert_eq!(defaults.port, 5173);
        assert!(defaults.cors);
    }

    #[test]
    fn test_partial_file_merges_with_builtins() {
        let dir = tempdir().unwrap();
        let kurage_dir = dir.path().join(".kurage");
        fs::create_dir_all(&kurage_dir).unwrap();

        fs::write(
            kurage_dir.join("devserver.yaml"),
            "port: 8443\nheaders:\n  X-Frame-Options: DENY\n",
        )
        .unwrap();

        let defaults = DefaultsLoader::new(dir.path()).load().unwrap();
        assert_eq!(defaults.port, 8443);
        assert_eq!(
            defaults.headers.get("X-Frame-Options"),
            Some(&"DENY".to_string())
        );
        // Unspecified values keep built-ins
        assert_eq!(defaults.host, "localhost");
        assert!(defaults.cors);
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let dir = tempdir().unwrap();
        let kurage_dir = dir.path().join(".kurage");
        fs::create_dir_all(&kurage_dir).unwrap();
        fs::write(kurage_dir.join("devserver.yaml"), "port: [unclosed\n").unwrap();

        let result = DefaultsLoader::new(dir.path()).load();
        match result.unwrap_err() {
            DefaultsError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_host_rejected() {
        let dir = tempdir().unwrap();
        let kurage_dir = dir.path().join(".kurage");
        fs::create_dir_all(&kurage_dir).unwrap();
        fs::write(kurage_dir.join("devserver.yaml"), "host: \"\"\n").unwrap();

        let result = DefaultsLoader::new(dir.path()).load();
        match result.unwrap_err() {
            DefaultsError::ValidationError { message } => assert!(message.contains("host")),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_serialize_to_yaml() {
        let yaml = serde_yaml::to_string(&DevServerDefaults::default()).unwrap();
        assert!(yaml.contains("host: localhost"));
        assert!(yaml.contains("port: 5173"));
        assert!(yaml.contains("cors: true"));
    }
}
