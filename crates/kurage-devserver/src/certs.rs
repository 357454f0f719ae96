//! Local development certificate loading.
//!
//! Looks for a fixed key/certificate pair under `certs/` in the project
//! directory. Loading is fail-open: every failure collapses to `None` so
//! the dev server simply comes up without TLS. The reason is logged at
//! debug level and never surfaced.

use crate::types::TlsBundle;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Project-relative path of the private key file.
pub const LOCAL_KEY_FILE: &str = "certs/localhost-key.pem";

/// Project-relative path of the certificate file.
pub const LOCAL_CERT_FILE: &str = "certs/localhost.pem";

/// Why a certificate pair could not be produced. Logging detail only;
/// callers observe `None` regardless of the variant.
#[derive(Debug, Error)]
enum CertError {
    #[error("private key file not found: {0}")]
    KeyNotFound(PathBuf),

    #[error("certificate file not found: {0}")]
    CertNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the local key/certificate pair, if available.
///
/// Both files must exist before either is read; a missing half never
/// leaves a partially-read pair behind. Returns `None` on any failure.
pub fn load_local_certificate(project_dir: &Path) -> Option<TlsBundle> {
    match try_load(project_dir) {
        Ok(bundle) => {
            debug!(
                key = LOCAL_KEY_FILE,
                cert = LOCAL_CERT_FILE,
                "Loaded local dev certificates"
            );
            Some(bundle)
        }
        Err(reason) => {
            debug!(%reason, "Local dev certificates unavailable, falling back to plain HTTP");
            None
        }
    }
}

fn try_load(project_dir: &Path) -> Result<TlsBundle, CertError> {
    let key_path = project_dir.join(LOCAL_KEY_FILE);
    let cert_path = project_dir.join(LOCAL_CERT_FILE);

    // Existence check first, so a missing half costs no reads
    if !key_path.exists() {
        return Err(CertError::KeyNotFound(key_path));
    }
    if !cert_path.exists() {
        return Err(CertError::CertNotFound(cert_path));
    }

    let key = read_bytes(&key_path)?;
    let cert = read_bytes(&cert_path)?;

    Ok(TlsBundle::new(key, cert))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, CertError> {
    std::fs::read(path).map_err(|source| CertError::Read {
        path: path.to_path_buf(),
        source,
    })
}
