//! Dev-server configuration resolution for Kurage.
//!
//! Decides, at configuration-evaluation time, whether the local dev
//! server gets a TLS key/certificate pair: only when serving (not
//! building), only outside CI, and only when both PEM files under
//! `certs/` are readable. Every failure degrades silently to plain HTTP.

pub mod certs;
pub mod defaults;
pub mod resolver;
pub mod types;

pub use certs::{load_local_certificate, LOCAL_CERT_FILE, LOCAL_KEY_FILE};
pub use defaults::{DefaultsError, DefaultsLoader, DevServerDefaults, DEFAULTS_FILE};
pub use resolver::{resolve_config, resolve_with};
pub use types::{Mode, ServerConfig, TlsBundle};
