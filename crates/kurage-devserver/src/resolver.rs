//! Configuration resolution.
//!
//! [`resolve_config`] is the boundary: it probes the environment map, the
//! defaults file, and the certificate files, then delegates every
//! decision to the pure [`resolve_with`]. The boundary never fails
//! outward; the worst outcome is a plain-HTTP configuration.

use crate::certs::load_local_certificate;
use crate::defaults::{DefaultsLoader, DevServerDefaults};
use crate::types::{Mode, ServerConfig, TlsBundle};
use kurage_common_env::is_ci;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Resolve the dev-server configuration for one invocation.
///
/// `env` is consulted only for CI markers. Certificates are probed only
/// when the mode and environment allow TLS at all, so a `build` run or a
/// CI run performs no certificate reads.
pub fn resolve_config(
    mode: Mode,
    env: &HashMap<String, String>,
    project_dir: &Path,
) -> ServerConfig {
    let defaults = match DefaultsLoader::new(project_dir).load() {
        Ok(defaults) => defaults,
        Err(reason) => {
            warn!(%reason, "Ignoring project dev-server defaults, using built-ins");
            DevServerDefaults::default()
        }
    };

    let in_ci = is_ci(env);

    let cert = if mode == Mode::Serve && !in_ci {
        load_local_certificate(project_dir)
    } else {
        None
    };

    resolve_with(mode, in_ci, cert, &defaults)
}

/// Pure core of the resolution.
///
/// Total over its inputs: no environment access, no filesystem access,
/// no failure path. TLS is attached only when serving outside CI and a
/// complete bundle was provided.
pub fn resolve_with(
    mode: Mode,
    in_ci: bool,
    cert: Option<TlsBundle>,
    defaults: &DevServerDefaults,
) -> ServerConfig {
    let tls = match mode {
        Mode::Serve if !in_ci => cert,
        _ => None,
    };

    ServerConfig {
        host: Some(defaults.host.clone()),
        port: Some(defaults.port),
        tls,
        cors: Some(defaults.cors),
        headers: defaults.headers.clone(),
    }
}
