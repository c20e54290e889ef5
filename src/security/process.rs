//! Process hardening
//!
//! Decoded private keys pass through this process in plain form. A core
//! dump taken while one is in memory would persist it to disk, so the CLI
//! disables core dumps before reading any key material.

use tracing::{debug, warn};

/// Harden the process before handling key material
///
/// Failures are logged, not returned.
pub fn harden_process(disable_core_dumps: bool) {
    if !disable_core_dumps {
        debug!("Core dumps left enabled by configuration");
        return;
    }

    #[cfg(unix)]
    {
        use nix::sys::resource::{setrlimit, Resource};

        if let Err(e) = setrlimit(Resource::RLIMIT_CORE, 0, 0) {
            warn!("Could not disable core dumps: {}", e);
        } else {
            debug!("Core dumps disabled");
        }
    }
}
