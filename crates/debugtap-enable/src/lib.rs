//!
//! Load-time enablement hook for `debugtap`.
//!
//! Linking this crate into a binary switches the debug gate on at process
//! start, after checking the deployment environment. Production builds must
//! not depend on it; without it the gate defaults to off and every dispatch
//! call falls through to its production path.
//!
//! The environment check is a redundant runtime guard on top of that build
//! separation, and it is fatal on failure: a binary that carries this crate
//! but cannot prove it is running outside production must not start.
//!

use thiserror::Error as ThisError;

/// Environment variable consulted before the gate is switched on.
pub const ENV_MARKER: &str = "ENVIRONMENT";

const PRODUCTION: &str = "production";

///
/// EnableError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EnableError {
    #[error("ENVIRONMENT variable not set")]
    MarkerNotSet,

    #[error("debug build deployed to production")]
    ProductionEnvironment,
}

/// Decide whether the gate may be switched on under the given marker value.
pub fn check_environment(marker: Option<&str>) -> Result<(), EnableError> {
    match marker {
        None => Err(EnableError::MarkerNotSet),
        Some(v) if v.eq_ignore_ascii_case(PRODUCTION) => Err(EnableError::ProductionEnvironment),
        Some(_) => Ok(()),
    }
}

// Runs before main; skipped under cfg(test) so this crate's own unit tests
// do not require the marker to be set.
#[cfg(not(test))]
#[ctor::ctor(unsafe)]
fn enable_at_load() {
    let marker = std::env::var(ENV_MARKER).ok();

    match check_environment(marker.as_deref()) {
        Ok(()) => debugtap::gate::enable(),
        Err(err) => panic!("{err}"),
    }
}

///
/// TESTS
///
