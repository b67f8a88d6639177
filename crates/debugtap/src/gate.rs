//!
//! Process-wide enablement gate.
//!
//! Dispatch stays inert unless the gate is switched on, at most once, during
//! process initialization (see the `debugtap-enable` crate). It is never
//! switched back off, so readers need no synchronization beyond the
//! `OnceLock` publication that happens before request handling begins.
//!

use std::sync::OnceLock;

static ENABLED: OnceLock<()> = OnceLock::new();

/// Switch debug dispatch on for the remainder of the process lifetime.
///
/// Intended to be called exactly once at initialization, before any request
/// handling; later calls are no-ops.
pub fn enable() {
    let _ = ENABLED.set(());
}

/// Whether debug dispatch is live in this process.
#[must_use]
pub fn enabled() -> bool {
    ENABLED.get().is_some()
}
