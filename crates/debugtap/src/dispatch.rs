//!
//! Conditional dispatch at named injection points.
//!
//! Three shapes cover the three kinds of override a call site needs: value
//! substitution ([`wrap`]), a pure side effect ([`tap`]), and full dual-path
//! replacement ([`custom`]). All three fall through to the production path
//! whenever the gate is off or no command matches, run the caller-supplied
//! closures synchronously, and pass their errors through unchanged so callers
//! can still match on the original value. None of them block, retry, or add
//! concurrency of their own.
//!

use crate::{command::Command, context::Context, error::Error, gate, trace};
use std::any;

/// Return the debug payload attached under `id` instead of running
/// `production`.
///
/// `production` runs, and its result is returned unchanged, when the gate is
/// off or no command matches. When the gate is on and a command matches,
/// `production` never runs: the payload is returned if it downcasts to `T`,
/// otherwise [`Error::PayloadType`] is returned. A wrongly-typed override
/// still suppresses the production path, so a broken debug setup surfaces as
/// an error rather than silently running real logic.
pub fn wrap<T, E, F>(ctx: &Context, id: &str, production: F) -> Result<T, E>
where
    T: Clone + 'static,
    E: From<Error>,
    F: FnOnce() -> Result<T, E>,
{
    if !gate::enabled() {
        return production();
    }

    let Ok(command) = ctx.find(id) else {
        return production();
    };

    match command.payload().downcast_ref::<T>() {
        Some(payload) => {
            trace!(Trace, "{id}: payload substituted");
            Ok(payload.clone())
        }
        None => {
            let err = Error::PayloadType {
                actual: command.payload().type_name(),
                expected: any::type_name::<T>(),
            };
            trace!(Warn, "{id}: {err}");

            Err(err.into())
        }
    }
}

/// Run `handler` against the command attached under `id`, if any.
///
/// A no-op returning `Ok(())` when the gate is off or nothing matches; the
/// production behavior around the call site runs unconditionally either way.
/// When a command matches, the handler runs and its error propagates as-is.
pub fn tap<E, F>(ctx: &Context, id: &str, handler: F) -> Result<(), E>
where
    F: FnOnce(&Command) -> Result<(), E>,
{
    if !gate::enabled() {
        return Ok(());
    }

    match ctx.find(id) {
        Ok(command) => {
            trace!(Trace, "{id}: handler invoked");
            handler(command)
        }
        Err(_) => Ok(()),
    }
}

/// Run exactly one of `production` or `override_`.
///
/// `override_` runs, with the matching command, only when the gate is on and
/// a command matches `id`; in every other case `production` runs. The chosen
/// closure's error is returned unchanged. Never both, never neither.
pub fn custom<E, P, O>(ctx: &Context, id: &str, production: P, override_: O) -> Result<(), E>
where
    P: FnOnce() -> Result<(), E>,
    O: FnOnce(&Command) -> Result<(), E>,
{
    if !gate::enabled() {
        return production();
    }

    match ctx.find(id) {
        Ok(command) => {
            trace!(Trace, "{id}: override path taken");
            override_(command)
        }
        Err(_) => production(),
    }
}
