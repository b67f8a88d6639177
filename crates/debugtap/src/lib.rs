//!
//! Debugtap lets a request-handling pipeline be selectively overridden at
//! named injection points by out-of-band debug commands, without changing
//! production call signatures.
//!
//! Commands are attached to an immutable, request-scoped [`Context`] before
//! the covered code runs. Code at an injection point calls into the dispatch
//! layer ([`wrap`], [`tap`], [`custom`]) with that context and the point's id;
//! dispatch consults the process-wide [`gate`] and the context's command
//! registry to decide whether the production path or an override executes.
//!
//! The gate defaults to off, so every dispatch call is a pass-through unless
//! a binary links the `debugtap-enable` crate and survives its environment
//! check. Production builds simply omit that crate.
//!

pub mod command;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod log;

pub use command::{Command, CommandId, Payload};
pub use context::Context;
pub use dispatch::{custom, tap, wrap};
pub use error::Error;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
