//!
//! Lightweight trace output for dispatch decisions.
//!
//! Overrides fire far from the call site that attached them, so dispatch
//! announces substitutions and payload mismatches on stderr while the gate is
//! enabled. With the gate off the macro compiles to a cheap boolean check and
//! prints nothing. Tracing never alters dispatch semantics.
//!

use derive_more::Display;

///
/// Level
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Level {
    Trace,
    Warn,
}

#[macro_export]
macro_rules! trace {
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        if $crate::gate::enabled() {
            eprintln!(
                "[{}] {}: {}",
                $crate::CRATE_NAME,
                $crate::log::Level::$level,
                format!($fmt $(, $arg)*),
            );
        }
    }};
}
