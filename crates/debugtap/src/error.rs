use thiserror::Error as ThisError;

///
/// Error
///
/// Failure kinds reported by the registry and dispatch layers. Kinds are
/// identity-comparable so callers can match on them rather than parse
/// messages.
///
/// `NoCommands` and `CommandNotFound` are control-flow signals: dispatch
/// treats both as "no applicable override" and falls back to the production
/// path. Only `PayloadType` ever surfaces to a dispatch caller, since a
/// wrongly-typed override is a hand-authored debug setup the caller has to
/// see and fix.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// The context carries no command registry at all.
    #[error("no commands found")]
    NoCommands,

    /// A registry exists but no entry matches the requested id.
    #[error("command not found")]
    CommandNotFound,

    /// A matching command carried a payload of an unexpected type.
    #[error("unexpected payload type: {actual} (wanted: {expected})")]
    PayloadType {
        actual: &'static str,
        expected: &'static str,
    },
}

///
/// TESTS
///
