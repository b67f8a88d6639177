//!
//! Request-scoped propagation context and the command registry it carries.
//!
//! The context is an immutable value: deriving a new one never mutates the
//! old one, so each logical request path keeps an independent, race-free view
//! without any locking. The registry is stored as a side-channel entry keyed
//! by the `TypeId` of a private type, which nothing outside this module can
//! name or collide with.
//!

use crate::{
    command::{Command, CommandId, Payload},
    error::Error,
};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};

///
/// Context
///
/// Cheaply cloneable carrier for request-scoped side-channel values.
/// Untouched entries are structurally shared between a context and the
/// contexts derived from it.
///

#[derive(Clone, Default)]
pub struct Context {
    entries: Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn value<T>(&self) -> Option<&T>
    where
        T: Any + Send + Sync,
    {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
    }

    fn with_value<T>(&self, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        let mut entries = (*self.entries).clone();
        entries.insert(TypeId::of::<T>(), Arc::new(value));

        Self {
            entries: Arc::new(entries),
        }
    }

    /// Derive a context with `payload` attached under `id`.
    ///
    /// The registry is append-only: the returned context carries the old
    /// sequence plus the new command, and `self` is left untouched. Attaching
    /// an id that is already present shadows nothing; the earlier entry still
    /// wins at lookup.
    #[must_use]
    pub fn attach(&self, id: impl Into<CommandId>, payload: Payload) -> Self {
        let mut seq = self.value::<CommandSeq>().cloned().unwrap_or_default();
        seq.0.push(Command::new(id, payload));

        self.with_value(seq)
    }

    /// All commands attached to this context, in attachment order.
    pub fn commands(&self) -> Result<&[Command], Error> {
        self.value::<CommandSeq>()
            .map(|seq| seq.0.as_slice())
            .ok_or(Error::NoCommands)
    }

    /// First command whose id matches, scanning in attachment order.
    ///
    /// An absent registry and a missing entry both report `CommandNotFound`;
    /// dispatch callers rely on the two failing the same way.
    pub fn find(&self, id: &str) -> Result<&Command, Error> {
        let commands = self.commands().map_err(|_| Error::CommandNotFound)?;

        commands
            .iter()
            .find(|c| c.id().as_str() == id)
            .ok_or(Error::CommandNotFound)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("entries", &self.entries.len())
            .finish()
    }
}

///
/// CommandSeq
/// Private registry key; its `TypeId` is the side-channel key.
///

#[derive(Clone, Default)]
struct CommandSeq(Vec<Command>);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_has_no_commands() {
        let ctx = Context::new();
        assert_eq!(ctx.commands().unwrap_err(), Error::NoCommands);
        assert_eq!(ctx.find("anything").unwrap_err(), Error::CommandNotFound);
    }

    #[test]
    fn attach_preserves_order() {
        let ctx = Context::new()
            .attach("a", Payload::new(1_u32))
            .attach("b", Payload::new(2_u32));

        let commands = ctx.commands().unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].id().as_str(), "a");
        assert_eq!(commands[1].id().as_str(), "b");
    }

    #[test]
    fn find_returns_the_first_match() {
        let ctx = Context::new()
            .attach("a", Payload::new("first"))
            .attach("a", Payload::new("second"));

        let cmd = ctx.find("a").unwrap();
        assert_eq!(cmd.payload().downcast_ref::<&str>(), Some(&"first"));
    }

    #[test]
    fn attach_never_mutates_the_original() {
        let original = Context::new();
        let derived = original.attach("a", Payload::new(1_u32));

        assert_eq!(original.commands().unwrap_err(), Error::NoCommands);
        assert_eq!(derived.commands().unwrap().len(), 1);

        // a second derivation from the same parent is independent too
        let sibling = derived.attach("b", Payload::new(2_u32));
        assert_eq!(derived.commands().unwrap().len(), 1);
        assert_eq!(sibling.commands().unwrap().len(), 2);
    }

    #[test]
    fn find_misses_report_not_found() {
        let ctx = Context::new().attach("a", Payload::new(()));
        assert_eq!(ctx.find("b").unwrap_err(), Error::CommandNotFound);
    }
}
