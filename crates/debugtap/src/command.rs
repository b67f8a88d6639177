//!
//! Debug commands: an identifier plus an arbitrarily-typed payload. The
//! payload is opaque to the registry and only interpreted by the call sites
//! that attach and consume it, which are typically in different modules.
//!

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    any::{self, Any},
    fmt,
    sync::Arc,
};

///
/// CommandId
///
/// Identifier for a debug command, conventionally a dotted hierarchical path
/// (eg. "service.endpoint.port"). Opaque to the registry; no uniqueness is
/// enforced, lookup takes the first match in attachment order.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CommandId(String);

impl CommandId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommandId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CommandId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<CommandId> for String {
    fn from(id: CommandId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommandId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

///
/// Payload
///
/// Type-erased command payload. The registry stores payloads without static
/// type information; the consuming call site recovers the concrete type with
/// [`Payload::downcast_ref`]. The type name is captured at construction so a
/// failed downcast can report what was actually attached.
///

#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Payload {
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            value: Arc::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Name of the concrete type attached at the producing call site.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

///
/// Command
///
/// Immutable once created; construction cannot fail.
///

#[derive(Clone, Debug)]
pub struct Command {
    id: CommandId,
    payload: Payload,
}

impl Command {
    #[must_use]
    pub fn new(id: impl Into<CommandId>, payload: Payload) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &CommandId {
        &self.id
    }

    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_id_displays_verbatim() {
        let id = CommandId::new("svc.endpoint.port");
        assert_eq!(id.to_string(), "svc.endpoint.port");
        assert_eq!(id.as_str(), "svc.endpoint.port");
    }

    #[test]
    fn payload_downcasts_to_the_attached_type() {
        let payload = Payload::new(vec!["a".to_string(), "b".to_string()]);
        let got = payload.downcast_ref::<Vec<String>>().unwrap();
        assert_eq!(got, &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn payload_refuses_the_wrong_type() {
        let payload = Payload::new(42_u32);
        assert!(payload.downcast_ref::<String>().is_none());
        assert_eq!(payload.type_name(), "u32");
    }

    #[test]
    fn command_keeps_id_and_payload() {
        let cmd = Command::new("a.b", Payload::new(1_u8));
        assert_eq!(cmd.id().as_str(), "a.b");
        assert_eq!(cmd.payload().downcast_ref::<u8>(), Some(&1));
    }
}
