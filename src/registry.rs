//! Name-based dispatch for a sealed message family.
//!
//! A [`Registry`] is an immutable lookup table from method name to a
//! type-erased decoder, built once at startup from a fixed sequence of
//! [`MethodTag`]s and shared read-only for the life of the process. Decoding
//! is a pure function of the registry and the envelope: method lookup, then
//! params shape check, then field decode, terminal on the first failure.
//!
//! The encode direction never consults the table to find a codec. A family
//! is a closed enum, and its [`Message`] impl matches exhaustively over the
//! variants, so every value already knows its method name and params. There
//! is no "no tag found" case to represent.
//!
//! # Examples
//!
//! ```rust
//! use jroute::{codec, Codec, CodecError, DecodeError, Id, Message, Params, Registry};
//! use serde_json::{json, Value};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Ping {
//!     seq: u64,
//! }
//!
//! impl Codec for Ping {
//!     fn decode(value: &Value) -> Result<Self, CodecError> {
//!         let fields = codec::fields(value)?;
//!         Ok(Ping { seq: codec::unsigned(fields, "seq")? })
//!     }
//!
//!     fn encode(&self) -> Value {
//!         json!({"seq": self.seq})
//!     }
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Command {
//!     Ping(Ping),
//! }
//!
//! impl From<Ping> for Command {
//!     fn from(ping: Ping) -> Self {
//!         Command::Ping(ping)
//!     }
//! }
//!
//! impl Message for Command {
//!     fn method(&self) -> &'static str {
//!         match self {
//!             Command::Ping(_) => "ping",
//!         }
//!     }
//!
//!     fn params(&self) -> Params {
//!         let Command::Ping(ping) = self;
//!         Params::from_payload(ping.encode())
//!     }
//! }
//!
//! let registry: Registry<Command> = Registry::builder()
//!     .register::<Ping>("ping")
//!     .build()
//!     .unwrap();
//!
//! let request = registry.encode_request(&Command::Ping(Ping { seq: 1 }), Id::Number(1));
//! assert_eq!(request.method, "ping");
//! assert_eq!(
//!     registry.decode_request(&request),
//!     Ok(Command::Ping(Ping { seq: 1 }))
//! );
//!
//! let unknown = jroute::JsonRpcRequest::new("pong", None, Id::Number(2));
//! assert_eq!(registry.decode_request(&unknown), Err(DecodeError::UnknownMethod));
//! ```

use crate::codec::Codec;
use crate::error::{CodecError, DecodeError, RegistryError};
use crate::types::{Id, JsonRpcNotification, JsonRpcRequest, Params};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Contract every sealed message family implements on its enum.
///
/// Both methods are expected to be exhaustive matches over the family's
/// variants; the registry's encode path relies on that exhaustiveness.
pub trait Message {
    /// The method name this value dispatches under. Must equal the name its
    /// payload type was registered with.
    fn method(&self) -> &'static str;

    /// The value's params, produced by the payload's encoder.
    fn params(&self) -> Params;
}

/// Association of one payload type with one method-name string.
///
/// A tag erases the payload type behind a plain decode function producing
/// the family supertype, so the registry can dispatch by name without any
/// payload-specific code. Name uniqueness is a registry-level invariant,
/// checked when the table is built.
pub struct MethodTag<M> {
    name: &'static str,
    decode: fn(&Value) -> Result<M, CodecError>,
}

impl<M> MethodTag<M> {
    /// Tag the payload type `T` with `name`.
    pub fn new<T>(name: &'static str) -> Self
    where
        T: Codec + Into<M>,
    {
        Self {
            name,
            decode: |value| T::decode(value).map(Into::into),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Immutable method-name lookup table for one sealed message family.
///
/// Built once via [`Registry::builder`]; owns no mutable state afterwards,
/// so it is freely shared across threads. One registry serves a command
/// family (request-shaped envelopes) or a notification family
/// (notification-shaped envelopes); the family decides which pair of entry
/// points its callers use.
pub struct Registry<M> {
    tags: BTreeMap<&'static str, MethodTag<M>>,
}

impl<M: Message> Registry<M> {
    pub fn builder() -> RegistryBuilder<M> {
        RegistryBuilder { tags: Vec::new() }
    }

    /// Decode a request envelope into the family's typed payload.
    pub fn decode_request(&self, request: &JsonRpcRequest) -> Result<M, DecodeError> {
        self.dispatch(&request.method, request.params.as_ref())
    }

    /// Decode a notification envelope into the family's typed payload.
    pub fn decode_notification(
        &self,
        notification: &JsonRpcNotification,
    ) -> Result<M, DecodeError> {
        self.dispatch(&notification.method, notification.params.as_ref())
    }

    /// Encode a command as a request envelope carrying `id`.
    pub fn encode_request(&self, message: &M, id: Id) -> JsonRpcRequest {
        let method = message.method();
        debug_assert!(self.contains(method), "method '{}' is not registered", method);
        JsonRpcRequest::new(method, Some(message.params()), id)
    }

    /// Encode a notification envelope. No id: notifications are never
    /// answered.
    pub fn encode_notification(&self, message: &M) -> JsonRpcNotification {
        let method = message.method();
        debug_assert!(self.contains(method), "method '{}' is not registered", method);
        JsonRpcNotification::new(method, Some(message.params()))
    }

    /// All registered method names, in sorted order.
    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tags.keys().copied()
    }

    pub fn contains(&self, method: &str) -> bool {
        self.tags.contains_key(method)
    }

    fn dispatch(&self, method: &str, params: Option<&Params>) -> Result<M, DecodeError> {
        trace!(method, "dispatching");

        // Order matters: the method lookup happens strictly before any
        // parameter inspection.
        let tag = self.tags.get(method).ok_or(DecodeError::UnknownMethod)?;

        let value = match params {
            Some(params @ Params::Named(_)) => params.to_value(),
            Some(Params::Positional(_)) | None => return Err(DecodeError::NoNamedParams),
        };

        (tag.decode)(&value).map_err(|err| DecodeError::Other(err.message().to_owned()))
    }
}

/// Accumulates tags for a [`Registry`] and validates them at build time.
pub struct RegistryBuilder<M> {
    tags: Vec<MethodTag<M>>,
}

impl<M> RegistryBuilder<M> {
    /// Register the payload type `T` under `name`.
    pub fn register<T>(mut self, name: &'static str) -> Self
    where
        T: Codec + Into<M>,
    {
        self.tags.push(MethodTag::new::<T>(name));
        self
    }

    /// Add a pre-built tag.
    pub fn tag(mut self, tag: MethodTag<M>) -> Self {
        self.tags.push(tag);
        self
    }

    /// Build the immutable table, rejecting empty and duplicate method
    /// names. Both are configuration errors: a registry that fails to build
    /// should be fatal at startup.
    pub fn build(self) -> Result<Registry<M>, RegistryError> {
        let mut tags = BTreeMap::new();
        for tag in self.tags {
            let name = tag.name();
            if name.is_empty() {
                return Err(RegistryError::EmptyMethodName);
            }
            if tags.insert(name, tag).is_some() {
                return Err(RegistryError::DuplicateMethod(name.to_owned()));
            }
        }
        debug!(methods = tags.len(), "registry built");
        Ok(Registry { tags })
    }
}
