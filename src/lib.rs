//! Typed method dispatch and codec core for JSON-RPC 2.0 messages.
//!
//! This crate is the protocol core of a JSON-RPC endpoint: given a wire-level
//! request, notification, or response envelope, it routes the message, by
//! the method name embedded in the envelope, to exactly one statically-known
//! payload type, decodes its parameters, and produces either the typed value
//! or a precise decode error. Encoding is the mirror image: a typed value
//! becomes an envelope carrying the correct method name and correlation id.
//!
//! # Pieces
//!
//! - **Envelope model** ([`types`]): immutable value types for the four
//!   JSON-RPC envelope shapes, plus [`Id`] and [`Params`].
//! - **Codec capability** ([`codec`]): the per-payload-type [`Codec`]
//!   contract and field helpers for hand-written implementations.
//! - **Registry** ([`registry`]): an immutable method-name table built once
//!   at startup, dispatching a sealed family of payload types in both
//!   directions.
//! - **Response companion** ([`response`]): the unkeyed codec path for
//!   responses, matched by correlation id and expected type only.
//! - **Error taxonomy** ([`error`]): the fixed set of decode failure kinds,
//!   always returned as values.
//!
//! # What this crate does not do
//!
//! No transport framing, no JSON text parsing or printing, no batching, and
//! no application logic: the JSON tree arrives already parsed
//! (`serde_json::Value`) and the decoded payloads leave as plain values. The
//! registry is pure and synchronous. Once built it is immutable, so it can
//! be shared read-only across any number of threads.
//!
//! # Example
//!
//! ```rust
//! use jroute::{codec, Codec, CodecError, DecodeError, Id, Message, Params, Registry};
//! use serde_json::{json, Value};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct SetLevel {
//!     level: i64,
//! }
//!
//! impl Codec for SetLevel {
//!     fn decode(value: &Value) -> Result<Self, CodecError> {
//!         let fields = codec::fields(value)?;
//!         Ok(SetLevel { level: codec::integer(fields, "level")? })
//!     }
//!
//!     fn encode(&self) -> Value {
//!         json!({"level": self.level})
//!     }
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Command {
//!     SetLevel(SetLevel),
//! }
//!
//! impl From<SetLevel> for Command {
//!     fn from(payload: SetLevel) -> Self {
//!         Command::SetLevel(payload)
//!     }
//! }
//!
//! impl Message for Command {
//!     fn method(&self) -> &'static str {
//!         match self {
//!             Command::SetLevel(_) => "setLevel",
//!         }
//!     }
//!
//!     fn params(&self) -> Params {
//!         let Command::SetLevel(payload) = self;
//!         Params::from_payload(payload.encode())
//!     }
//! }
//!
//! let registry: Registry<Command> = Registry::builder()
//!     .register::<SetLevel>("setLevel")
//!     .build()
//!     .expect("method names are unique");
//!
//! // Wire envelope in, typed value out.
//! let request = jroute::JsonRpcRequest::new(
//!     "setLevel",
//!     Some(Params::named([("level".to_string(), json!(3))])),
//!     Id::Number(1),
//! );
//! assert_eq!(
//!     registry.decode_request(&request),
//!     Ok(Command::SetLevel(SetLevel { level: 3 }))
//! );
//!
//! // Typed value in, wire envelope out.
//! let encoded = registry.encode_request(&Command::SetLevel(SetLevel { level: 3 }), Id::Number(1));
//! assert_eq!(encoded, request);
//!
//! // The failure kinds are values, not exceptions.
//! let unknown = jroute::JsonRpcRequest::new("teleport", None, Id::Number(2));
//! assert_eq!(registry.decode_request(&unknown), Err(DecodeError::UnknownMethod));
//! ```

pub mod codec;
pub mod error;
pub mod registry;
pub mod response;
pub mod types;

pub use codec::Codec;
pub use error::{CodecError, DecodeError, RegistryError, ResponseError};
pub use registry::{Message, MethodTag, Registry, RegistryBuilder};
pub use response::ResponseCodec;
pub use types::{
    ErrorObject, Id, JsonRpcErrorResponse, JsonRpcMessage, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, JsonRpcSuccessResponse, Params, JSONRPC_VERSION,
};
