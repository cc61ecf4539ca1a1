//! Wire envelope model for JSON-RPC 2.0 messages.
//!
//! The four envelope shapes defined by the protocol are modeled as separate
//! immutable value types:
//!
//! 1. [`JsonRpcRequest`]: an in-flight call expecting a response
//! 2. [`JsonRpcNotification`]: fire-and-forget, never answered
//! 3. [`JsonRpcSuccessResponse`] / [`JsonRpcErrorResponse`]: the two
//!    response outcomes, correlated to a request by [`Id`]
//!
//! The envelope carries its parameters as an opaque, already-parsed JSON
//! structure ([`Params`]); interpreting them against a concrete payload type
//! is the registry's job, not the envelope's. Nothing in this module performs
//! JSON text parsing or printing; the serde derives exist so that the
//! transport layer above can move these values on and off the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Correlation identifier attached to a request and echoed on its response.
///
/// An id is either a number or a string; equality is structural. It is
/// created by the request issuer and carried unchanged through to the
/// matching response.
///
/// `#[serde(untagged)]` makes the id serialize directly as the inner value,
/// matching the wire format exactly. `Hash`/`Eq` allow ids to key a pending
/// request table.
///
/// # Examples
///
/// ```rust
/// use jroute::Id;
///
/// let a: Id = 42i64.into();
/// let b: Id = "req-7".into();
/// assert_eq!(a.to_string(), "42");
/// assert_eq!(b.to_string(), "\"req-7\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric identifier, typically a sequential counter.
    Number(i64),
    /// String identifier, e.g. a UUID or correlation token.
    String(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(n as i64)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

/// Call arguments carried by a request or notification.
///
/// Two shapes are legal on the wire: a keyed mapping (JSON object) or a
/// positional sequence (JSON array). Payload codecs dispatched through a
/// registry only ever consume the named shape. Positional params are a
/// decode error for every registered method, never silently coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Params {
    /// Positional parameters as an array.
    Positional(Vec<Value>),
    /// Named parameters as an object.
    Named(Map<String, Value>),
}

impl Params {
    /// Named params from an iterator of `(name, value)` pairs.
    pub fn named(fields: impl IntoIterator<Item = (String, Value)>) -> Self {
        Params::Named(fields.into_iter().collect())
    }

    /// Positional params from a sequence of values.
    pub fn positional(items: impl IntoIterator<Item = Value>) -> Self {
        Params::Positional(items.into_iter().collect())
    }

    /// Wrap an encoded payload value.
    ///
    /// Objects become named params and arrays positional ones.
    ///
    /// # Panics
    ///
    /// Panics if `value` is any other JSON kind. Payload encoders produce
    /// structured values by contract, so a scalar here is an encoder bug.
    pub fn from_payload(value: Value) -> Self {
        match value {
            Value::Object(fields) => Params::Named(fields),
            Value::Array(items) => Params::Positional(items),
            other => panic!("payload encoded to a non-structured value: {}", other),
        }
    }

    /// The named fields, if this is the keyed-mapping shape.
    pub fn as_named(&self) -> Option<&Map<String, Value>> {
        match self {
            Params::Named(fields) => Some(fields),
            Params::Positional(_) => None,
        }
    }

    /// Clone the params back into a plain JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Params::Named(fields) => Value::Object(fields.clone()),
            Params::Positional(items) => Value::Array(items.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Params::Named(fields) => fields.is_empty(),
            Params::Positional(items) => items.is_empty(),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(fields: Map<String, Value>) -> Self {
        Params::Named(fields)
    }
}

impl From<Vec<Value>> for Params {
    fn from(items: Vec<Value>) -> Self {
        Params::Positional(items)
    }
}

/// A call to a remote method that expects a response.
///
/// Per the JSON-RPC 2.0 wire format: `{"jsonrpc": "2.0", "method": <string>,
/// "params": <object|array>, "id": <number|string>}`, with `params` optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Name of the remote method to invoke.
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    /// Identifier correlating this request with its response.
    pub id: Id,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: Option<Params>, id: Id) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// A fire-and-forget call: no id, never answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Name of the method or event being signalled.
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// Successful outcome of a request. The `result` may be any JSON value,
/// including a bare scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcSuccessResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    pub result: Value,
    /// Id echoed from the originating request.
    pub id: Id,
}

/// Failed outcome of a request, carrying a wire error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    pub error: ErrorObject,
    /// Id echoed from the originating request.
    pub id: Id,
}

/// Either response envelope, as received off the wire.
///
/// The two shapes are mutually exclusive by construction: a response carries
/// exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcResponse {
    Success(JsonRpcSuccessResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcResponse {
    /// Build a success envelope.
    pub fn success(result: Value, id: Id) -> Self {
        JsonRpcResponse::Success(JsonRpcSuccessResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result,
            id,
        })
    }

    /// Build an error envelope.
    pub fn error(error: ErrorObject, id: Id) -> Self {
        JsonRpcResponse::Error(JsonRpcErrorResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            error,
            id,
        })
    }

    /// Id echoed from the originating request.
    pub fn id(&self) -> &Id {
        match self {
            JsonRpcResponse::Success(r) => &r.id,
            JsonRpcResponse::Error(r) => &r.id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, JsonRpcResponse::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcResponse::Error(_))
    }
}

/// Wire-format error object carried by an error response.
///
/// The reserved codes (`-32700` parse error through `-32603` internal error)
/// come from the JSON-RPC 2.0 specification; this crate never builds an error
/// *envelope* itself (decode failures are returned as values), but callers
/// deciding transport behavior need these to answer a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(code: i64, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// `-32601`, the requested method does not exist.
    pub fn method_not_found(method: &str) -> Self {
        Self::new(-32601, format!("Method '{}' not found", method))
    }

    /// `-32602`, the method exists but the params are malformed.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(-32602, message)
    }

    /// `-32603`, an unexpected failure while handling the call.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(-32603, message)
    }
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Any single JSON-RPC message, for callers that classify incoming traffic
/// before routing it.
///
/// Variant order matters for the untagged deserialization: a request also
/// looks like a notification with an extra field, so `Request` is tried
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    Response(JsonRpcResponse),
}

impl JsonRpcMessage {
    pub fn is_request(&self) -> bool {
        matches!(self, JsonRpcMessage::Request(_))
    }

    pub fn is_notification(&self) -> bool {
        matches!(self, JsonRpcMessage::Notification(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, JsonRpcMessage::Response(_))
    }
}

/// Protocol version string required on every envelope.
pub const JSONRPC_VERSION: &str = "2.0";
