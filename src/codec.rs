//! Per-payload-type encode/decode capability.
//!
//! Each domain type that travels as a method's params or a response's result
//! declares a [`Codec`]: a fallible decoder from the opaque JSON tree and a
//! total encoder back into it. The registry performs name-based dispatch on
//! top of this contract without any payload-specific code of its own.
//!
//! Codecs are hand-written per type. The free functions in this module cover
//! the common field-access cases so an implementation reads as a short list
//! of field extractions; [`from_serde`] is the bridge for types that delegate
//! to a serde derive instead.
//!
//! # Examples
//!
//! ```rust
//! use jroute::{codec, Codec, CodecError};
//! use serde_json::{json, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct Deposit {
//!     account: u64,
//!     amount: i64,
//! }
//!
//! impl Codec for Deposit {
//!     fn decode(value: &Value) -> Result<Self, CodecError> {
//!         let fields = codec::fields(value)?;
//!         let amount = codec::integer(fields, "amount")?;
//!         if amount < 0 {
//!             return Err(CodecError::new("amount must be non-negative"));
//!         }
//!         Ok(Deposit {
//!             account: codec::unsigned(fields, "account")?,
//!             amount,
//!         })
//!     }
//!
//!     fn encode(&self) -> Value {
//!         json!({"account": self.account, "amount": self.amount})
//!     }
//! }
//!
//! let deposit = Deposit::decode(&json!({"account": 3, "amount": 250})).unwrap();
//! assert_eq!(deposit, Deposit { account: 3, amount: 250 });
//! assert!(Deposit::decode(&json!({"account": 3, "amount": -1})).is_err());
//! ```

use crate::error::CodecError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Encode/decode contract a payload type supplies to the registry.
///
/// The decoder receives the call's params or the response's result (for
/// dispatched methods always a keyed mapping, for responses any JSON value)
/// and either produces the typed payload or fails with a human-readable
/// diagnostic. Failure covers absent fields, mistyped fields, and violated
/// domain constraints alike; the registry treats all three the same way.
///
/// The encoder is total: a well-typed payload always has a JSON form.
pub trait Codec: Sized {
    fn decode(value: &Value) -> Result<Self, CodecError>;

    fn encode(&self) -> Value;
}

/// The keyed mapping underlying `value`, or a decode failure.
pub fn fields(value: &Value) -> Result<&Map<String, Value>, CodecError> {
    value
        .as_object()
        .ok_or_else(|| CodecError::new("expected an object"))
}

/// A required field, by name.
pub fn require<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value, CodecError> {
    fields
        .get(name)
        .ok_or_else(|| CodecError::missing_field(name))
}

/// A required signed integer field.
pub fn integer(fields: &Map<String, Value>, name: &str) -> Result<i64, CodecError> {
    require(fields, name)?
        .as_i64()
        .ok_or_else(|| CodecError::invalid_field(name, "an integer"))
}

/// A required non-negative integer field.
pub fn unsigned(fields: &Map<String, Value>, name: &str) -> Result<u64, CodecError> {
    require(fields, name)?
        .as_u64()
        .ok_or_else(|| CodecError::invalid_field(name, "a non-negative integer"))
}

/// A required string field.
pub fn string(fields: &Map<String, Value>, name: &str) -> Result<String, CodecError> {
    require(fields, name)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CodecError::invalid_field(name, "a string"))
}

/// An optional field. Absent and explicit-null both read as `None`.
pub fn optional<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    match fields.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// An optional string field; present-but-mistyped is still an error.
pub fn optional_string(
    fields: &Map<String, Value>,
    name: &str,
) -> Result<Option<String>, CodecError> {
    match optional(fields, name) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| CodecError::invalid_field(name, "a string")),
    }
}

/// An optional object field; present-but-mistyped is still an error.
pub fn optional_object(
    fields: &Map<String, Value>,
    name: &str,
) -> Result<Option<Map<String, Value>>, CodecError> {
    match optional(fields, name) {
        None => Ok(None),
        Some(value) => value
            .as_object()
            .map(|m| Some(m.clone()))
            .ok_or_else(|| CodecError::invalid_field(name, "an object")),
    }
}

/// Decode through a serde `Deserialize` impl, lifting serde's diagnostic into
/// the codec's opaque message.
pub fn from_serde<T: DeserializeOwned>(value: &Value) -> Result<T, CodecError> {
    serde_json::from_value(value.clone()).map_err(CodecError::from)
}

impl Codec for i64 {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_i64()
            .ok_or_else(|| CodecError::new("expected an integer"))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Codec for u64 {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_u64()
            .ok_or_else(|| CodecError::new("expected a non-negative integer"))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Codec for bool {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::new("expected a boolean"))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Codec for String {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| CodecError::new("expected a string"))
    }

    fn encode(&self) -> Value {
        Value::from(self.as_str())
    }
}

/// The unit payload: methods that carry no result decode from JSON null.
impl Codec for () {
    fn decode(value: &Value) -> Result<Self, CodecError> {
        value
            .as_null()
            .ok_or_else(|| CodecError::new("expected null"))
    }

    fn encode(&self) -> Value {
        Value::Null
    }
}
