//! Error types for dispatch, codecs, and registry construction.
//!
//! Decode failures are ordinary returned values, never unwound: callers
//! pattern-match on [`DecodeError`] and decide transport-level behavior
//! themselves. Every operation here is pure and deterministic, so there is
//! nothing to retry and nothing for this crate to log or recover.

use crate::types::ErrorObject;
use thiserror::Error;

/// Why a registry failed to decode an envelope.
///
/// Decoding is a three-step short-circuit pipeline (method lookup, params
/// shape check, field decode) and each variant corresponds to exactly one
/// step, terminal on first failure:
///
/// | Variant | Condition |
/// |---|---|
/// | `UnknownMethod` | the method name matches no registered tag |
/// | `NoNamedParams` | method matched, but params are not a keyed mapping |
/// | `Other` | params are a keyed mapping, but field-level decode failed |
///
/// The `Other` message is the payload codec's own diagnostic text, passed
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The envelope's method name matches no registered tag. Checked
    /// strictly before any parameter inspection.
    #[error("unknown method")]
    UnknownMethod,

    /// The method matched but the params are positional, absent, or
    /// otherwise not a keyed mapping.
    #[error("params are not named")]
    NoNamedParams,

    /// Field-level decode failure: a required field was missing, mistyped,
    /// or violated a domain constraint.
    #[error("{0}")]
    Other(String),
}

/// Fatal configuration error raised while building a registry.
///
/// Method-name uniqueness is a construction-time invariant; a registry that
/// fails to build is a programming error caught at startup, not a condition
/// the dispatch path ever has to revisit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate method name '{0}'")]
    DuplicateMethod(String),

    #[error("empty method name")]
    EmptyMethodName,
}

/// Field-level decode failure reported by a payload codec.
///
/// Deliberately unstructured: one human-readable message, no field-name or
/// expected-type breakdown. The registry does not need to distinguish
/// "malformed" from "out of domain", so constraint violations use the same
/// shape as missing or mistyped fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CodecError {
    message: String,
}

impl CodecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A required field is absent.
    pub fn missing_field(name: &str) -> Self {
        Self::new(format!("missing field '{}'", name))
    }

    /// A field is present but has the wrong JSON kind.
    pub fn invalid_field(name: &str, expected: &str) -> Self {
        Self::new(format!("field '{}' is not {}", name, expected))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Why reading a response failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResponseError {
    /// The peer answered with an error envelope.
    #[error("remote error {0}")]
    Remote(ErrorObject),

    /// The peer answered with a success envelope whose result did not decode
    /// as the expected payload type.
    #[error("malformed result: {0}")]
    Decode(CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        assert_eq!(DecodeError::UnknownMethod.to_string(), "unknown method");
        assert_eq!(DecodeError::NoNamedParams.to_string(), "params are not named");
        assert_eq!(
            DecodeError::Other("missing field 'from'".into()).to_string(),
            "missing field 'from'"
        );
    }

    #[test]
    fn registry_error_display() {
        assert_eq!(
            RegistryError::DuplicateMethod("ping".into()).to_string(),
            "duplicate method name 'ping'"
        );
    }

    #[test]
    fn codec_error_constructors() {
        assert_eq!(
            CodecError::missing_field("from").message(),
            "missing field 'from'"
        );
        assert_eq!(
            CodecError::invalid_field("value", "an integer").message(),
            "field 'value' is not an integer"
        );
    }

    #[test]
    fn response_error_display() {
        let remote = ResponseError::Remote(ErrorObject::method_not_found("x"));
        assert_eq!(remote.to_string(), "remote error -32601: Method 'x' not found");
    }
}
