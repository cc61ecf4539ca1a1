//! Typed reading and writing of response envelopes.
//!
//! Responses carry no method name: the caller that issued a request already
//! knows which payload type to expect, so response handling is matched purely
//! by correlation id and expected type. There is consequently no registry
//! here: no method lookup, and no params-shape check either, because a
//! result may be any JSON value (a bare number is a perfectly good result).

use crate::codec::Codec;
use crate::error::ResponseError;
use crate::types::{Id, JsonRpcResponse};
use std::marker::PhantomData;

/// Codec companion for one expected response payload type.
///
/// # Examples
///
/// ```rust
/// use jroute::{Id, ResponseCodec};
///
/// let response = ResponseCodec::<i64>::write(&7, Id::Number(1));
/// assert_eq!(ResponseCodec::<i64>::read(&response), Ok(7));
/// ```
pub struct ResponseCodec<T> {
    _payload: PhantomData<T>,
}

impl<T: Codec> ResponseCodec<T> {
    /// Read a response envelope as the expected payload type.
    ///
    /// An error envelope is the failure path regardless of the expected
    /// type; a success envelope's result is handed directly to the payload
    /// decoder.
    pub fn read(response: &JsonRpcResponse) -> Result<T, ResponseError> {
        match response {
            JsonRpcResponse::Success(success) => {
                T::decode(&success.result).map_err(ResponseError::Decode)
            }
            JsonRpcResponse::Error(failure) => Err(ResponseError::Remote(failure.error.clone())),
        }
    }

    /// Encode a payload into a success envelope carrying `id`.
    pub fn write(value: &T, id: Id) -> JsonRpcResponse {
        JsonRpcResponse::success(value.encode(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::types::ErrorObject;
    use serde_json::json;

    #[test]
    fn bare_scalar_result_decodes() {
        // No object-shape requirement on results.
        let response = JsonRpcResponse::success(json!(0), Id::Number(1));
        assert_eq!(ResponseCodec::<i64>::read(&response), Ok(0));
    }

    #[test]
    fn round_trip() {
        let response = ResponseCodec::<String>::write(&"done".to_owned(), Id::from("req-3"));
        assert_eq!(response.id(), &Id::String("req-3".into()));
        assert_eq!(ResponseCodec::<String>::read(&response), Ok("done".to_owned()));
    }

    #[test]
    fn error_envelope_is_the_failure_path() {
        let response =
            JsonRpcResponse::error(ErrorObject::internal_error("boom"), Id::Number(2));
        assert_eq!(
            ResponseCodec::<i64>::read(&response),
            Err(ResponseError::Remote(ErrorObject::internal_error("boom")))
        );
    }

    #[test]
    fn mistyped_result_is_a_decode_failure() {
        let response = JsonRpcResponse::success(json!("not a number"), Id::Number(3));
        assert_eq!(
            ResponseCodec::<i64>::read(&response),
            Err(ResponseError::Decode(CodecError::new("expected an integer")))
        );
    }
}
