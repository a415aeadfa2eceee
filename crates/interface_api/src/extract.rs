//! Request body decoding
//!
//! Claim endpoints read their bodies as a raw JSON object rather than a typed
//! struct: field presence and falsiness are part of the validation rules, and
//! a badly encoded body has to surface as a 400 instead of the 415/422
//! rejections of `axum::Json`.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A request body decoded as a JSON object.
///
/// - empty body, or a non-JSON `Content-Type`: empty object
/// - malformed JSON: 400
/// - valid JSON that is not an object: empty object
#[derive(Debug, Default)]
pub struct JsonObject(pub Map<String, Value>);

fn declares_json(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

impl JsonObject {
    /// Decodes raw body bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Ok(Self::default()),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected malformed JSON body");
                Err(ApiError::BadRequest("Malformed JSON body".to_string()))
            }
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_declared = match req.headers().get(CONTENT_TYPE) {
            None => true,
            Some(value) => value.to_str().map(declares_json).unwrap_or(false),
        };

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        if !json_declared {
            return Ok(Self::default());
        }
        Self::decode(&bytes)
    }
}
