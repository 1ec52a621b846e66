//! JSON body extractor.
//!
//! Extracts the raw JSON value of a request body. Field-level validation is
//! left to the schema module so every violation can be reported at once.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for a JSON request body.
///
/// A missing `Content-Type` is treated as JSON. Any other non-JSON content
/// type is rejected with 415.
///
/// # Example
///
/// ```rust,ignore
/// use vitals_rest::extractors::JsonBody;
///
/// async fn create_handler(JsonBody(body): JsonBody) {
///     println!("id: {}", body["id"]);
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(RestError::UnsupportedMediaType { content_type });
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                RestError::PayloadTooLarge {
                    message: e.body_text(),
                }
            } else {
                RestError::BadRequest {
                    message: e.body_text(),
                }
            }
        })?;

        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(value))
    }
}
