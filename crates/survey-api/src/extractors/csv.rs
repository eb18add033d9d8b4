//! CSV body extractor
//!
//! Buffers the request body as UTF-8 text. The size cap comes from the
//! route's `DefaultBodyLimit`.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use survey_core::DomainError;

use crate::response::ApiError;

/// Raw CSV text from the request body
#[derive(Debug, Clone)]
pub struct CsvBody(pub String);

#[async_trait]
impl<S> FromRequest<S> for CsvBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::invalid_body(e.body_text())
            }
        })?;

        let text = String::from_utf8(bytes.to_vec()).map_err(|_| {
            ApiError::Domain(DomainError::MalformedCsv(
                "request body is not valid UTF-8".to_string(),
            ))
        })?;

        Ok(CsvBody(text))
    }
}
