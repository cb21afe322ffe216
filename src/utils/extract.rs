use axum::body;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::core::error::Error;

const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Deserializes the request body as JSON, URL-encoded form, or XML, selected
/// by the `Content-Type` header. Decode failures reject through [`Error`].
pub(crate) struct ParsedBody<T>(pub(crate) T);

impl<S, T> FromRequest<S> for ParsedBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        let bytes = body::to_bytes(req.into_body(), BODY_LIMIT).await?;

        let value = if content_type.starts_with("application/json") {
            serde_json::from_slice(&bytes)?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            serde_urlencoded::from_bytes(&bytes)?
        } else if content_type.starts_with("application/xml")
            || content_type.starts_with("text/xml")
        {
            quick_xml::de::from_reader(bytes.as_ref())?
        } else {
            return Err(Error::UnsupportedMediaType(content_type));
        };

        Ok(ParsedBody(value))
    }
}
