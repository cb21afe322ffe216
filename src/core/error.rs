use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Reqwest error: {0}")]
    HTTPClient(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Form(#[from] serde_urlencoded::de::Error),
    #[error("{0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    Body(#[from] axum::Error),
    #[error("{0}")]
    IO(#[from] std::io::Error),
    #[error("{0}")]
    Template(#[from] askama::Error),
    #[error("{0}")]
    HTTPClient(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

// Every handler error takes the same path out: a 500 carrying the error's
// Display text as the body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
