use axum::body::Bytes;
use axum::Json;
use serde_json::json;

use crate::core::error::Error;
use crate::types::request::{LoginData, RegisterData};
use crate::utils::extract::ParsedBody;

pub(crate) async fn login(body: Bytes) -> Result<String, Error> {
    let data: LoginData = serde_json::from_slice(&body)?;

    Ok(format!("Hello {}", data.username))
}

pub(crate) async fn register(ParsedBody(data): ParsedBody<RegisterData>) -> String {
    format!("Register Success {}", data.username)
}

// serde_json's default map keeps keys sorted, so the body serializes with
// `password` before `username`.
pub(crate) async fn profile() -> Json<serde_json::Value> {
    Json(json!({
        "username": "Salman",
        "password": "123",
    }))
}
