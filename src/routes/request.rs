use axum::extract::Path;
use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;

pub(crate) async fn request_info(headers: HeaderMap, jar: CookieJar) -> String {
    let first_name = headers
        .get("firstname")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let last_name = jar
        .get("lastname")
        .map(|cookie| cookie.value())
        .unwrap_or_default();

    format!("Hello, {} {}", first_name, last_name)
}

pub(crate) async fn user_order(Path((user_id, order_id)): Path<(String, String)>) -> String {
    format!("Data User {} with order id {}", user_id, order_id)
}
