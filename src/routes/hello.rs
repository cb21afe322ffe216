use axum::extract::{Form, Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GreetParams {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GreetForm {
    name: String,
}

pub(crate) async fn index() -> &'static str {
    "Hello, World!"
}

pub(crate) async fn greet(Query(params): Query<GreetParams>) -> String {
    let name = params.name.unwrap_or_else(|| String::from("World"));

    format!("Hello, {}", name)
}

pub(crate) async fn greet_form(Form(form): Form<GreetForm>) -> String {
    format!("Hello {}", form.name)
}
