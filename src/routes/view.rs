use askama::Template;
use axum::response::Html;

use crate::core::error::Error;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    title: String,
    header: String,
    content: String,
}

pub(crate) async fn view() -> Result<Html<String>, Error> {
    let template = IndexTemplate {
        title: String::from("Hello World"),
        header: String::from("Hello, World!"),
        content: String::from("This is content"),
    };

    Ok(Html(template.render()?))
}
