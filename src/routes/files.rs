use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;

#[instrument(skip_all)]
pub(crate) async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, Error> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(ToOwned::to_owned)
            .ok_or(Error::MissingField("file"))?;
        let data = field.bytes().await?;

        tokio::fs::create_dir_all(&state.upload_dir).await?;
        tokio::fs::write(state.upload_dir.join(&file_name), &data).await?;

        tracing::debug!("saved {} ({} bytes)", file_name, data.len());

        return Ok("Upload Success");
    }

    Err(Error::MissingField("file"))
}

#[instrument(skip_all)]
pub(crate) async fn download(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let file_name = state
        .sample_file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("download")
        .to_owned();

    let contents = tokio::fs::read(&state.sample_file).await?;

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )],
        contents,
    ))
}
