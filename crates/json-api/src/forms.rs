//! Form bodies, url-encoded or multipart.

use salvo::{
    http::form::{FilePart, FormData},
    prelude::{Request, StatusError},
};
use tracing::error;

use shopdesk_app::platform::FileUpload;

use crate::extensions::*;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Parse the request body as a form.
pub(crate) async fn form_data(req: &mut Request) -> Result<&FormData, StatusError> {
    req.form_data().await.or_400("Expected a form body")
}

/// Text field value, empty when absent.
pub(crate) fn text(form: &FormData, name: &str) -> String {
    form.fields.get(name).cloned().unwrap_or_default()
}

/// Uploaded file for `name`. A file input left empty submits a part with no
/// file name, which counts as no file.
pub(crate) async fn file(form: &FormData, name: &str) -> Result<Option<FileUpload>, StatusError> {
    let Some(part) = form.files.get(name) else {
        return Ok(None);
    };

    let Some(file_name) = part.name().filter(|file_name| !file_name.is_empty()) else {
        return Ok(None);
    };

    let bytes = read_part(part).await?;

    Ok(Some(FileUpload {
        file_name: file_name.to_string(),
        content_type: part
            .content_type()
            .map_or_else(|| DEFAULT_CONTENT_TYPE.to_string(), |mime| mime.to_string()),
        bytes,
    }))
}

async fn read_part(part: &FilePart) -> Result<Vec<u8>, StatusError> {
    tokio::fs::read(part.path()).await.map_err(|source| {
        error!("failed to read uploaded file part: {source}");

        StatusError::internal_server_error()
    })
}
