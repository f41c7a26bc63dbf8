use crate::{Error, Result};
use axum::{
    extract::{
        Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use tracing::debug;

const FILE_FIELD: &str = "file";

#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pulls the `file` field out of a multipart body. A missing field, a
/// non-multipart request or an empty file is `FileRequired`; a file longer
/// than `max_bytes` is `FileTooLarge`.
pub async fn read_upload(
    multipart: std::result::Result<Multipart, MultipartRejection>,
    max_bytes: usize,
) -> Result<Upload> {
    let mut multipart = multipart.map_err(|e| {
        debug!("Rejected non-multipart upload: {}", e);
        Error::FileRequired
    })?;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(|e| read_error(e, max_bytes))? {
            if data.len() + chunk.len() > max_bytes {
                return Err(Error::FileTooLarge { limit: max_bytes });
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(Error::FileRequired);
        }

        return Ok(Upload { filename, data });
    }

    Err(Error::FileRequired)
}

// The body limit surfaces as a multipart error once the stream is cut off.
fn read_error(err: MultipartError, max_bytes: usize) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::FileTooLarge { limit: max_bytes }
    } else {
        Error::file_read(err.body_text())
    }
}
