//! HTTP request handlers
//!
//! Thin handlers that extract request input, delegate to hash-core, and shape
//! the outcome into the JSON wire contract. Dispatcher and staging failures
//! are reported through `Errorcode`/`Errormsg` in a 200 body, never as a
//! 4xx/5xx status; existing clients depend on that.

use axum::Json;
use axum::extract::{Form, Multipart, State};
use serde::Deserialize;
use serde_json::{Value, json};

use hash_core::{FileHashResponse, StringHashResponse};

use crate::server::AppState;
use crate::staging;

/// Form fields for `POST /string`.
///
/// Both fields default to the empty string when absent: an absent `hash`
/// behaves exactly like an unrecognized selector, and an empty `ct` is valid
/// zero-length input.
#[derive(Debug, Default, Deserialize)]
pub struct StringHashForm {
    #[serde(default)]
    pub hash: String,

    #[serde(default)]
    pub ct: String,
}

/// `GET /ping` liveness check
pub async fn ping() -> Json<Value> {
    Json(json!({ "Message": "pong" }))
}

/// `POST /string`: hash a literal text string
pub async fn string_hash(Form(form): Form<StringHashForm>) -> Json<StringHashResponse> {
    tracing::debug!(selector = %form.hash, len = form.ct.len(), "string hash request");

    match hash_core::hash_text(&form.hash, &form.ct) {
        Ok(results) => Json(StringHashResponse::success(form.ct, results)),
        Err(err) => Json(StringHashResponse::failure(form.ct, err)),
    }
}

/// `POST /file`: stage an uploaded file, then hash it.
///
/// Expects a multipart part named `file` (the upload) and a part named `hash`
/// (the selector). Field order does not matter.
pub async fn file_hash(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<FileHashResponse> {
    let mut selector = String::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_string();
                match name.as_str() {
                    "file" => {
                        let filename = field.file_name().unwrap_or_default().to_string();
                        match field.bytes().await {
                            Ok(bytes) => upload = Some((filename, bytes.to_vec())),
                            Err(err) => return Json(FileHashResponse::failure(filename, err)),
                        }
                    }
                    "hash" => match field.text().await {
                        Ok(text) => selector = text,
                        Err(err) => return Json(FileHashResponse::failure("", err)),
                    },
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(err) => return Json(FileHashResponse::failure("", err)),
        }
    }

    let Some((filename, contents)) = upload else {
        return Json(FileHashResponse::failure("", "no file was uploaded"));
    };

    tracing::debug!(selector = %selector, filename = %filename, size = contents.len(), "file hash request");

    let staged = match staging::stage_upload(&state.staging_dir, &filename, &contents) {
        Ok(path) => path,
        Err(err) => return Json(FileHashResponse::failure(filename, err)),
    };

    match staging::hash_staged(&staged, &selector) {
        Ok(results) => Json(FileHashResponse::success(filename, results)),
        Err(err) => Json(FileHashResponse::failure(filename, err)),
    }
}
