//! End-to-end tests for `/file`
//!
//! Uploads are hand-rolled multipart bodies so the tests exercise the same
//! extraction path a real client hits: stage to disk, reopen, stream digest.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "test-boundary-7001";

fn test_router(staging: &TempDir) -> Router {
    let state = hash_server::AppState {
        staging_dir: staging.path().to_path_buf(),
    };
    hash_server::router(state, staging.path())
}

fn multipart_body(filename: &str, contents: &[u8], selector: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(
        format!(
            "\r\n--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"hash\"\r\n\r\n{selector}\r\n--{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    body
}

async fn post_file(staging: &TempDir, body: Vec<u8>) -> Value {
    let response = test_router(staging)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/file")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn file_md5_known_vector() {
    let staging = TempDir::new().unwrap();
    let json = post_file(&staging, multipart_body("abc.txt", b"abc", "md5")).await;

    assert_eq!(json["Errorcode"], 0);
    assert_eq!(json["Errormsg"], Value::Null);
    assert_eq!(json["Filename"], "abc.txt");
    assert_eq!(json["Hashes"][0]["Type"], "md5");
    assert_eq!(json["Hashes"][0]["Hash"], "900150983cd24fb0d6963f7d28e17f72");
}

#[tokio::test]
async fn file_path_rejects_non_md5_selectors() {
    let staging = TempDir::new().unwrap();
    for selector in ["sha1", "sha256", "sha512_256", "all", ""] {
        let json = post_file(&staging, multipart_body("abc.txt", b"abc", selector)).await;
        assert_eq!(json["Errorcode"], 1, "selector {selector:?} should fail");
        assert_eq!(
            json["Errormsg"],
            format!("Hash type {selector} is not supported")
        );
        assert_eq!(json["Hashes"], serde_json::json!([]));
    }
}

#[tokio::test]
async fn upload_is_staged_under_its_filename() {
    let staging = TempDir::new().unwrap();
    post_file(&staging, multipart_body("notes.txt", b"contents", "md5")).await;
    assert_eq!(
        std::fs::read(staging.path().join("notes.txt")).unwrap(),
        b"contents"
    );
}

#[tokio::test]
async fn same_named_upload_overwrites_previous_staging() {
    let staging = TempDir::new().unwrap();
    post_file(&staging, multipart_body("dup.txt", b"first", "md5")).await;
    let json = post_file(&staging, multipart_body("dup.txt", b"second", "md5")).await;

    assert_eq!(json["Errorcode"], 0);
    assert_eq!(std::fs::read(staging.path().join("dup.txt")).unwrap(), b"second");
}

#[tokio::test]
async fn missing_file_part_is_error_with_http_200() {
    let staging = TempDir::new().unwrap();
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"hash\"\r\n\r\nmd5\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes();
    let json = post_file(&staging, body).await;

    assert_eq!(json["Errorcode"], 1);
    assert_eq!(json["Errormsg"], "no file was uploaded");
    assert_eq!(json["Hashes"], serde_json::json!([]));
}

#[tokio::test]
async fn empty_file_hashes_to_md5_of_nothing() {
    let staging = TempDir::new().unwrap();
    let json = post_file(&staging, multipart_body("empty.bin", b"", "md5")).await;

    assert_eq!(json["Errorcode"], 0);
    assert_eq!(json["Hashes"][0]["Hash"], "d41d8cd98f00b204e9800998ecf8427e");
}
