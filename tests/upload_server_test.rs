//! Upload server over real HTTP.

mod common;

use std::net::SocketAddr;
use std::path::Path;

use common::PDF_BYTES;
use kakomon::upload::{start_upload_server_on, UploadOk, UPLOAD_FIELD};
use reqwest::multipart::{Form, Part};
use tempfile::TempDir;

async fn start(dir: &Path) -> SocketAddr {
    let (_handle, addr) = start_upload_server_on(
        "127.0.0.1:0".parse().unwrap(),
        dir.to_path_buf(),
    )
    .await
    .unwrap();
    addr
}

fn pdf_part(name: &str, mime: &str) -> Part {
    Part::bytes(PDF_BYTES.to_vec())
        .file_name(name.to_string())
        .mime_str(mime)
        .unwrap()
}

async fn post(addr: SocketAddr, form: Form) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{}/api/upload", addr))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_pdf_upload_is_stored_and_served() {
    let dir = TempDir::new().unwrap();
    let addr = start(dir.path()).await;

    let form = Form::new().part(UPLOAD_FIELD, pdf_part("past exam 2023.pdf", "application/pdf"));
    let response = post(addr, form).await;
    assert_eq!(response.status(), 200);

    let body: UploadOk = response.json().await.unwrap();
    assert!(body.ok);
    assert!(body.url.starts_with("/uploads/"));
    assert!(body.url.ends_with("-past_exam_2023.pdf"));

    let stored = body.url.trim_start_matches("/uploads/");
    assert_eq!(std::fs::read(dir.path().join(stored)).unwrap(), PDF_BYTES);

    let served = reqwest::get(format!("http://{}{}", addr, body.url))
        .await
        .unwrap();
    assert_eq!(served.status(), 200);
    assert_eq!(served.bytes().await.unwrap().as_ref(), PDF_BYTES);
}

#[tokio::test]
async fn test_non_pdf_is_rejected() {
    let dir = TempDir::new().unwrap();
    let addr = start(dir.path()).await;

    let form = Form::new().part(UPLOAD_FIELD, pdf_part("notes.txt", "text/plain"));
    let response = post(addr, form).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Only PDF files are allowed");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_file_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let addr = start(dir.path()).await;

    let form = Form::new().text("comment", "no file here");
    let response = post(addr, form).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_unknown_upload_is_not_found() {
    let dir = TempDir::new().unwrap();
    let addr = start(dir.path()).await;

    let response = reqwest::get(format!("http://{}/uploads/absent.pdf", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
