//! Upload server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Multipart field carrying the document.
pub const UPLOAD_FIELD: &str = "file";

/// URL prefix stored files are served under.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

const PDF_CONTENT_TYPE: &str = "application/pdf";
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("Invalid file name regex"));

/// Replace every character outside `[a-zA-Z0-9._-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "_").into_owned()
}

/// `<millis>-<sanitized name>`
pub fn stored_file_name(millis: i64, original: &str) -> String {
    format!("{}-{}", millis, sanitize_file_name(original))
}

/// Successful upload body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOk {
    pub ok: bool,
    pub url: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Ways an upload can fail.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file provided")]
    MissingFile,
    #[error("Only PDF files are allowed")]
    NotPdf,
    #[error("{0}")]
    Rejected(#[from] MultipartRejection),
    #[error("{0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingFile | UploadError::NotPdf => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("upload failed: {}", self);
        } else {
            tracing::info!("upload rejected: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Clone)]
struct UploadState {
    dir: Arc<PathBuf>,
}

/// Start the upload server on `addr`, storing files in `dir`.
pub async fn start_upload_server(addr: SocketAddr, dir: PathBuf) -> color_eyre::Result<JoinHandle<()>> {
    let (handle, _) = start_upload_server_on(addr, dir).await?;
    Ok(handle)
}

/// Like [`start_upload_server`], also returning the bound address. Bind to
/// port 0 to get an ephemeral port.
pub async fn start_upload_server_on(
    addr: SocketAddr,
    dir: PathBuf,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    tokio::fs::create_dir_all(&dir).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/upload", post(upload_handler))
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(&dir))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(UploadState { dir: Arc::new(dir) });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!("Upload server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Upload server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

async fn upload_handler(
    State(state): State<UploadState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadOk>, UploadError> {
    let url = store_upload(&state.dir, multipart?).await?;
    Ok(Json(UploadOk { ok: true, url }))
}

async fn store_upload(dir: &std::path::Path, mut multipart: Multipart) -> Result<String, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if field.content_type() != Some(PDF_CONTENT_TYPE) {
            return Err(UploadError::NotPdf);
        }

        let original = field.file_name().unwrap_or("upload.pdf").to_string();
        let data = field.bytes().await?;
        let name = stored_file_name(chrono::Utc::now().timestamp_millis(), &original);

        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(dir.join(&name), &data).await?;
        tracing::info!(file = %name, bytes = data.len(), "stored upload");
        return Ok(format!("{}/{}", UPLOAD_URL_PREFIX, name));
    }
    Err(UploadError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("past exam (2023).pdf"), "past_exam__2023_.pdf");
        assert_eq!(sanitize_file_name("linalg-final_v2.pdf"), "linalg-final_v2.pdf");
        assert_eq!(sanitize_file_name("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_file_name("線形代数.pdf"), "____.pdf");
    }

    #[test]
    fn test_stored_file_name() {
        assert_eq!(stored_file_name(1700000000000, "a b.pdf"), "1700000000000-a_b.pdf");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(UploadError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UploadError::NotPdf.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            UploadError::Io(std::io::Error::other("disk full")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(UploadError::NotPdf.to_string(), "Only PDF files are allowed");
    }
}
