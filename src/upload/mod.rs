//! Local upload server for reference documents.
//!
//! `POST /api/upload` accepts one PDF in the multipart field `file`, stores
//! it as `<millis>-<sanitized name>` in the upload directory and answers
//! `{"ok":true,"url":"/uploads/<stored name>"}`. Stored files are served back
//! under `GET /uploads/*`, which is the form past-exam file references take.

mod server;

pub use server::{
    sanitize_file_name, start_upload_server, start_upload_server_on, stored_file_name,
    UploadError, UploadOk, UPLOAD_FIELD, UPLOAD_URL_PREFIX,
};
