// In-memory multipart/form-data body for the file manager's upload form.
//
// The device expects a single part named `up[]`. The whole body is built up
// front so Content-Length is known; files are small web assets.

use std::path::Path;
use uuid::Uuid;

pub const FIELD_NAME: &str = "up[]";

const BOUNDARY_PREFIX: &str = "----formdata-fm-upload-";

const DEFAULT_MIME: &str = "application/octet-stream";

/// Content type for a file, chosen by its (case-insensitive) extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return DEFAULT_MIME,
    };
    match ext.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "xml" => "application/xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => DEFAULT_MIME,
    }
}

pub fn new_boundary() -> String {
    format!("{}{}", BOUNDARY_PREFIX, Uuid::new_v4().simple())
}

/// A finished request body and the boundary it was framed with.
#[derive(Debug, Clone)]
pub struct FormBody {
    pub boundary: String,
    pub bytes: Vec<u8>,
}

impl FormBody {
    /// Frame `content` as the single `up[]` part.
    pub fn build(boundary: String, filename: &str, mime: &str, content: &[u8]) -> Self {
        let head = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: {mime}\r\n\r\n",
            b = boundary,
            field = FIELD_NAME,
        );
        let tail = format!("\r\n--{}--\r\n", boundary);

        let mut bytes = Vec::with_capacity(head.len() + content.len() + tail.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(content);
        bytes.extend_from_slice(tail.as_bytes());
        FormBody { boundary, bytes }
    }

    /// Value for the request's Content-Type header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}
