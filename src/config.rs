// Fixed defaults for talking to the device's file manager, plus the one
// value object built from the command line. Nothing here is read from
// the environment or from disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timeout applied to every HTTP request (probe, upload, verify).
pub const TIMEOUT: Duration = Duration::from_millis(30_000);

/// The file manager only listens on plain HTTP.
pub const PORT: u16 = 80;

/// Upload handler path; `f` is the target folder on the device.
pub const UPLOAD_ENDPOINT: &str = "/upload?f=/";

/// Page served by the file manager UI, used as the reachability probe.
pub const PROBE_PAGE: &str = "/FSmanager.html";

/// Everything one run needs to know. Built once by `cli::parse_args`
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub local_path: PathBuf,
    pub host: String,
    /// Never empty: falls back to the local file's base name.
    pub remote_name: String,
    pub timeout: Duration,
}

impl UploadRequest {
    /// Build a request, defaulting the remote name to the base name of
    /// `local_path` when `remote_name` is missing or empty.
    pub fn new(local_path: PathBuf, host: String, remote_name: Option<String>) -> Self {
        let remote_name = match remote_name {
            Some(name) if !name.is_empty() => name,
            _ => base_name(&local_path),
        };
        UploadRequest {
            local_path,
            host,
            remote_name,
            timeout: TIMEOUT,
        }
    }

    /// URL the uploaded file should be served from afterwards.
    pub fn remote_url(&self) -> String {
        format!("http://{}/{}", self.host, self.remote_name)
    }
}

fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        // "..", "/" and friends have no file name; keep the raw text so the
        // remote name is still non-empty.
        None => path.to_string_lossy().into_owned(),
    }
}
