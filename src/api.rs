// HTTP side of the tool: a small blocking client for the device's file
// manager. Three requests, each bounded by the configured timeout, with no
// retries. Redirects are not followed so a 3xx reaches the caller as-is.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::{CONNECTION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::{PORT, PROBE_PAGE, UPLOAD_ENDPOINT};
use crate::error::{UploadError, Verification};
use crate::multipart::{new_boundary, FormBody};

#[cfg(test)]
use mockall::automock;

/// The three operations a run performs against the device.
///
/// `FileManagerClient` is the real implementation; tests drive the
/// orchestration through a generated mock.
#[cfg_attr(test, automock)]
pub trait FileManager {
    /// GET the file manager page; anything but 200 is a failure.
    fn probe(&self) -> Result<(), UploadError>;

    /// POST `content` as the `up[]` form part named `remote_name`.
    /// Returns the response status on success (200..400).
    fn upload(&self, remote_name: &str, mime: &str, content: &[u8]) -> Result<u16, UploadError>;

    /// GET the uploaded file back from the web root.
    fn verify(&self, remote_name: &str) -> Verification;
}

/// Blocking client bound to one device.
#[derive(Clone)]
pub struct FileManagerClient {
    client: Client,
    host: String,
    port: u16,
}

impl FileManagerClient {
    /// Client for `host` on port 80 with a per-request `timeout`.
    pub fn new(host: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(FileManagerClient {
            client,
            host: host.to_string(),
            port: PORT,
        })
    }

    /// Talk to a different port. The CLI always uses 80.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn url(&self, path: &str) -> String {
        if self.port == PORT {
            format!("http://{}{}", self.host, path)
        } else {
            format!("http://{}:{}{}", self.host, self.port, path)
        }
    }
}

impl FileManager for FileManagerClient {
    fn probe(&self) -> Result<(), UploadError> {
        let url = self.url(PROBE_PAGE);
        tracing::debug!(%url, "probing file manager");
        let res = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                UploadError::Connectivity("Connection timeout".into())
            } else {
                UploadError::Connectivity(format!("Connection failed: {}", e))
            }
        })?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), "probe response");
        if status != StatusCode::OK {
            return Err(UploadError::Connectivity(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }
        Ok(())
    }

    fn upload(&self, remote_name: &str, mime: &str, content: &[u8]) -> Result<u16, UploadError> {
        let url = self.url(UPLOAD_ENDPOINT);
        let body = FormBody::build(new_boundary(), remote_name, mime, content);
        tracing::debug!(%url, bytes = body.len(), boundary = %body.boundary, "posting form");

        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, body.content_type())
            .header(CONTENT_LENGTH, body.len())
            .header(CONNECTION, "close")
            .body(body.bytes)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    UploadError::Upload("Upload timeout".into())
                } else {
                    UploadError::Upload(format!("Upload failed: {}", e))
                }
            })?;

        let status = res.status();
        let txt = res.text().unwrap_or_else(|_| "".into());
        tracing::debug!(status = status.as_u16(), response_len = txt.len(), "upload response");
        if status.is_success() || status.is_redirection() {
            Ok(status.as_u16())
        } else {
            Err(UploadError::Upload(format!(
                "Upload failed: HTTP {}\nResponse: {}",
                status.as_u16(),
                txt
            )))
        }
    }

    fn verify(&self, remote_name: &str) -> Verification {
        let url = self.url(&format!("/{}", remote_name));
        tracing::debug!(%url, "verifying upload");
        match self.client.get(&url).send() {
            Ok(res) => match res.status() {
                StatusCode::OK => Verification::Verified,
                StatusCode::NOT_FOUND => Verification::NotFound,
                other => Verification::Unexpected(other.as_u16()),
            },
            Err(e) if e.is_timeout() => Verification::Timeout,
            Err(e) => Verification::Unreachable(e.to_string()),
        }
    }
}
