// Failures that abort a run. Each variant maps to the step that produced it;
// the message is what gets printed after `ERROR:`.

/// A fatal failure from the file check, the probe or the upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{0}")]
    LocalFile(String),

    #[error("{0}")]
    Connectivity(String),

    #[error("{0}")]
    Upload(String),
}

impl UploadError {
    /// Short name of the step that failed, used in diagnostics.
    pub fn step(&self) -> &'static str {
        match self {
            UploadError::LocalFile(_) => "check-file",
            UploadError::Connectivity(_) => "probe",
            UploadError::Upload(_) => "upload",
        }
    }
}

/// Result of the final existence check. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified,
    NotFound,
    Unexpected(u16),
    Timeout,
    Unreachable(String),
}
