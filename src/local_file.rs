use std::fs;
use std::path::Path;

use crate::error::UploadError;

/// Size in bytes of `path`, which must exist and be a regular file.
///
/// Symlinks are followed, so a link to a regular file is accepted.
pub fn check_local_file(path: &Path) -> Result<u64, UploadError> {
    let meta = fs::metadata(path).map_err(|_| {
        UploadError::LocalFile(format!("Local file '{}' not found", path.display()))
    })?;
    if !meta.is_file() {
        return Err(UploadError::LocalFile(format!(
            "'{}' is not a file",
            path.display()
        )));
    }
    Ok(meta.len())
}

/// `1536` -> `"1.50"`
pub fn kilobytes(size: u64) -> String {
    format!("{:.2}", size as f64 / 1024.0)
}
