// The run itself: check file -> probe -> upload -> verify, strictly in that
// order. The first three steps are fatal on failure; verification only ever
// produces a warning.

use std::ffi::OsString;
use std::fs;
use std::io::Write;

use crate::api::{FileManager, FileManagerClient};
use crate::cli::parse_args;
use crate::config::{UploadRequest, PROBE_PAGE};
use crate::console::{self, Console};
use crate::error::{UploadError, Verification};
use crate::local_file::{check_local_file, kilobytes};
use crate::multipart::mime_for;

/// Perform one upload against `device`, logging each step to stdout.
///
/// Returns how the final verification went; a failed verification is still
/// a successful run.
pub fn run(request: &UploadRequest, device: &dyn FileManager) -> Result<Verification, UploadError> {
    run_with(&mut Console::stdout(), request, device)
}

/// Same as `run`, with the step log going to `console`.
pub fn run_with<W: Write>(
    console: &mut Console<W>,
    request: &UploadRequest,
    device: &dyn FileManager,
) -> Result<Verification, UploadError> {
    let size = check_local_file(&request.local_path)?;
    console.success(format!(
        "Local file found: {} ({} KB)",
        request.local_path.display(),
        kilobytes(size)
    ));

    console.info(format!("Testing connectivity to {}...", request.host));
    device.probe()?;
    console.success(format!("Successfully connected to {}", request.host));

    console.info(format!(
        "Uploading {} as {}...",
        request.local_path.display(),
        request.remote_name
    ));
    let content = fs::read(&request.local_path)
        .map_err(|e| UploadError::Upload(format!("Upload failed: {}", e)))?;
    let status = device.upload(&request.remote_name, mime_for(&request.local_path), &content)?;
    tracing::debug!(status, "upload accepted");
    console.success(format!("File uploaded successfully: {}", request.remote_name));

    console.info(format!("Verifying upload: {}", request.remote_url()));
    let verification = device.verify(&request.remote_name);
    report_verification(console, request, &verification);

    console.success(format!(
        "Upload completed: {} -> {}",
        request.local_path.display(),
        request.remote_url()
    ));
    Ok(verification)
}

fn report_verification<W: Write>(
    console: &mut Console<W>,
    request: &UploadRequest,
    verification: &Verification,
) {
    match verification {
        Verification::Verified => {
            console.success(format!("File is accessible at: {}", request.remote_url()))
        }
        Verification::NotFound => console.warning(
            "File uploaded but not accessible at root. May be in a subdirectory.",
        ),
        Verification::Unexpected(code) => {
            console.warning(format!("File verification returned HTTP {}", code))
        }
        Verification::Timeout => {
            console.warning("Verification timeout - file may still be uploaded")
        }
        Verification::Unreachable(detail) => console.warning(format!(
            "Verification failed: {} - file may still be uploaded",
            detail
        )),
    }
}

/// Steps for doing the upload by hand in the device's web UI.
///
/// `execute` always has the parsed request at hand; the `None` form with
/// placeholders is for library callers that fail before they have one.
pub fn manual_instructions(request: Option<&UploadRequest>) -> String {
    match request {
        Some(req) => format!(
            "\nManual upload instructions:\n\
             1. Open: http://{}{}\n\
             2. Click \"Choose Files\" and select: {}\n\
             3. Click \"Upload\"",
            req.host,
            PROBE_PAGE,
            req.local_path.display()
        ),
        None => format!(
            "\nManual upload instructions:\n\
             1. Open: http://[your-host]{}\n\
             2. Click \"Choose Files\" and select your file\n\
             3. Click \"Upload\"",
            PROBE_PAGE
        ),
    }
}

/// Whole program: parse `args`, run against the real device, and return
/// the process exit code.
pub fn execute<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let request = match parse_args(args) {
        Ok(request) => request,
        Err(usage) => {
            usage.report();
            return usage.exit_code();
        }
    };

    println!(
        "fm-upload: {} -> {}:{}",
        request.local_path.display(),
        request.host,
        request.remote_name
    );

    let client = match FileManagerClient::new(&request.host, request.timeout) {
        Ok(client) => client,
        Err(e) => {
            console::error(format!("{:#}", e));
            println!("{}", manual_instructions(Some(&request)));
            return 1;
        }
    };

    match run(&request, &client) {
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!(step = e.step(), error = %e, "run aborted");
            console::error(&e);
            println!("{}", manual_instructions(Some(&request)));
            1
        }
    }
}
