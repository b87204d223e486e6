// Library root
// -----------
// This crate exposes the pieces of the `fm-upload` CLI so they can be
// tested without spawning the binary.
//
// Module responsibilities:
// - `cli`: Parses `<localfile> <host>:[remote-filename]` into an
//   `UploadRequest`, or decides to show help / a usage error.
// - `config`: Fixed defaults (timeout, port, endpoints) and `UploadRequest`.
// - `console`: Timestamped, colored log lines.
// - `local_file`: Checks the file to upload.
// - `multipart`: Builds the `up[]` form body and picks the content type.
// - `api`: Talks HTTP to the device's file manager (probe, upload, verify).
// - `error`: Fatal step failures and the non-fatal verification outcome.
// - `upload`: Runs the steps in order and prints manual fallback steps.
pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod local_file;
pub mod multipart;
pub mod upload;
