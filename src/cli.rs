// Command line: `fm-upload <localfile> <host>:[remote-filename]`.
//
// `-h`/`--help` anywhere on the line wins, so it is checked before clap
// sees the arguments. clap then handles arity, and the `host:[name]` split
// is done afterwards. Both positionals accept values starting with `-`.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::UploadRequest;
use crate::console;

const EXAMPLES: &str = "\
Examples:
  fm-upload dashboard.html dsmr-mw9.local:
  fm-upload dashboard.html 192.168.1.100:
  fm-upload style.css dsmr-mw9.local:custom.css
  fm-upload app.js 192.168.1.100:application.js

Note: Remote filename is optional. If omitted, uses the local filename.
The colon (:) is required even when remote filename is omitted.";

#[derive(Parser, Debug)]
#[command(
    name = "fm-upload",
    version,
    about = "FileManager Upload Tool\n\nUpload files to ESP32 FileManager with SCP-like syntax.",
    after_help = EXAMPLES,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to local file to upload
    #[arg(value_name = "localfile", allow_hyphen_values = true)]
    pub local_file: PathBuf,

    /// Target hostname or IP address, optionally followed by the remote
    /// filename (defaults to the local filename)
    #[arg(value_name = "host:[remote-filename]", allow_hyphen_values = true)]
    pub target: String,
}

/// Why parsing stopped short of an `UploadRequest`.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Help or version was asked for; the text is ready to print.
    #[error("{0}")]
    Info(String),

    #[error("{message}")]
    Invalid { message: String, show_help: bool },
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        match self {
            UsageError::Info(_) => 0,
            UsageError::Invalid { .. } => 1,
        }
    }

    /// Print the help text, or the error followed by help when useful.
    pub fn report(&self) {
        match self {
            UsageError::Info(text) => print!("{}", text),
            UsageError::Invalid { message, show_help } => {
                console::error(message);
                if *show_help {
                    println!();
                    println!("{}", help_text());
                }
            }
        }
    }
}

pub fn help_text() -> String {
    Cli::command().render_long_help().to_string()
}

/// Split `host[:remote-name]`. An empty or missing name is `None`.
pub fn parse_target(spec: &str) -> Result<(String, Option<String>), UsageError> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() > 2 {
        return Err(UsageError::Invalid {
            message: "Invalid host specification. Use format: host:[remote-filename]".into(),
            show_help: false,
        });
    }
    if parts[0].is_empty() {
        return Err(UsageError::Invalid {
            message: "Host cannot be empty".into(),
            show_help: false,
        });
    }
    let name = parts
        .get(1)
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string());
    Ok((parts[0].to_string(), name))
}

/// Turn the raw argument list (program name first) into a request.
pub fn parse_args<I, T>(args: I) -> Result<UploadRequest, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        return Err(UsageError::Info(help_text()));
    }

    let cli = Cli::try_parse_from(args).map_err(from_clap)?;
    let (host, remote_name) = parse_target(&cli.target)?;
    Ok(UploadRequest::new(cli.local_file, host, remote_name))
}

fn from_clap(err: clap::Error) -> UsageError {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => UsageError::Info(err.to_string()),
        ErrorKind::MissingRequiredArgument => UsageError::Invalid {
            message: "Missing required arguments".into(),
            show_help: true,
        },
        _ => UsageError::Invalid {
            message: first_line(&err.to_string()),
            show_help: true,
        },
    }
}

// "error: unexpected argument 'x' found\n\nUsage: ..." -> "unexpected argument 'x' found"
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
