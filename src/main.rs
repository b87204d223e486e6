// Entrypoint for the CLI application.
// - Keeps `main` small: set up diagnostics, then hand the arguments to
//   `upload::execute`, which returns the exit code.
// - Diagnostics go to stderr and are off unless `RUST_LOG` asks for them.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = fm_upload::upload::execute(std::env::args_os());
    std::process::exit(code);
}
