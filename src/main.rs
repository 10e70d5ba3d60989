//! hdrgen
//!
//! Interactive generator for boilerplate C/C++ header files.
//!
//! This is the main entry point for the `hdrgen` binary.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize logging. Diagnostics go to stderr so prompts and
    // messages on stdout stay clean for interactive use and piping.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = hdrgen_cli::VERSION, "starting");

    hdrgen_cli::run()
}
