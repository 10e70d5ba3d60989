//! # hdrgen CLI
//!
//! Command-line interface for hdrgen.
//!
//! This crate wires argument parsing, interactive prompts, and the
//! generation pipeline together for the `hdrgen` binary.
//!
//! ## Flow
//!
//! - `args` - clap definitions; every positional is optional
//! - `prompt` - asks for whatever the command line left out
//! - `run` - assembles the request, gates overwrites, writes the header
//!

pub mod args;
pub mod prompt;
pub mod run;

pub use args::Cli;
pub use prompt::Prompter;
pub use run::{RunOutcome, execute, run};

// Re-export dependencies for use in main.rs
pub use hdrgen_codegen;
pub use hdrgen_core;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");
