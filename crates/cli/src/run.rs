//! # CLI Execution
//!
//! The interactive flow behind the `hdrgen` binary.
//!
//! Arguments left off the command line are prompted for in the same
//! order every time: file name, alternate directory, namespace. The
//! assembled request then runs through the generator, and a non-empty
//! existing file is only replaced after an explicit yes.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use hdrgen_codegen::{Generator, GeneratorConfig};
use hdrgen_core::{GenResult, HeaderRequest};

use crate::args::Cli;
use crate::prompt::Prompter;

// ============================================================================
// Prompts and messages
// ============================================================================

/// Prompt for the header file name.
pub const NAME_PROMPT: &str = "File name: ";

/// Prompt for the alternate output directory.
pub const DIRECTORY_PROMPT: &str = "Change to alternate directory first [current directory]: ";

/// Prompt for the namespace.
pub const NAMESPACE_PROMPT: &str = "Namespace to create [none]: ";

/// Prompt shown before replacing a non-empty file.
pub const OVERWRITE_PROMPT: &str = "File exists and is not empty, overwrite it? [no] ";

/// Echoed every time the name prompt gets an empty answer.
pub const MSG_EMPTY_NAME: &str = "No file name given.";

/// Printed when the user confirms an overwrite.
pub const MSG_OVERWRITING: &str = "Overwriting file.";

/// Printed when the user declines an overwrite.
pub const MSG_NOT_OVERWRITING: &str = "Not overwriting file.";

// ============================================================================
// RunOutcome
// ============================================================================

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The header was written to the given path.
    Written { path: PathBuf },
    /// The user declined to overwrite an existing file.
    Declined,
}

// ============================================================================
// Entry points
// ============================================================================

/// Parse arguments, run the interactive flow, and map the result to an
/// exit code.
///
/// A declined overwrite is a normal ending, not a failure. Errors are
/// printed to stderr and turn into a non-zero exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let mut prompter = Prompter::stdio();

    match execute(cli, &mut prompter) {
        Ok(RunOutcome::Written { path }) => {
            tracing::info!(path = %path.display(), "done");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Declined) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Run the interactive flow with the given prompter.
///
/// Values already present on the command line are used as-is and not
/// prompted for, so fully scripted runs never touch stdin.
pub fn execute<R: BufRead, W: Write>(
    cli: Cli,
    prompter: &mut Prompter<R, W>,
) -> GenResult<RunOutcome> {
    // ── 1. Fill in missing values ────────────────────────────────────────
    let name = match cli.name {
        Some(name) => name,
        None => prompter.ask_required(NAME_PROMPT, MSG_EMPTY_NAME)?,
    };

    let directory = match cli.directory {
        Some(directory) => Some(directory),
        None => prompter.ask(DIRECTORY_PROMPT)?.map(PathBuf::from),
    };

    // Templates without a namespace slot skip the namespace question.
    let namespace = match cli.namespace {
        Some(namespace) => Some(namespace),
        None if cli.template.takes_namespace() => prompter.ask(NAMESPACE_PROMPT)?,
        None => None,
    };

    // ── 2. Assemble the request ──────────────────────────────────────────
    let mut request = HeaderRequest::new(name).with_template(cli.template);
    if let Some(directory) = directory {
        request = request.with_directory(directory);
    }
    if let Some(namespace) = namespace {
        request = request.with_namespace(namespace);
    }

    if !request.template.takes_namespace() {
        if let Some(ns) = request.namespace() {
            eprintln!(
                "{} namespace '{}' is ignored by the {} template",
                "warning:".yellow().bold(),
                ns,
                request.template,
            );
        }
    }

    // ── 3. Prepare and write ─────────────────────────────────────────────
    let mut config = GeneratorConfig::new();
    if cli.force {
        config = config.allow_overwrite();
    }
    let generator = Generator::new(config);

    let header = generator.prepare(&request)?;

    if generator.needs_confirmation(&header) {
        if prompter.confirm(OVERWRITE_PROMPT)? {
            prompter.say(MSG_OVERWRITING)?;
        } else {
            prompter.say(MSG_NOT_OVERWRITING)?;
            tracing::info!(path = %header.path.display(), "write declined");
            return Ok(RunOutcome::Declined);
        }
    }

    header.write_to_disk()?;

    Ok(RunOutcome::Written { path: header.path })
}

// ============================================================================
// Tests
// ============================================================================
