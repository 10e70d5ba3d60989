//! # Interactive Prompts
//!
//! Line-oriented prompting for the values the command line left out.
//!
//! The [`Prompter`] is generic over its input and output streams so the
//! interactive flow can be driven from byte buffers in tests and from
//! stdin/stdout in the binary.

use std::io::{self, BufRead, Write};

use hdrgen_core::{GenError, GenResult};

/// How many times a required value is asked for before giving up
pub const MAX_ATTEMPTS: u32 = 10;

// ============================================================================
// Prompter
// ============================================================================

/// Reads interactive answers from `input`, writing prompts to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Create a prompter wired to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the trimmed answer.
    ///
    /// An empty or whitespace-only answer returns `None`, which callers
    /// treat as "use the default".
    pub fn ask(&mut self, prompt: &str) -> GenResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let answer = line.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    /// Ask until a non-empty answer arrives.
    ///
    /// Each empty answer echoes `empty_message` and asks again. After
    /// [`MAX_ATTEMPTS`] empty answers the whole run fails, so a closed
    /// stdin cannot loop forever.
    pub fn ask_required(&mut self, prompt: &str, empty_message: &str) -> GenResult<String> {
        for _ in 0..MAX_ATTEMPTS {
            if let Some(answer) = self.ask(prompt)? {
                return Ok(answer);
            }
            writeln!(self.output, "{}", empty_message)?;
        }

        Err(GenError::EmptyName {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Ask a yes/no question. Only `y` or `yes` (any case) count as yes;
    /// everything else, including an empty answer, is no.
    pub fn confirm(&mut self, prompt: &str) -> GenResult<bool> {
        match self.ask(prompt)? {
            Some(answer) => {
                let answer = answer.to_ascii_lowercase();
                Ok(answer == "y" || answer == "yes")
            }
            None => Ok(false),
        }
    }

    /// Print a line to the prompter's output stream.
    pub fn say(&mut self, message: &str) -> GenResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Consume the prompter and hand back its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

// ============================================================================
// Tests
// ============================================================================
