//! Interactive restart confirmation for the terminal.
//!
//! When a committed change needs a restart, the user sees:
//!
//! ```text
//! Restart required
//! Hybrid mode was set to Off. Restart your device to finish applying it.
//!
//!   [y] Restart now
//!   [n] Restart later
//!
//! restart> _
//! ```
//!
//! The prompt is written to stderr so stdout stays machine-readable.
//!
//! | Input | Aliases | Answer |
//! |-------|---------|--------|
//! | `y` | `yes`, `now`, `restart` | restart now |
//! | `n` | `no`, `later` | restart later |
//!
//! End of input (Ctrl+D) cancels the prompt.

use async_trait::async_trait;
use colored::Colorize;
use hybridctl_application::{ConfirmationError, ConfirmationPort, ConfirmationRequest};
use std::io::{self, BufRead, Write};

/// Terminal-based [`ConfirmationPort`].
pub struct InteractiveConfirmation;

impl InteractiveConfirmation {
    pub fn new() -> Self {
        Self
    }

    fn display_prompt(request: &ConfirmationRequest, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", request.title.yellow().bold())?;
        writeln!(out, "{}", request.message)?;
        writeln!(out)?;
        writeln!(out, "  {} {}", "[y]".green(), request.affirmative)?;
        writeln!(out, "  {} {}", "[n]".red(), request.negative)?;
        writeln!(out)
    }

    /// Ask until the answer is understood.
    pub(crate) fn ask(
        request: &ConfirmationRequest,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<bool, ConfirmationError> {
        Self::display_prompt(request, out)
            .map_err(|e| ConfirmationError::IoError(format!("Failed to write prompt: {}", e)))?;

        loop {
            write!(out, "{} ", "restart>".magenta().bold())
                .and_then(|_| out.flush())
                .map_err(|e| {
                    ConfirmationError::IoError(format!("Failed to flush prompt: {}", e))
                })?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .map_err(|e| ConfirmationError::IoError(format!("Failed to read input: {}", e)))?;
            if read == 0 {
                return Err(ConfirmationError::Cancelled);
            }

            match parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None if line.trim().is_empty() => continue,
                None => {
                    let _ = writeln!(
                        out,
                        "{} Unknown answer: {} (use y or n)",
                        "!".yellow(),
                        line.trim().red()
                    );
                }
            }
        }
    }
}

impl Default for InteractiveConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "now" | "restart" => Some(true),
        "n" | "no" | "later" => Some(false),
        _ => None,
    }
}

#[async_trait]
impl ConfirmationPort for InteractiveConfirmation {
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool, ConfirmationError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stderr();
        Self::ask(request, &mut input, &mut out)
    }
}
