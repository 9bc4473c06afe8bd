//! Presentation-level configuration
//!
//! Resolves how output is rendered from CLI flags and the `[output]` section.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::{JsonFormatter, OutputFormatter};
use hybridctl_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the probe spinner
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over the file; JSON output never shows a spinner.
    pub fn resolve(
        cli_format: Option<CliOutputFormat>,
        quiet: bool,
        file_format: Option<OutputFormat>,
        file_color: bool,
    ) -> Self {
        let format = cli_format
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();
        Self {
            format,
            color: file_color && format == OutputFormat::Text,
            show_progress: !quiet && format == OutputFormat::Text,
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(ConsoleFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}
