//! Presentation layer for hybridctl
//!
//! This crate contains CLI definitions, output formatters, the console
//! presenter, the interactive restart prompt and the probe spinner.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{CapabilityArg, Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::console::{ConsoleFormatter, ConsolePresenter, display_name};
pub use output::formatter::{JsonFormatter, OutputFormatter, StatusReport, TransitionReport};
pub use progress::reporter::ProbeProgress;
pub use prompt::confirmation::InteractiveConfirmation;
