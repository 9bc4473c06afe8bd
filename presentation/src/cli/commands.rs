//! CLI command definitions

use clap::{Parser, ValueEnum};
use hybridctl_domain::{ControlKind, HybridModeState};
use std::path::PathBuf;

/// Output format for state and transition reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormat> for hybridctl_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => hybridctl_domain::OutputFormat::Text,
            OutputFormat::Json => hybridctl_domain::OutputFormat::Json,
        }
    }
}

/// Capability override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CapabilityArg {
    /// Probe the driver attributes
    Auto,
    /// Off / Auto / Full power only
    MultiState,
    /// On / Off
    Binary,
}

impl CapabilityArg {
    /// The forced control kind, or `None` to probe.
    pub fn control_kind(&self) -> Option<ControlKind> {
        match self {
            CapabilityArg::Auto => None,
            CapabilityArg::MultiState => Some(ControlKind::MultiState),
            CapabilityArg::Binary => Some(ControlKind::Binary),
        }
    }
}

fn parse_state(s: &str) -> Result<HybridModeState, String> {
    s.parse::<HybridModeState>().map_err(|e| e.to_string())
}

/// CLI arguments for hybridctl
#[derive(Parser, Debug)]
#[command(name = "hybridctl")]
#[command(author, version, about = "Show or change the hybrid graphics mode")]
#[command(long_about = r#"
hybridctl shows or changes the hybrid graphics mode of laptops whose firmware
lets the discrete GPU drive the panel directly.

Machines with an integrated-GPU sub-mode offer: off, auto, full-power-only.
Other machines offer: on, off.

Entering or leaving "off" only takes effect after a restart; you are asked
whether to restart now.

Configuration files are loaded from (in priority order):
1. HYBRIDCTL_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./hybridctl.toml    Project-level config
4. ~/.config/hybridctl/config.toml   Global config

Example:
  hybridctl
  hybridctl auto
  hybridctl off --yes
  hybridctl on --no-restart --output json
"#)]
pub struct Cli {
    /// State to switch to (off, on, auto, full-power-only); omit to show the current state
    #[arg(value_parser = parse_state)]
    pub state: Option<HybridModeState>,

    /// Restart without asking when the change requires it
    #[arg(short, long, conflicts_with = "no_restart")]
    pub yes: bool,

    /// Never restart; the change applies on the next boot
    #[arg(long)]
    pub no_restart: bool,

    /// Skip the capability probe and force a control kind
    #[arg(long, value_enum, value_name = "KIND")]
    pub capability: Option<CapabilityArg>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
