//! Console output for hybrid mode state and transitions

use crate::output::formatter::{OutputFormatter, StatusReport, TransitionReport};
use colored::Colorize;
use hybridctl_application::ModePresenter;
use hybridctl_domain::{HybridModeState, OutputFormat, TransitionOutcome};

/// Human-readable name of a state.
pub fn display_name(state: HybridModeState) -> &'static str {
    match state {
        HybridModeState::Off => "Off",
        HybridModeState::On => "On",
        HybridModeState::Auto => "Auto",
        HybridModeState::FullPowerOnly => "Full power only",
    }
}

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn state_label(state: HybridModeState) -> String {
        let name = display_name(state);
        if state.is_off() {
            name.yellow().bold().to_string()
        } else {
            name.green().bold().to_string()
        }
    }

    fn outcome_line(report: &TransitionReport) -> String {
        match report.outcome {
            TransitionOutcome::Ignored => format!(
                "{} Hybrid mode is already {}",
                "-".dimmed(),
                Self::state_label(report.requested)
            ),
            TransitionOutcome::Refreshed(_) => {
                format!("{} Applied without restart", "v".green())
            }
            TransitionOutcome::RestartRequested(state) => format!(
                "{} Hybrid mode set to {}, restarting...",
                "v".green(),
                Self::state_label(state)
            ),
            TransitionOutcome::RestartDeclined(state) => format!(
                "{} Hybrid mode set to {}. {}",
                "v".green(),
                Self::state_label(state),
                "Restart your device to apply it.".yellow()
            ),
            TransitionOutcome::Warned(category) => {
                format!("{} {}", "x".red(), category.title().red())
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_status(&self, report: &StatusReport) -> String {
        let supported = report
            .supported_states
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        // The state line itself comes from the presenter's refresh
        format!(
            "{} {}\n{} {}",
            "Control:".cyan().bold(),
            report.control,
            "Available:".cyan().bold(),
            supported
        )
    }

    fn format_transition(&self, report: &TransitionReport) -> String {
        Self::outcome_line(report)
    }
}

/// Presenter that writes to the terminal.
///
/// In JSON mode state updates are left to the final report so stdout stays
/// a single document. Warnings always go to stderr.
pub struct ConsolePresenter {
    format: OutputFormat,
}

impl ConsolePresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ModePresenter for ConsolePresenter {
    fn display_name(&self, state: HybridModeState) -> String {
        display_name(state).to_string()
    }

    fn show_state(&self, state: HybridModeState) {
        if self.format == OutputFormat::Text {
            println!(
                "{} {}",
                "Hybrid mode:".cyan().bold(),
                ConsoleFormatter::state_label(state)
            );
        }
    }

    fn notify_warning(&self, title: &str, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), title.bold());
        eprintln!("  {}", message);
    }
}
