//! Spinner shown while the capability probe runs

use colored::Colorize;
use hybridctl_domain::ControlKind;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for the one-shot capability probe.
///
/// Disabled instances do nothing, so callers never branch on quiet mode.
pub struct ProbeProgress {
    bar: Option<ProgressBar>,
}

impl ProbeProgress {
    pub fn new(enabled: bool) -> Self {
        Self {
            bar: enabled.then(ProgressBar::new_spinner),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn start(&self) {
        if let Some(pb) = &self.bar {
            pb.set_style(Self::spinner_style());
            pb.set_message("Probing hybrid mode support...");
            pb.enable_steady_tick(Duration::from_millis(100));
        }
    }

    pub fn finish(&self, kind: ControlKind) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
            eprintln!("{} {} hybrid mode control", "v".green(), kind);
        }
    }

    pub fn fail(&self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }
}
