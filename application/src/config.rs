//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave
//! when no human is asked directly.

use crate::ports::confirmation::{AutoConfirm, AutoDecline, ConfirmationPort};
use std::sync::Arc;

/// How restart confirmations are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmPolicy {
    /// Ask the user every time (default).
    #[default]
    Ask,
    /// Restart without asking.
    Always,
    /// Never restart; leave it to the user.
    Never,
}

impl ConfirmPolicy {
    /// The non-interactive port for this policy, or `None` for [`ConfirmPolicy::Ask`].
    pub fn fixed_port(&self) -> Option<Arc<dyn ConfirmationPort>> {
        match self {
            ConfirmPolicy::Ask => None,
            ConfirmPolicy::Always => Some(Arc::new(AutoConfirm)),
            ConfirmPolicy::Never => Some(Arc::new(AutoDecline)),
        }
    }
}

impl std::fmt::Display for ConfirmPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmPolicy::Ask => write!(f, "ask"),
            ConfirmPolicy::Always => write!(f, "always"),
            ConfirmPolicy::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ConfirmPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ask" | "prompt" => Ok(ConfirmPolicy::Ask),
            "always" | "yes" => Ok(ConfirmPolicy::Always),
            "never" | "no" => Ok(ConfirmPolicy::Never),
            _ => Err(format!("Invalid ConfirmPolicy: {}", s)),
        }
    }
}
