//! Confirmation port for restart-required transitions.
//!
//! When a committed hybrid mode change only takes effect after a restart,
//! the control asks the user whether to restart now or later.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ConfirmationPort`] - defined here in application layer
//! - **Adapter**: `InteractiveConfirmation` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! write_state(new) ok
//!        ↓
//! restart required?
//!        ↓ yes
//! ConfirmationPort::confirm("Restart required", ...)
//!        ↓
//! true  → RestartPort::restart()
//! false → refresh (multi-state) / nothing (binary)
//! ```
//!
//! # Built-in Implementations
//!
//! - [`AutoConfirm`] - Always answers "restart now"
//! - [`AutoDecline`] - Always answers "restart later"

use async_trait::async_trait;

/// Error type for confirmation prompts.
///
/// These errors represent failures of the prompt itself, not the user's
/// answer.
#[derive(Debug, Clone)]
pub enum ConfirmationError {
    /// User cancelled the prompt (e.g., via Ctrl+D).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
}

impl std::fmt::Display for ConfirmationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmationError::Cancelled => write!(f, "Prompt cancelled"),
            ConfirmationError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConfirmationError {}

/// Texts shown by a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub title: String,
    pub message: String,
    /// Label of the answer that returns `true`.
    pub affirmative: String,
    /// Label of the answer that returns `false`.
    pub negative: String,
}

impl ConfirmationRequest {
    pub const RESTART_NOW: &'static str = "Restart now";
    pub const RESTART_LATER: &'static str = "Restart later";

    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            affirmative: Self::RESTART_NOW.to_string(),
            negative: Self::RESTART_LATER.to_string(),
        }
    }

    /// Prompt of the multi-state control; names the newly selected mode.
    pub fn multi_state_restart(display_name: &str) -> Self {
        Self::new(
            "Restart required",
            format!(
                "Hybrid mode was set to {}. Restart your device to finish applying it.",
                display_name
            ),
        )
    }

    /// Prompt of the binary control.
    pub fn binary_restart() -> Self {
        Self::new(
            "Restart required",
            "Changing hybrid mode requires a restart. Restart your device to apply it.",
        )
    }
}

/// Port for asking the user to confirm an action.
///
/// # Implementations
///
/// - **Interactive (CLI)**: `InteractiveConfirmation` in presentation layer
/// - **Always yes**: [`AutoConfirm`]
/// - **Always no**: [`AutoDecline`]
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// Returns `true` for the affirmative answer, `false` for the negative one.
    async fn confirm(&self, request: &ConfirmationRequest) -> Result<bool, ConfirmationError>;
}

/// Answers every prompt affirmatively (`--yes`).
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationPort for AutoConfirm {
    async fn confirm(&self, _request: &ConfirmationRequest) -> Result<bool, ConfirmationError> {
        Ok(true)
    }
}

/// Answers every prompt negatively (`--no-restart`).
///
/// This is the safe non-interactive mode: the change is committed and the
/// restart is left to the user.
pub struct AutoDecline;

#[async_trait]
impl ConfirmationPort for AutoDecline {
    async fn confirm(&self, _request: &ConfirmationRequest) -> Result<bool, ConfirmationError> {
        Ok(false)
    }
}
