//! Presentation port
//!
//! The display sink a control reports to. Implementations live in the
//! presentation layer and can render state in various ways (console,
//! JSON, desktop notification).

use hybridctl_domain::HybridModeState;

/// Display sink for a hybrid mode control
pub trait ModePresenter: Send + Sync {
    /// Human-readable name of a state.
    fn display_name(&self, state: HybridModeState) -> String;

    /// Show the state that is currently active.
    fn show_state(&self, state: HybridModeState);

    /// Show a transient warning. Fire-and-forget.
    fn notify_warning(&self, title: &str, message: &str);
}
