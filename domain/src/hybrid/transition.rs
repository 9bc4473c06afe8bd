//! Transition request and outcome value objects.

use crate::hybrid::classifier::WarningCategory;
use crate::hybrid::state::HybridModeState;

/// One user-initiated change, consumed exactly once by a control.
///
/// Either side may be missing when the caller has not loaded a value yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub old: Option<HybridModeState>,
    pub new: Option<HybridModeState>,
}

impl TransitionRequest {
    pub fn new(old: HybridModeState, new: HybridModeState) -> Self {
        Self {
            old: Some(old),
            new: Some(new),
        }
    }

    pub fn from_options(old: Option<HybridModeState>, new: Option<HybridModeState>) -> Self {
        Self { old, new }
    }

    /// Both endpoints, or `None` if either is absent.
    pub fn operands(&self) -> Option<(HybridModeState, HybridModeState)> {
        Some((self.old?, self.new?))
    }

    /// Both endpoints are present and equal.
    pub fn is_unchanged(&self) -> bool {
        matches!(self.operands(), Some((old, new)) if old == new)
    }

    /// Whether the transition enters or leaves `Off`.
    ///
    /// Switching among the non-off states never needs a restart.
    pub fn touches_off(&self) -> bool {
        matches!(self.operands(), Some((old, new)) if old.is_off() || new.is_off())
    }
}

/// How a transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// An operand was missing; nothing was written.
    Ignored,
    /// Committed without needing a restart; the display was refreshed.
    Refreshed(HybridModeState),
    /// Committed and the user confirmed the restart.
    RestartRequested(HybridModeState),
    /// Committed but the user postponed the restart.
    RestartDeclined(HybridModeState),
    /// The write failed for a known integrated-GPU reason; a warning was shown.
    Warned(WarningCategory),
}

impl TransitionOutcome {
    /// The committed state, when the write went through.
    pub fn committed_state(&self) -> Option<HybridModeState> {
        match self {
            TransitionOutcome::Refreshed(s)
            | TransitionOutcome::RestartRequested(s)
            | TransitionOutcome::RestartDeclined(s) => Some(*s),
            TransitionOutcome::Ignored | TransitionOutcome::Warned(_) => None,
        }
    }

    /// Stable snake_case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionOutcome::Ignored => "ignored",
            TransitionOutcome::Refreshed(_) => "refreshed",
            TransitionOutcome::RestartRequested(_) => "restart_requested",
            TransitionOutcome::RestartDeclined(_) => "restart_declined",
            TransitionOutcome::Warned(_) => "warned",
        }
    }

    pub fn warning(&self) -> Option<WarningCategory> {
        match self {
            TransitionOutcome::Warned(category) => Some(*category),
            _ => None,
        }
    }

    pub fn is_restart_pending(&self) -> bool {
        matches!(self, TransitionOutcome::RestartDeclined(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HybridModeState::*;

    #[test]
    fn test_operands_require_both_sides() {
        assert_eq!(TransitionRequest::new(Off, Auto).operands(), Some((Off, Auto)));
        assert_eq!(TransitionRequest::from_options(None, Some(Auto)).operands(), None);
        assert_eq!(TransitionRequest::from_options(Some(Off), None).operands(), None);
    }

    #[test]
    fn test_touches_off() {
        assert!(TransitionRequest::new(Off, Auto).touches_off());
        assert!(TransitionRequest::new(FullPowerOnly, Off).touches_off());
        assert!(TransitionRequest::new(Off, Off).touches_off());
        assert!(!TransitionRequest::new(Auto, FullPowerOnly).touches_off());
        assert!(!TransitionRequest::from_options(None, Some(Off)).touches_off());
    }

    #[test]
    fn test_committed_state() {
        assert_eq!(TransitionOutcome::Refreshed(Auto).committed_state(), Some(Auto));
        assert_eq!(TransitionOutcome::Ignored.committed_state(), None);
        assert_eq!(
            TransitionOutcome::Warned(WarningCategory::Auto).committed_state(),
            None
        );
    }

    #[test]
    fn test_is_unchanged() {
        assert!(TransitionRequest::new(Off, Off).is_unchanged());
        assert!(!TransitionRequest::new(Off, Auto).is_unchanged());
        assert!(!TransitionRequest::from_options(None, None).is_unchanged());
    }

    #[test]
    fn test_outcome_names_and_warning() {
        assert_eq!(TransitionOutcome::RestartDeclined(Off).as_str(), "restart_declined");
        assert_eq!(TransitionOutcome::Ignored.as_str(), "ignored");
        assert_eq!(
            TransitionOutcome::Warned(WarningCategory::Auto).warning(),
            Some(WarningCategory::Auto)
        );
        assert_eq!(TransitionOutcome::Refreshed(Auto).warning(), None);
    }
}
