//! Output formatter trait and the reports it renders

use hybridctl_domain::{ControlKind, HybridModeState, TransitionOutcome, WarningCategory};
use serde::Serialize;

/// What `hybridctl` prints when no state is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub control: ControlKind,
    pub state: HybridModeState,
    pub supported_states: Vec<HybridModeState>,
}

impl StatusReport {
    pub fn new(control: ControlKind, state: HybridModeState) -> Self {
        Self {
            control,
            state,
            supported_states: control.supported_states().to_vec(),
        }
    }
}

/// What `hybridctl <STATE>` prints after the transition ran.
///
/// `state` is the committed mode and `warning` the firmware rejection, so a
/// warning category never shows up where a mode is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionReport {
    pub control: ControlKind,
    pub old: HybridModeState,
    pub requested: HybridModeState,
    #[serde(serialize_with = "outcome_name")]
    pub outcome: TransitionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HybridModeState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<WarningCategory>,
    pub restart_pending: bool,
}

fn outcome_name<S: serde::Serializer>(
    outcome: &TransitionOutcome,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(outcome.as_str())
}

impl TransitionReport {
    pub fn new(
        control: ControlKind,
        old: HybridModeState,
        requested: HybridModeState,
        outcome: TransitionOutcome,
    ) -> Self {
        Self {
            control,
            old,
            requested,
            state: outcome.committed_state(),
            warning: outcome.warning(),
            restart_pending: outcome.is_restart_pending(),
            outcome,
        }
    }
}

/// Trait for rendering reports
pub trait OutputFormatter: Send + Sync {
    fn format_status(&self, report: &StatusReport) -> String;

    fn format_transition(&self, report: &TransitionReport) -> String;
}

/// Renders reports as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_status(&self, report: &StatusReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_transition(&self, report: &TransitionReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}
