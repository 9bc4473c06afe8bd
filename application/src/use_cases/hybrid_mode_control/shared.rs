//! Steps shared by both control kinds.

use super::{ControlPorts, TransitionError};
use crate::ports::confirmation::ConfirmationRequest;
use crate::ports::transition_logger::TransitionEvent;
use hybridctl_domain::{ControlKind, FeatureError, HybridModeState, WarningCategory};
use serde_json::json;
use tracing::{debug, info, warn};

/// Port bundle plus the fixed control kind.
pub(super) struct ControlCore {
    ports: ControlPorts,
    kind: ControlKind,
}

impl ControlCore {
    pub(super) fn new(ports: ControlPorts, kind: ControlKind) -> Self {
        Self { ports, kind }
    }

    pub(super) fn kind(&self) -> ControlKind {
        self.kind
    }

    pub(super) fn ports(&self) -> &ControlPorts {
        &self.ports
    }

    pub(super) fn ensure_supported(&self, state: HybridModeState) -> Result<(), TransitionError> {
        if self.kind.supports(state) {
            Ok(())
        } else {
            Err(TransitionError::UnsupportedState {
                state,
                kind: self.kind,
            })
        }
    }

    pub(super) fn log_requested(&self, old: HybridModeState, new: HybridModeState) {
        info!("Hybrid mode change requested ({}): {} -> {}", self.kind, old, new);
        self.journal(
            "transition_requested",
            json!({ "control": self.kind, "old": old, "new": new }),
        );
    }

    /// Base transition step: commit `new` or fail.
    pub(super) async fn commit(&self, new: HybridModeState) -> Result<(), FeatureError> {
        debug!("Writing hybrid mode {}", new);
        match self.ports.feature.write_state(new).await {
            Ok(()) => {
                self.journal("state_committed", json!({ "state": new }));
                Ok(())
            }
            Err(e) => {
                warn!("Writing hybrid mode {} failed: {}", new, e);
                self.journal(
                    "write_failed",
                    json!({
                        "state": new,
                        "error": e.to_string(),
                        "igpu_mode": e.igpu_mode(),
                    }),
                );
                Err(e)
            }
        }
    }

    /// Show a classified write failure.
    pub(super) fn warn(&self, category: WarningCategory) {
        warn!("Hybrid mode change rejected by firmware: {:?}", category);
        self.ports
            .presenter
            .notify_warning(category.title(), category.message());
        self.journal("warned", json!({ "category": category }));
    }

    /// Re-read the active state and hand it to the presenter.
    pub(super) async fn refresh(&self) -> Result<HybridModeState, TransitionError> {
        let state = self.ports.feature.read_state().await?;
        debug!("Refreshed hybrid mode: {}", state);
        self.ports.presenter.show_state(state);
        self.journal("refreshed", json!({ "state": state }));
        Ok(state)
    }

    pub(super) async fn confirm_restart(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<bool, TransitionError> {
        debug!("Asking for restart confirmation: {}", request.title);
        let confirmed = self.ports.confirmation.confirm(request).await?;
        self.journal(
            if confirmed {
                "restart_confirmed"
            } else {
                "restart_declined"
            },
            json!({ "control": self.kind }),
        );
        Ok(confirmed)
    }

    pub(super) async fn restart(&self) -> Result<(), TransitionError> {
        info!("Restarting to apply hybrid mode");
        self.ports.restart.restart().await?;
        Ok(())
    }

    fn journal(&self, event_type: &'static str, payload: serde_json::Value) {
        self.ports
            .transition_logger
            .log(TransitionEvent::new(event_type, payload));
    }
}
