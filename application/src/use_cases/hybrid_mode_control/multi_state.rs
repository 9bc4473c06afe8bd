//! Multi-state control: Off / Auto / FullPowerOnly.
//!
//! Only transitions that enter or leave `Off` need a restart. Switching
//! between `Auto` and `FullPowerOnly` applies in place.

use super::shared::ControlCore;
use super::{ControlPorts, TransitionError};
use crate::ports::confirmation::ConfirmationRequest;
use hybridctl_domain::{
    ControlKind, HybridModeState, TransitionOutcome, TransitionRequest, classify_feature_error,
};
use tracing::debug;

/// Control for machines whose firmware exposes the integrated-GPU sub-mode.
pub struct MultiStateControl {
    core: ControlCore,
}

impl MultiStateControl {
    pub fn new(ports: ControlPorts) -> Self {
        Self {
            core: ControlCore::new(ports, ControlKind::MultiState),
        }
    }

    /// Apply one user-issued change.
    ///
    /// 1. Missing operand: no-op
    /// 2. Commit `new`; classified integrated-GPU failures end as a warning
    /// 3. Neither side `Off`: refresh, done
    /// 4. Otherwise ask to restart; restart, or refresh on decline
    pub async fn change(
        &self,
        request: TransitionRequest,
    ) -> Result<TransitionOutcome, TransitionError> {
        let Some((old, new)) = request.operands() else {
            debug!("Ignoring hybrid mode change with a missing value: {:?}", request);
            return Ok(TransitionOutcome::Ignored);
        };
        self.core.ensure_supported(new)?;
        self.core.log_requested(old, new);

        if let Err(e) = self.core.commit(new).await {
            return match classify_feature_error(&e) {
                Some(category) => {
                    self.core.warn(category);
                    Ok(TransitionOutcome::Warned(category))
                }
                None => Err(e.into()),
            };
        }

        if !request.touches_off() {
            self.core.refresh().await?;
            return Ok(TransitionOutcome::Refreshed(new));
        }

        let display_name = self.core.ports().presenter.display_name(new);
        let prompt = ConfirmationRequest::multi_state_restart(&display_name);
        if self.core.confirm_restart(&prompt).await? {
            self.core.restart().await?;
            Ok(TransitionOutcome::RestartRequested(new))
        } else {
            // The display may still show the pre-change value
            self.core.refresh().await?;
            Ok(TransitionOutcome::RestartDeclined(new))
        }
    }

    pub async fn refresh(&self) -> Result<HybridModeState, TransitionError> {
        self.core.refresh().await
    }

    pub fn kind(&self) -> ControlKind {
        self.core.kind()
    }
}
