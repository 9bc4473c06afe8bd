//! Binary control: hybrid mode on or off.
//!
//! Every change flips the panel wiring, so every change asks for a restart.
//! A declined restart leaves the display alone: with two states the value
//! just written is the one already shown.

use super::shared::ControlCore;
use super::{ControlPorts, TransitionError};
use crate::ports::confirmation::ConfirmationRequest;
use hybridctl_domain::{ControlKind, HybridModeState, TransitionOutcome, TransitionRequest};
use tracing::debug;

/// Control for machines with a plain hybrid mode switch.
pub struct BinaryControl {
    core: ControlCore,
}

impl BinaryControl {
    /// State written when the switch is turned on.
    pub const ON_STATE: HybridModeState = HybridModeState::On;
    /// State written when the switch is turned off.
    pub const OFF_STATE: HybridModeState = HybridModeState::Off;

    pub fn new(ports: ControlPorts) -> Self {
        Self {
            core: ControlCore::new(ports, ControlKind::Binary),
        }
    }

    /// Flip the switch to `enabled`.
    pub async fn toggle(&self, enabled: bool) -> Result<TransitionOutcome, TransitionError> {
        let (old, new) = if enabled {
            (Self::OFF_STATE, Self::ON_STATE)
        } else {
            (Self::ON_STATE, Self::OFF_STATE)
        };
        self.change(TransitionRequest::new(old, new)).await
    }

    /// Apply one change: commit, then always ask to restart.
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

        self.core.commit(new).await?;

        if self
            .core
            .confirm_restart(&ConfirmationRequest::binary_restart())
            .await?
        {
            self.core.restart().await?;
            Ok(TransitionOutcome::RestartRequested(new))
        } else {
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

#[cfg(test)]
mod tests {
    use super::super::test_support::{Call, Harness};
    use super::*;
    use hybridctl_domain::{FeatureError, IgpuModeState};
    use HybridModeState::*;

    fn control(harness: &Harness) -> BinaryControl {
        BinaryControl::new(harness.ports())
    }

    #[tokio::test]
    async fn test_off_to_on_confirmed_scenario() {
        let harness = Harness::new(Off, true);
        let outcome = control(&harness)
            .change(TransitionRequest::new(Off, On))
            .await
            .unwrap();

        assert_eq!(outcome, TransitionOutcome::RestartRequested(On));
        assert_eq!(harness.recorder.confirm_count(), 1);
        assert_eq!(harness.recorder.restart_count(), 1);
        assert_eq!(harness.recorder.show_count(), 0);
        assert_eq!(harness.recorder.calls()[0], Call::Write(On));
        assert_eq!(harness.recorder.calls()[2], Call::Restart);
    }

    #[tokio::test]
    async fn test_every_toggle_prompts_once() {
        for enabled in [true, false] {
            for answer in [true, false] {
                let harness = Harness::new(Off, answer);
                let outcome = control(&harness).toggle(enabled).await.unwrap();

                let expected_state = if enabled { On } else { Off };
                assert_eq!(harness.recorder.confirm_count(), 1);
                assert_eq!(harness.recorder.calls()[0], Call::Write(expected_state));
                if answer {
                    assert_eq!(outcome, TransitionOutcome::RestartRequested(expected_state));
                    assert_eq!(harness.recorder.restart_count(), 1);
                } else {
                    assert_eq!(outcome, TransitionOutcome::RestartDeclined(expected_state));
                    assert_eq!(harness.recorder.restart_count(), 0);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_declined_makes_no_further_call() {
        let harness = Harness::new(On, false);
        control(&harness).toggle(false).await.unwrap();

        let calls = harness.recorder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Write(Off));
        assert!(matches!(calls[1], Call::Confirm { .. }));
    }

    #[tokio::test]
    async fn test_prompt_text_is_fixed() {
        let harness = Harness::new(Off, false);
        control(&harness).toggle(true).await.unwrap();

        let expected = ConfirmationRequest::binary_restart();
        assert_eq!(harness.recorder.confirm_messages(), vec![expected.message]);
    }

    #[tokio::test]
    async fn test_missing_operand_is_ignored() {
        let harness = Harness::new(Off, true);
        let outcome = control(&harness)
            .change(TransitionRequest::from_options(Some(Off), None))
            .await
            .unwrap();

        assert_eq!(outcome, TransitionOutcome::Ignored);
        assert!(harness.recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_multi_state_values_are_rejected() {
        let harness = Harness::new(Off, true);
        for new in [Auto, FullPowerOnly] {
            let err = control(&harness)
                .change(TransitionRequest::new(Off, new))
                .await
                .unwrap_err();
            assert!(matches!(err, TransitionError::UnsupportedState { .. }));
        }
        assert!(harness.recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_is_not_classified() {
        let harness = Harness::failing(
            Off,
            FeatureError::IgpuModeChange {
                sub_mode: IgpuModeState::Auto,
            },
        );
        let err = control(&harness).toggle(true).await.unwrap_err();

        assert!(matches!(err, TransitionError::Feature(_)));
        assert_eq!(harness.recorder.warn_count(), 0);
        assert_eq!(harness.recorder.confirm_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_toggle_records_same_calls() {
        let harness = Harness::new(Off, true);
        let control = control(&harness);

        control.toggle(true).await.unwrap();
        let first = harness.recorder.take();
        control.toggle(true).await.unwrap();
        let second = harness.recorder.take();

        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_state_mapping() {
        assert_eq!(BinaryControl::ON_STATE, On);
        assert_eq!(BinaryControl::OFF_STATE, Off);
    }
}
