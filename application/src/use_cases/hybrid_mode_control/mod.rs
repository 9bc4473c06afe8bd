//! Hybrid mode control use case.
//!
//! A control owns one hybrid mode setting and drives every change to it:
//!
//! ```text
//! CapabilityProbe::probe()
//!        ↓
//! HybridModeControl::select()  ── MultiState | Binary (fixed for the lifetime)
//!        ↓
//! change(old → new)
//!        ↓
//! HybridModeFeature::write_state(new)
//!        ↓
//! restart required? ── no ──→ refresh
//!        ↓ yes
//! ConfirmationPort::confirm()
//!        ↓
//! RestartPort::restart()  |  refresh (multi-state) / nothing (binary)
//! ```
//!
//! All steps are awaited in order; a control never has two calls to the same
//! port in flight.

mod binary;
mod factory;
mod multi_state;
mod shared;

#[cfg(test)]
mod test_support;

pub use binary::BinaryControl;
pub use factory::HybridModeControlFactory;
pub use multi_state::MultiStateControl;

use crate::ports::capability_probe::ProbeError;
use crate::ports::confirmation::{ConfirmationError, ConfirmationPort};
use crate::ports::hybrid_mode_feature::HybridModeFeature;
use crate::ports::presenter::ModePresenter;
use crate::ports::restart::{RestartError, RestartPort};
use crate::ports::transition_logger::{NoTransitionLogger, TransitionLogger};
use hybridctl_domain::{
    ControlKind, FeatureError, HybridModeState, MachineCapability, TransitionOutcome,
    TransitionRequest,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during a transition.
///
/// Classified integrated-GPU failures are not errors: they end as
/// [`TransitionOutcome::Warned`].
#[derive(Error, Debug)]
pub enum TransitionError {
    #[error("{state} is not offered by the {kind} control")]
    UnsupportedState {
        state: HybridModeState,
        kind: ControlKind,
    },

    #[error("Feature error: {0}")]
    Feature(#[from] FeatureError),

    #[error("Confirmation failed: {0}")]
    Confirmation(#[from] ConfirmationError),

    #[error("Restart failed: {0}")]
    Restart(#[from] RestartError),

    #[error("Capability probe failed: {0}")]
    Probe(#[from] ProbeError),
}

/// Collaborators shared by both control kinds.
#[derive(Clone)]
pub struct ControlPorts {
    pub feature: Arc<dyn HybridModeFeature>,
    pub confirmation: Arc<dyn ConfirmationPort>,
    pub restart: Arc<dyn RestartPort>,
    pub presenter: Arc<dyn ModePresenter>,
    pub transition_logger: Arc<dyn TransitionLogger>,
}

impl ControlPorts {
    pub fn new(
        feature: Arc<dyn HybridModeFeature>,
        confirmation: Arc<dyn ConfirmationPort>,
        restart: Arc<dyn RestartPort>,
        presenter: Arc<dyn ModePresenter>,
    ) -> Self {
        Self {
            feature,
            confirmation,
            restart,
            presenter,
            transition_logger: Arc::new(NoTransitionLogger),
        }
    }

    /// Create with a transition journal.
    pub fn with_transition_logger(mut self, logger: Arc<dyn TransitionLogger>) -> Self {
        self.transition_logger = logger;
        self
    }
}

/// The control selected for this machine.
pub enum HybridModeControl {
    MultiState(MultiStateControl),
    Binary(BinaryControl),
}

impl HybridModeControl {
    /// Pick the control for a capability. Pure and total.
    pub fn select(capability: MachineCapability, ports: ControlPorts) -> Self {
        match capability.control_kind() {
            ControlKind::MultiState => HybridModeControl::MultiState(MultiStateControl::new(ports)),
            ControlKind::Binary => HybridModeControl::Binary(BinaryControl::new(ports)),
        }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            HybridModeControl::MultiState(_) => ControlKind::MultiState,
            HybridModeControl::Binary(_) => ControlKind::Binary,
        }
    }

    /// States a user may request through this control.
    pub fn supported_states(&self) -> &'static [HybridModeState] {
        self.kind().supported_states()
    }

    /// Run one transition with the selected strategy.
    pub async fn change(
        &self,
        request: TransitionRequest,
    ) -> Result<TransitionOutcome, TransitionError> {
        match self {
            HybridModeControl::MultiState(control) => control.change(request).await,
            HybridModeControl::Binary(control) => control.change(request).await,
        }
    }

    /// Re-read the active state and show it.
    pub async fn refresh(&self) -> Result<HybridModeState, TransitionError> {
        match self {
            HybridModeControl::MultiState(control) => control.refresh().await,
            HybridModeControl::Binary(control) => control.refresh().await,
        }
    }
}
