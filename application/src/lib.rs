//! Application layer for hybridctl
//!
//! This crate contains the hybrid mode control use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConfirmPolicy;
pub use ports::{
    capability_probe::{CapabilityProbe, FixedCapabilityProbe, ProbeError},
    confirmation::{
        AutoConfirm, AutoDecline, ConfirmationError, ConfirmationPort, ConfirmationRequest,
    },
    hybrid_mode_feature::HybridModeFeature,
    presenter::ModePresenter,
    restart::{RestartError, RestartPort},
    transition_logger::{NoTransitionLogger, TransitionEvent, TransitionLogger},
};
pub use use_cases::hybrid_mode_control::{
    BinaryControl, ControlPorts, HybridModeControl, HybridModeControlFactory, MultiStateControl,
    TransitionError,
};
