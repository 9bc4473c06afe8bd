//! Domain layer for hybridctl
//!
//! This crate contains the hybrid graphics mode states, the capability model
//! and the pure policies that drive a mode change. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Control kinds
//!
//! - **Multi-state**: machines whose firmware exposes an integrated-GPU
//!   sub-mode get an Off / Auto / FullPowerOnly selector
//! - **Binary**: all other machines get an On / Off switch
//!
//! ## Restart-required transitions
//!
//! Entering or leaving `Off` rewires the panel and only takes effect after a
//! restart. Moving between the non-off states applies immediately.

pub mod config;
pub mod core;
pub mod hybrid;

// Re-export commonly used types
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors},
};
pub use core::error::DomainError;
pub use hybrid::{
    capability::{ControlKind, MachineCapability},
    classifier::{WarningCategory, classify_feature_error, classify_igpu_mode},
    error::FeatureError,
    state::{HybridModeState, IgpuModeState},
    transition::{TransitionOutcome, TransitionRequest},
};
