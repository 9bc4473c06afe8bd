//! Capability probe port
//!
//! Defines how the application learns which control kind a machine needs.
//! The probe runs once per control lifetime, before any transition.

use async_trait::async_trait;
use hybridctl_domain::MachineCapability;
use thiserror::Error;

/// Errors that can occur while probing the machine
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Hybrid mode is not supported on this machine: {0}")]
    Unsupported(String),

    #[error("Probe failed: {0}")]
    Failed(String),
}

/// Port for querying machine information
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    /// Determine whether the machine supports the multi-state hybrid mode.
    async fn probe(&self) -> Result<MachineCapability, ProbeError>;
}

/// Probe that always answers with a fixed capability.
///
/// Used when the capability is forced by configuration.
pub struct FixedCapabilityProbe {
    capability: MachineCapability,
}

impl FixedCapabilityProbe {
    pub fn new(capability: MachineCapability) -> Self {
        Self { capability }
    }
}

#[async_trait]
impl CapabilityProbe for FixedCapabilityProbe {
    async fn probe(&self) -> Result<MachineCapability, ProbeError> {
        Ok(self.capability)
    }
}
