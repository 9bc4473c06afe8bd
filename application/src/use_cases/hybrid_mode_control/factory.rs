//! Capability-dependent control creation.

use super::{ControlPorts, HybridModeControl};
use crate::ports::capability_probe::{CapabilityProbe, ProbeError};
use std::sync::Arc;
use tracing::info;

/// Probes the machine once and builds the matching control.
pub struct HybridModeControlFactory {
    probe: Arc<dyn CapabilityProbe>,
}

impl HybridModeControlFactory {
    pub fn new(probe: Arc<dyn CapabilityProbe>) -> Self {
        Self { probe }
    }

    /// Await the capability probe, then select the control.
    pub async fn create(&self, ports: ControlPorts) -> Result<HybridModeControl, ProbeError> {
        let capability = self.probe.probe().await?;
        let control = HybridModeControl::select(capability, ports);
        info!("Selected {} hybrid mode control", control.kind());
        Ok(control)
    }
}
