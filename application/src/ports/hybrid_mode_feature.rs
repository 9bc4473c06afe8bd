//! Hybrid mode feature port
//!
//! Read/write access to the one hybrid mode setting of the machine.

use async_trait::async_trait;
use hybridctl_domain::{FeatureError, HybridModeState};

/// Gateway to the hybrid graphics mode setting
///
/// There is exactly one logical instance per machine. Writes are not atomic:
/// an implementation may apply the hybrid switch and then fail on the
/// integrated-GPU sub-mode, reporting [`FeatureError::IgpuModeChange`].
#[async_trait]
pub trait HybridModeFeature: Send + Sync {
    /// Read the currently active state.
    async fn read_state(&self) -> Result<HybridModeState, FeatureError>;

    /// Persist a new state.
    async fn write_state(&self, state: HybridModeState) -> Result<(), FeatureError>;
}
