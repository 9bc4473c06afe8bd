//! Hybrid mode adapters for the Legion platform driver.
//!
//! The driver exposes two attributes:
//!
//! | Attribute | Values |
//! |-----------|--------|
//! | `gsync` | `1` = dGPU drives the panel (hybrid off), `0` = hybrid |
//! | `igpumode` | `0` = default, `1` = integrated only, `2` = auto |
//!
//! `igpumode` only exists on machines with the multi-state mode.

use super::sysfs::{attr_exists, read_attr, write_attr};
use crate::config::FileDeviceConfig;
use async_trait::async_trait;
use hybridctl_application::{CapabilityProbe, HybridModeFeature, ProbeError};
use hybridctl_domain::{FeatureError, HybridModeState, IgpuModeState, MachineCapability};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Hybrid mode feature backed by the driver's sysfs attributes.
pub struct SysfsHybridModeFeature {
    gsync_path: PathBuf,
    igpu_mode_path: PathBuf,
}

impl SysfsHybridModeFeature {
    pub fn new(gsync_path: impl Into<PathBuf>, igpu_mode_path: impl Into<PathBuf>) -> Self {
        Self {
            gsync_path: gsync_path.into(),
            igpu_mode_path: igpu_mode_path.into(),
        }
    }

    pub fn from_config(config: &FileDeviceConfig) -> Self {
        Self::new(&config.gsync_path, &config.igpu_mode_path)
    }

    async fn read_igpu_mode(&self) -> Result<IgpuModeState, FeatureError> {
        if !attr_exists(&self.igpu_mode_path).await {
            return Ok(IgpuModeState::Default);
        }
        read_attr(&self.igpu_mode_path)
            .await
            .map(IgpuModeState::from_raw)
    }

    /// Write the sub-mode and check the firmware kept it.
    async fn apply_igpu_mode(&self, sub_mode: IgpuModeState) -> Result<(), FeatureError> {
        if let Err(e) = write_attr(&self.igpu_mode_path, sub_mode.raw()).await {
            warn!("igpumode write failed: {}", e);
            return Err(FeatureError::IgpuModeChange { sub_mode });
        }
        match self.read_igpu_mode().await {
            Ok(applied) if applied == sub_mode => Ok(()),
            Ok(applied) => {
                warn!("igpumode is {} after requesting {}", applied, sub_mode);
                Err(FeatureError::IgpuModeChange { sub_mode })
            }
            Err(e) => {
                warn!("igpumode read-back failed: {}", e);
                Err(FeatureError::IgpuModeChange { sub_mode })
            }
        }
    }
}

#[async_trait]
impl HybridModeFeature for SysfsHybridModeFeature {
    async fn read_state(&self) -> Result<HybridModeState, FeatureError> {
        let dgpu_direct = match read_attr(&self.gsync_path).await? {
            0 => false,
            1 => true,
            other => {
                return Err(FeatureError::InvalidValue(format!(
                    "{}: '{}'",
                    self.gsync_path.display(),
                    other
                )));
            }
        };
        let igpu_mode = if dgpu_direct {
            IgpuModeState::Default
        } else {
            self.read_igpu_mode().await?
        };
        debug!("gsync={} igpumode={}", dgpu_direct as u8, igpu_mode);

        HybridModeState::from_hardware(dgpu_direct, igpu_mode).ok_or_else(|| {
            FeatureError::InvalidValue(format!(
                "{}: '{}'",
                self.igpu_mode_path.display(),
                igpu_mode.raw()
            ))
        })
    }

    async fn write_state(&self, state: HybridModeState) -> Result<(), FeatureError> {
        if !attr_exists(&self.gsync_path).await {
            return Err(FeatureError::Unavailable(format!(
                "{} does not exist",
                self.gsync_path.display()
            )));
        }

        write_attr(&self.gsync_path, state.is_dgpu_direct() as u8).await?;
        debug!("gsync set for {}", state);

        if let Some(sub_mode) = state.igpu_mode()
            && attr_exists(&self.igpu_mode_path).await
        {
            self.apply_igpu_mode(sub_mode).await?;
            debug!("igpumode set to {}", sub_mode);
        }
        Ok(())
    }
}

/// Capability probe that inspects which driver attributes exist.
pub struct SysfsCapabilityProbe {
    gsync_path: PathBuf,
    igpu_mode_path: PathBuf,
}

impl SysfsCapabilityProbe {
    pub fn new(gsync_path: impl Into<PathBuf>, igpu_mode_path: impl Into<PathBuf>) -> Self {
        Self {
            gsync_path: gsync_path.into(),
            igpu_mode_path: igpu_mode_path.into(),
        }
    }

    pub fn from_config(config: &FileDeviceConfig) -> Self {
        Self::new(&config.gsync_path, &config.igpu_mode_path)
    }
}

#[async_trait]
impl CapabilityProbe for SysfsCapabilityProbe {
    async fn probe(&self) -> Result<MachineCapability, ProbeError> {
        if !attr_exists(&self.gsync_path).await {
            return Err(ProbeError::Unsupported(format!(
                "{} not found (is the legion platform driver loaded?)",
                self.gsync_path.display()
            )));
        }
        let capability = MachineCapability {
            supports_multi_state_mode: attr_exists(&self.igpu_mode_path).await,
        };
        debug!("Probed capability: {:?}", capability);
        Ok(capability)
    }
}
