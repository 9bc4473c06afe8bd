//! Hybrid graphics mode states.
//!
//! [`HybridModeState`] is the value a user requests and the firmware persists.
//! [`IgpuModeState`] is the integrated-GPU sub-configuration the firmware
//! reports alongside a failed mode change.
//!
//! | State | dGPU drives panel | iGPU sub-mode |
//! |-------|:-----------------:|---------------|
//! | `Off` | yes | - |
//! | `On` | no | `Default` |
//! | `Auto` | no | `Auto` |
//! | `FullPowerOnly` | no | `IntegratedOnly` |

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hybrid graphics mode as persisted by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HybridModeState {
    /// Hybrid mode disabled: the discrete GPU drives the panel directly.
    Off,
    /// Hybrid mode enabled with the default integrated-GPU behaviour.
    On,
    /// Hybrid mode enabled; the firmware powers the dGPU down when idle.
    Auto,
    /// Hybrid mode enabled with the integrated GPU as the only renderer.
    FullPowerOnly,
}

impl HybridModeState {
    /// All states, in display order.
    pub const ALL: [HybridModeState; 4] = [
        HybridModeState::On,
        HybridModeState::Auto,
        HybridModeState::FullPowerOnly,
        HybridModeState::Off,
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            HybridModeState::Off => "off",
            HybridModeState::On => "on",
            HybridModeState::Auto => "auto",
            HybridModeState::FullPowerOnly => "full-power-only",
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self, HybridModeState::Off)
    }

    /// Whether the discrete GPU is wired straight to the panel in this state.
    pub fn is_dgpu_direct(&self) -> bool {
        self.is_off()
    }

    /// The integrated-GPU sub-mode this state asks the firmware for.
    ///
    /// `None` for `Off`, where the sub-mode is irrelevant.
    pub fn igpu_mode(&self) -> Option<IgpuModeState> {
        match self {
            HybridModeState::Off => None,
            HybridModeState::On => Some(IgpuModeState::Default),
            HybridModeState::Auto => Some(IgpuModeState::Auto),
            HybridModeState::FullPowerOnly => Some(IgpuModeState::IntegratedOnly),
        }
    }

    /// Inverse of [`is_dgpu_direct`](Self::is_dgpu_direct) + [`igpu_mode`](Self::igpu_mode).
    ///
    /// Returns `None` when the sub-mode is not one this tool can represent.
    pub fn from_hardware(dgpu_direct: bool, igpu_mode: IgpuModeState) -> Option<Self> {
        if dgpu_direct {
            return Some(HybridModeState::Off);
        }
        match igpu_mode {
            IgpuModeState::Default => Some(HybridModeState::On),
            IgpuModeState::Auto => Some(HybridModeState::Auto),
            IgpuModeState::IntegratedOnly => Some(HybridModeState::FullPowerOnly),
            IgpuModeState::Other(_) => None,
        }
    }
}

impl fmt::Display for HybridModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HybridModeState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "disabled" | "dgpu" => Ok(HybridModeState::Off),
            "on" | "enabled" | "hybrid" => Ok(HybridModeState::On),
            "auto" => Ok(HybridModeState::Auto),
            "full-power-only" | "full_power_only" | "fullpoweronly" | "igpu-only" => {
                Ok(HybridModeState::FullPowerOnly)
            }
            _ => Err(DomainError::InvalidState(s.to_string())),
        }
    }
}

/// Integrated-GPU sub-configuration carried by a failed mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgpuModeState {
    Default,
    IntegratedOnly,
    Auto,
    /// Raw firmware value without a known meaning.
    Other(u8),
}

impl IgpuModeState {
    /// Firmware encoding of the sub-mode (`igpumode` attribute).
    pub fn raw(&self) -> u8 {
        match self {
            IgpuModeState::Default => 0,
            IgpuModeState::IntegratedOnly => 1,
            IgpuModeState::Auto => 2,
            IgpuModeState::Other(value) => *value,
        }
    }

    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => IgpuModeState::Default,
            1 => IgpuModeState::IntegratedOnly,
            2 => IgpuModeState::Auto,
            other => IgpuModeState::Other(other),
        }
    }
}

impl fmt::Display for IgpuModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgpuModeState::Default => write!(f, "default"),
            IgpuModeState::IntegratedOnly => write!(f, "integrated-only"),
            IgpuModeState::Auto => write!(f, "auto"),
            IgpuModeState::Other(value) => write!(f, "unknown({})", value),
        }
    }
}
