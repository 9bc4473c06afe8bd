//! Machine capability and the control kind derived from it.

use crate::core::error::DomainError;
use crate::hybrid::state::HybridModeState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the one-shot capability probe.
///
/// Produced once per session and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MachineCapability {
    /// The firmware exposes an integrated-GPU sub-mode next to the hybrid switch.
    pub supports_multi_state_mode: bool,
}

impl MachineCapability {
    pub fn multi_state() -> Self {
        Self {
            supports_multi_state_mode: true,
        }
    }

    pub fn binary() -> Self {
        Self {
            supports_multi_state_mode: false,
        }
    }

    pub fn control_kind(&self) -> ControlKind {
        if self.supports_multi_state_mode {
            ControlKind::MultiState
        } else {
            ControlKind::Binary
        }
    }
}

/// Which of the two control strategies drives the hybrid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    /// Off / Auto / FullPowerOnly selector.
    MultiState,
    /// On / Off switch.
    Binary,
}

impl ControlKind {
    /// States a user may request through this kind of control.
    pub fn supported_states(&self) -> &'static [HybridModeState] {
        match self {
            ControlKind::MultiState => &[
                HybridModeState::Auto,
                HybridModeState::FullPowerOnly,
                HybridModeState::Off,
            ],
            ControlKind::Binary => &[HybridModeState::On, HybridModeState::Off],
        }
    }

    pub fn supports(&self, state: HybridModeState) -> bool {
        self.supported_states().contains(&state)
    }

    pub fn capability(&self) -> MachineCapability {
        match self {
            ControlKind::MultiState => MachineCapability::multi_state(),
            ControlKind::Binary => MachineCapability::binary(),
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::MultiState => write!(f, "multi-state"),
            ControlKind::Binary => write!(f, "binary"),
        }
    }
}

impl std::str::FromStr for ControlKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multi-state" | "multi_state" | "multistate" | "multi" => Ok(ControlKind::MultiState),
            "binary" | "toggle" => Ok(ControlKind::Binary),
            _ => Err(DomainError::InvalidControlKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_kind_from_capability() {
        assert_eq!(
            MachineCapability::multi_state().control_kind(),
            ControlKind::MultiState
        );
        assert_eq!(MachineCapability::binary().control_kind(), ControlKind::Binary);
    }

    #[test]
    fn test_default_capability_is_binary() {
        assert_eq!(
            MachineCapability::default().control_kind(),
            ControlKind::Binary
        );
    }

    #[test]
    fn test_supported_states() {
        assert!(ControlKind::MultiState.supports(HybridModeState::FullPowerOnly));
        assert!(!ControlKind::MultiState.supports(HybridModeState::On));
        assert!(ControlKind::Binary.supports(HybridModeState::On));
        assert!(!ControlKind::Binary.supports(HybridModeState::Auto));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "multi-state".parse::<ControlKind>().ok(),
            Some(ControlKind::MultiState)
        );
        assert_eq!("Binary".parse::<ControlKind>().ok(), Some(ControlKind::Binary));
        assert!("auto".parse::<ControlKind>().is_err());
    }
}
