//! Hybrid mode feature errors

use crate::hybrid::state::IgpuModeState;
use thiserror::Error;

/// Failure of a hybrid mode feature read or write.
///
/// A write is not atomic: `IgpuModeChange` may be reported after the
/// hybrid switch itself was already applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Integrated GPU mode could not be changed to {sub_mode}")]
    IgpuModeChange { sub_mode: IgpuModeState },

    #[error("Hybrid mode feature unavailable: {0}")]
    Unavailable(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl FeatureError {
    /// Sub-mode carried by an integrated-GPU mode change failure.
    pub fn igpu_mode(&self) -> Option<IgpuModeState> {
        match self {
            FeatureError::IgpuModeChange { sub_mode } => Some(*sub_mode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_igpu_mode_payload() {
        let err = FeatureError::IgpuModeChange {
            sub_mode: IgpuModeState::Auto,
        };
        assert_eq!(err.igpu_mode(), Some(IgpuModeState::Auto));
        assert_eq!(FeatureError::Io("boom".to_string()).igpu_mode(), None);
    }

    #[test]
    fn test_display() {
        let err = FeatureError::IgpuModeChange {
            sub_mode: IgpuModeState::IntegratedOnly,
        };
        assert_eq!(
            err.to_string(),
            "Integrated GPU mode could not be changed to integrated-only"
        );
    }
}
