//! Classification of hybrid mode write failures.
//!
//! Only failures that name a non-default integrated-GPU sub-mode become a
//! user-facing warning. Everything else is left to the caller's generic
//! error path.
//!
//! | Carried sub-mode | Category |
//! |------------------|----------|
//! | `IntegratedOnly` | [`WarningCategory::IntegratedOnly`] |
//! | `Auto` | [`WarningCategory::Auto`] |
//! | `Other(_)` | [`WarningCategory::Generic`] |
//! | `Default` | none |

use crate::hybrid::error::FeatureError;
use crate::hybrid::state::IgpuModeState;
use serde::Serialize;

/// User-facing warning for a failed integrated-GPU mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    IntegratedOnly,
    Auto,
    Generic,
}

impl WarningCategory {
    pub fn title(&self) -> &'static str {
        match self {
            WarningCategory::IntegratedOnly => "Couldn't switch to integrated GPU only",
            WarningCategory::Auto => "Couldn't switch to automatic GPU mode",
            WarningCategory::Generic => "Couldn't change integrated GPU mode",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            WarningCategory::IntegratedOnly => {
                "The discrete GPU is still in use. Close applications running on it and try again."
            }
            WarningCategory::Auto => {
                "The firmware refused automatic mode. Make sure no application keeps the discrete GPU busy and try again."
            }
            WarningCategory::Generic => {
                "The firmware did not accept the new integrated GPU mode. Hybrid mode may be partially applied."
            }
        }
    }
}

/// Map a carried sub-mode to its warning category.
pub fn classify_igpu_mode(sub_mode: IgpuModeState) -> Option<WarningCategory> {
    match sub_mode {
        IgpuModeState::Default => None,
        IgpuModeState::IntegratedOnly => Some(WarningCategory::IntegratedOnly),
        IgpuModeState::Auto => Some(WarningCategory::Auto),
        IgpuModeState::Other(_) => Some(WarningCategory::Generic),
    }
}

/// Classify a feature failure, if it is an integrated-GPU mode change failure.
pub fn classify_feature_error(error: &FeatureError) -> Option<WarningCategory> {
    error.igpu_mode().and_then(classify_igpu_mode)
}
