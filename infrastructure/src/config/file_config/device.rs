//! Device configuration from TOML (`[device]` section)

use hybridctl_domain::{ConfigIssue, ConfigIssueCode, ControlKind, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Platform driver directory of Lenovo Legion machines.
pub const DEFAULT_DRIVER_DIR: &str = "/sys/bus/platform/drivers/legion/PNP0C09:00";

/// Raw device configuration from TOML
///
/// # Example
///
/// ```toml
/// [device]
/// gsync_path = "/sys/bus/platform/drivers/legion/PNP0C09:00/gsync"
/// igpu_mode_path = "/sys/bus/platform/drivers/legion/PNP0C09:00/igpumode"
/// capability = "auto"                     # "auto", "multi-state", "binary"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeviceConfig {
    /// Attribute holding the hybrid switch (1 = dGPU drives the panel)
    pub gsync_path: PathBuf,
    /// Attribute holding the integrated-GPU sub-mode
    pub igpu_mode_path: PathBuf,
    /// Capability override: "auto" probes the machine
    pub capability: String,
}

impl Default for FileDeviceConfig {
    fn default() -> Self {
        Self {
            gsync_path: PathBuf::from(DEFAULT_DRIVER_DIR).join("gsync"),
            igpu_mode_path: PathBuf::from(DEFAULT_DRIVER_DIR).join("igpumode"),
            capability: "auto".to_string(),
        }
    }
}

impl FileDeviceConfig {
    /// Parse the capability override.
    ///
    /// `None` means "probe the machine".
    pub fn parse_capability(&self) -> (Option<ControlKind>, Vec<ConfigIssue>) {
        if self.capability.eq_ignore_ascii_case("auto") {
            return (None, vec![]);
        }
        match self.capability.parse::<ControlKind>() {
            Ok(kind) => (Some(kind), vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "device.capability".to_string(),
                        value: self.capability.clone(),
                        valid_values: vec![
                            "auto".to_string(),
                            "multi-state".to_string(),
                            "binary".to_string(),
                        ],
                    },
                    message: format!(
                        "device.capability: unknown value '{}', falling back to 'auto'",
                        self.capability
                    ),
                };
                (None, vec![issue])
            }
        }
    }

    /// Warn about attribute paths that are not absolute.
    pub fn validate_paths(&self) -> Vec<ConfigIssue> {
        [
            ("device.gsync_path", &self.gsync_path),
            ("device.igpu_mode_path", &self.igpu_mode_path),
        ]
        .into_iter()
        .filter(|(_, path)| !path.is_absolute())
        .map(|(field, path)| ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::RelativePath {
                field: field.to_string(),
            },
            message: format!(
                "{}: '{}' is relative and resolves against the working directory",
                field,
                path.display()
            ),
        })
        .collect()
    }
}
