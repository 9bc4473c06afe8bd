//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod device;
mod logging;
mod output;
mod restart;

pub use device::{DEFAULT_DRIVER_DIR, FileDeviceConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use restart::FileRestartConfig;

use hybridctl_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hybrid mode attributes and capability override
    pub device: FileDeviceConfig,
    /// Restart command and confirmation policy
    pub restart: FileRestartConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transition journal
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Enum parse failures (`device.capability`, `restart.confirm`)
    /// 2. Relative device attribute paths
    /// 3. An empty restart command
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.device.parse_capability().1);
        issues.extend(self.restart.parse_confirm().1);
        issues.extend(self.device.validate_paths());
        issues.extend(self.restart.validate_command());

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hybridctl_application::ConfirmPolicy;
    use hybridctl_domain::{ControlKind, OutputFormat, Severity, has_errors};
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[device]
gsync_path = "/tmp/legion/gsync"
igpu_mode_path = "/tmp/legion/igpumode"
capability = "multi-state"

[restart]
command = ["shutdown", "-r", "now"]
confirm = "never"

[output]
format = "json"
color = false

[logging]
transition_log = "/var/log/hybridctl.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.device.gsync_path, PathBuf::from("/tmp/legion/gsync"));
        assert_eq!(
            config.device.parse_capability().0,
            Some(ControlKind::MultiState)
        );
        assert_eq!(config.restart.command.len(), 3);
        assert_eq!(config.restart.parse_confirm().0, ConfirmPolicy::Never);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.logging.transition_log.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[restart]
confirm = "always"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.restart.parse_confirm().0, ConfirmPolicy::Always);
        // Defaults should apply
        assert_eq!(config.restart.command, vec!["systemctl", "reboot"]);
        assert_eq!(config.device, FileDeviceConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[device]
capability = "quad"

[restart]
command = []
confirm = "perhaps"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.severity == Severity::Warning)
                .count(),
            2
        );
        assert!(has_errors(&issues));
    }
}
