//! Restart configuration from TOML (`[restart]` section)

use hybridctl_application::ConfirmPolicy;
use hybridctl_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw restart configuration from TOML
///
/// # Example
///
/// ```toml
/// [restart]
/// command = ["systemctl", "reboot"]
/// confirm = "ask"                         # "ask", "always", "never"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRestartConfig {
    /// Program and arguments that restart the machine
    pub command: Vec<String>,
    /// How the restart prompt is answered
    pub confirm: String,
}

impl Default for FileRestartConfig {
    fn default() -> Self {
        Self {
            command: vec!["systemctl".to_string(), "reboot".to_string()],
            confirm: "ask".to_string(),
        }
    }
}

impl FileRestartConfig {
    /// Parse confirm string into ConfirmPolicy, returning warnings on failure.
    pub fn parse_confirm(&self) -> (ConfirmPolicy, Vec<ConfigIssue>) {
        match self.confirm.parse::<ConfirmPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "restart.confirm".to_string(),
                        value: self.confirm.clone(),
                        valid_values: vec![
                            "ask".to_string(),
                            "always".to_string(),
                            "never".to_string(),
                        ],
                    },
                    message: format!(
                        "restart.confirm: unknown value '{}', falling back to 'ask'",
                        self.confirm
                    ),
                };
                (ConfirmPolicy::default(), vec![issue])
            }
        }
    }

    /// Split the command into program and arguments.
    pub fn program(&self) -> Option<(&str, &[String])> {
        let (program, args) = self.command.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some((program.as_str(), args))
    }

    pub fn validate_command(&self) -> Vec<ConfigIssue> {
        if self.program().is_some() {
            return vec![];
        }
        vec![ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::EmptyValue {
                field: "restart.command".to_string(),
            },
            message: "restart.command is empty; the device could not be restarted".to_string(),
        }]
    }
}
