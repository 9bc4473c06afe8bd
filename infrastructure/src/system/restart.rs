//! Restart adapter that runs a system command (`systemctl reboot`).

use crate::config::FileRestartConfig;
use async_trait::async_trait;
use hybridctl_application::{RestartError, RestartPort};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Restarts the machine by running the configured command.
pub struct CommandRestart {
    program: String,
    args: Vec<String>,
}

impl CommandRestart {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from `[restart] command`; `None` if the command is empty.
    pub fn from_config(config: &FileRestartConfig) -> Option<Self> {
        let (program, args) = config.program()?;
        Some(Self::new(program, args.to_vec()))
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl RestartPort for CommandRestart {
    async fn restart(&self) -> Result<(), RestartError> {
        let program = which::which(&self.program)
            .map_err(|_| RestartError::CommandNotFound(self.program.clone()))?;
        debug!("Resolved restart command to {}", program.display());

        info!("Running restart command: {}", self.command_line());
        let output = Command::new(&program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                RestartError::Failed(format!("Failed to execute {}: {}", self.program, e))
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(RestartError::Failed(format!(
                "{} exited with {}: {}",
                self.command_line(),
                output.status,
                stderr.trim()
            )))
        }
    }
}
