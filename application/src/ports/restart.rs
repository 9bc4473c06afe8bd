//! Restart port

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a restart attempt
#[derive(Error, Debug)]
pub enum RestartError {
    #[error("Restart command not found: {0}")]
    CommandNotFound(String),

    #[error("Restart failed: {0}")]
    Failed(String),
}

/// Port for restarting the device.
///
/// On success a real implementation does not get to return: the system goes
/// down. `Ok(())` means the restart was handed off.
#[async_trait]
pub trait RestartPort: Send + Sync {
    async fn restart(&self) -> Result<(), RestartError>;
}
