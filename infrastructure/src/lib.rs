//! Infrastructure layer for hybridctl
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod device;
pub mod logging;
pub mod system;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDeviceConfig, FileLoggingConfig, FileOutputConfig,
    FileRestartConfig,
};
pub use device::{SysfsCapabilityProbe, SysfsHybridModeFeature};
pub use logging::JsonlTransitionLogger;
pub use system::CommandRestart;
