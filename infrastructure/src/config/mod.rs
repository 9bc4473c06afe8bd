//! Configuration file loading for hybridctl
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `HYBRIDCTL_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./hybridctl.toml` or `./.hybridctl.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hybridctl/config.toml`
//! 5. Fallback: `~/.config/hybridctl/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_DRIVER_DIR, FileConfig, FileDeviceConfig, FileLoggingConfig, FileOutputConfig,
    FileRestartConfig,
};
pub use loader::ConfigLoader;
