//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// transition_log = "~/.local/state/hybridctl/transitions.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL journal of every transition (disabled when unset)
    pub transition_log: Option<String>,
}

impl FileLoggingConfig {
    /// Journal path with a leading `~/` expanded.
    pub fn transition_log_path(&self) -> Option<PathBuf> {
        self.transition_log.as_deref().map(expand_home)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        assert!(FileLoggingConfig::default().transition_log_path().is_none());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let config = FileLoggingConfig {
            transition_log: Some("/var/log/hybridctl.jsonl".to_string()),
        };
        assert_eq!(
            config.transition_log_path(),
            Some(PathBuf::from("/var/log/hybridctl.jsonl"))
        );
    }

    #[test]
    fn test_home_is_expanded() {
        let config = FileLoggingConfig {
            transition_log: Some("~/hybridctl.jsonl".to_string()),
        };
        let path = config.transition_log_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("hybridctl.jsonl"));
        }
    }
}
