//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How results are printed
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, optionally colored (default)
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DomainError::InvalidOutputFormat(s.to_string())),
        }
    }
}
