use serde::{Deserialize, Serialize};

use super::thresholds::ThresholdsConfig;

/// Root configuration structure for storyscribe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoryscribeConfig {
    /// Thresholds configuration
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// One of "terminal", "json", "markdown"
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}
