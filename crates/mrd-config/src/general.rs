//! General application configuration.

use serde::{Deserialize, Serialize};

/// Pretty-print JSON output by default.
const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Pretty-print JSON written to stdout and exported files.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Default model name for commands that take an optional `--model`.
    #[serde(default)]
    pub default_model: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            default_model: String::new(),
        }
    }
}
