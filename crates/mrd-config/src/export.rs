//! Schema export configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dir() -> PathBuf {
    PathBuf::from("schemas")
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory schema files are written to, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Export entity shape schemas.
    #[serde(default = "default_true")]
    pub include_entities: bool,

    /// Export generated query/mutation input schemas.
    #[serde(default = "default_true")]
    pub include_inputs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            include_entities: true,
            include_inputs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert_eq!(config.dir, PathBuf::from("schemas"));
        assert!(config.include_entities);
        assert!(config.include_inputs);
    }
}
