use std::fs;
use std::io::Read;

use anyhow::Context;

use mrd_config::MeridianConfig;
use mrd_schema::{SchemaError, SchemaRegistry};

use crate::cli::ValidateArgs;

/// Handle `mrd validate`.
pub fn handle(args: &ValidateArgs, _config: &MeridianConfig) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new().context("failed to build schema registry")?;
    let key = args.key();

    let raw = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let instance: serde_json::Value =
        serde_json::from_str(&raw).context("input is not valid JSON")?;

    match registry.validate(&key, &instance) {
        Ok(()) => {
            println!("valid: {key}");
            Ok(())
        }
        Err(SchemaError::ValidationFailed { errors }) => {
            for error in &errors {
                eprintln!("{error}");
            }
            anyhow::bail!("{} failed validation with {} error(s)", key, errors.len())
        }
        Err(other) => Err(other).with_context(|| format!("cannot validate against '{key}'")),
    }
}
