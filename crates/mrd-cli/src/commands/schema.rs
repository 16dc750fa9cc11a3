use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use mrd_config::MeridianConfig;
use mrd_schema::SchemaRegistry;

use crate::cli::SchemaCommands;
use crate::commands::render_json;

/// Handle `mrd schema`.
pub fn handle(action: &SchemaCommands, config: &MeridianConfig) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new().context("failed to build schema registry")?;

    match action {
        SchemaCommands::List => {
            for key in registry.list() {
                println!("{key}");
            }
            Ok(())
        }
        SchemaCommands::Show { key } => {
            let schema = registry
                .get(key)
                .with_context(|| format!("unknown schema key '{key}'"))?;
            println!("{}", render_json(config, schema)?);
            Ok(())
        }
        SchemaCommands::Export { dir } => {
            let dir = dir.as_deref().unwrap_or(&config.export.dir);
            export_all(&registry, config, dir)
        }
    }
}

/// Write every registered schema to `dir`, one file per key.
fn export_all(registry: &SchemaRegistry, config: &MeridianConfig, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory '{}'", dir.display()))?;

    let mut written = 0usize;
    for key in registry.list() {
        let is_input = key.contains('.');
        if is_input && !config.export.include_inputs {
            continue;
        }
        if !is_input && !config.export.include_entities {
            continue;
        }

        let Some(schema) = registry.get(key) else {
            continue;
        };
        let path = dir.join(format!("{key}.json"));
        fs::write(&path, render_json(config, schema)?)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        debug!(key, path = %path.display(), "exported schema");
        written += 1;
    }

    info!(count = written, dir = %dir.display(), "schema export complete");
    println!("exported {written} schemas to {}", dir.display());
    Ok(())
}
