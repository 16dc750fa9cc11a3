pub mod schema;
pub mod validate;

use mrd_config::MeridianConfig;

/// Serialize a schema document according to the configured output style.
///
/// # Errors
///
/// Returns an error if the value fails to serialize.
pub fn render_json(config: &MeridianConfig, value: &serde_json::Value) -> anyhow::Result<String> {
    let rendered = if config.general.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
