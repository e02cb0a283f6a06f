pub mod config;
pub mod dashboard;
pub mod doc;
pub mod habit;

use habitdeck_core::Config;
use serde::Serialize;

/// Serialize a value honoring the `display.pretty_json` setting.
///
/// Falls back to pretty output if the configuration cannot be loaded.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, Box<dyn std::error::Error>> {
    let pretty = Config::load().map(|c| c.display.pretty_json).unwrap_or(true);
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
