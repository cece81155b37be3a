//! Simulator configuration loading

use std::path::Path;

use anyhow::{Context, Result};
use wpm_widget::RenderConfig;

/// Parse a JSON render config. Missing fields take their defaults.
///
/// ```json
/// { "fixed_range": true, "fixed_range_max": 120, "inverted": false }
/// ```
///
/// # Errors
///
/// Fails on malformed JSON, unknown fields, or a zero `fixed_range_max`.
pub fn parse_config(json: &str) -> Result<RenderConfig> {
    serde_json::from_str(json).context("invalid render config")
}

/// Load the render config from `path`, or the defaults when no path is given.
///
/// # Errors
///
/// Fails if the file cannot be read or does not parse.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        tracing::debug!("no config file, using defaults");
        return Ok(RenderConfig::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = parse_config(&json).with_context(|| format!("in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        fixed_range = config.is_fixed_range(),
        fixed_range_max = config.fixed_range_max(),
        inverted = config.is_inverted(),
        "loaded config"
    );
    Ok(config)
}
