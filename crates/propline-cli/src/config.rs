use std::fs;
use std::path::Path;

use anyhow::Context;
use propline_store::FormatConfig;
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` TOML file.
///
/// ```toml
/// resolve_env = true
///
/// [format]
/// line_separator = "lf"
/// write_header = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Apply `${NAME}` substitution to every read, not just with `--resolve-env`.
    pub resolve_env: bool,
    pub format: FormatConfig,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
