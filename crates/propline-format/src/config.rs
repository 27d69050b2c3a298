//! Output layout settings for the writer.
//!
//! [`FormatConfig`] is plain serde data, so it can be embedded in a larger
//! TOML document or read on its own with [`FormatConfig::from_toml_str`].

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// Header timestamp layout, e.g. `Mon Jan 02 15:04:05 +00:00 2006`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Line terminator used when writing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native if cfg!(windows) => "\r\n",
            Self::Native | Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Configuration for writing properties text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Terminator appended to every written line.
    pub line_separator: LineSeparator,
    /// Whether to emit the `#<timestamp>` header line.
    pub write_header: bool,
    /// chrono `strftime` layout for the header timestamp.
    pub timestamp_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_separator: LineSeparator::Native,
            write_header: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl FormatConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(input: &str) -> FormatResult<Self> {
        toml::from_str(input).map_err(|e| FormatError::Config(e.to_string()))
    }
}
