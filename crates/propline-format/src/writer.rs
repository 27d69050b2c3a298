//! Serializing entries back to properties text.
//!
//! Output layout:
//! ```text
//! #<timestamp>
//! a.key=value
//! b.key=value
//! ```
//! Entries are always written in ascending key order, whatever order they
//! are supplied in.

use std::fmt::{self, Write as _};
use std::io::{BufWriter, Write};

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use crate::config::FormatConfig;
use crate::error::{FormatError, FormatResult};

/// Write `entries` to `writer` with a header stamped at the current local time.
///
/// Returns the number of entries written. The writer is flushed before
/// returning.
pub fn store<W, I, K, V>(writer: &mut W, entries: I, config: &FormatConfig) -> FormatResult<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    store_at(writer, entries, config, &Local::now())
}

/// Like [`store`], with an explicit header timestamp.
pub fn store_at<W, I, K, V, Tz>(
    writer: &mut W,
    entries: I,
    config: &FormatConfig,
    timestamp: &DateTime<Tz>,
) -> FormatResult<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let separator = config.line_separator.as_str();
    let mut entries: Vec<(K, V)> = entries.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let mut out = BufWriter::new(writer);
    if config.write_header {
        let header = format_header(timestamp, &config.timestamp_format)?;
        out.write_all(b"#")?;
        out.write_all(header.as_bytes())?;
        out.write_all(separator.as_bytes())?;
    }
    for (key, value) in &entries {
        out.write_all(key.as_ref().as_bytes())?;
        out.write_all(b"=")?;
        out.write_all(value.as_ref().as_bytes())?;
        out.write_all(separator.as_bytes())?;
    }
    out.flush()?;

    debug!(entries = entries.len(), "properties stored");
    Ok(entries.len())
}

/// Render `timestamp` with `layout`, failing on unknown specifiers.
pub fn format_header<Tz>(timestamp: &DateTime<Tz>, layout: &str) -> FormatResult<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut header = String::new();
    write!(header, "{}", timestamp.format(layout))
        .map_err(|_| FormatError::InvalidTimestampFormat(layout.to_string()))?;
    Ok(header)
}
