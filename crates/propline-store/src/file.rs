//! Loading from and persisting to files on disk.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use propline_format::LoadReport;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::Result;
use crate::properties::Properties;

impl Properties {
    /// Create a store populated from the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let props = Self::new();
        props.load_path(path)?;
        Ok(props)
    }

    /// Merge the entries of the file at `path` into this store.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let report = self.load(&mut reader)?;
        debug!(path = %path.display(), entries = report.entries, skipped = report.skipped, "loaded properties file");
        Ok(report)
    }

    /// Write every entry to `path`, replacing it atomically.
    ///
    /// The content goes to a temporary file in the same directory, which is
    /// synced and then renamed over `path`. Missing parent directories are
    /// created.
    pub fn store_path(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        let written = self.store(tmp.as_file_mut())?;
        tmp.as_file_mut().flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        info!(path = %path.display(), entries = written, "stored properties file");
        Ok(written)
    }
}
