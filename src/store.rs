//! Text export and import for history logs.
//!
//! [`HistoryStore`] writes a log's rendered entries to a configured UTF-8
//! text file and reads them back as raw lines. The store holds no
//! calculator state, only the target path, and consumes the log
//! exclusively through its read-only [`entries`] accessor.
//!
//! The exported format is one header line followed by one rendered record
//! per line. Loading returns the lines verbatim; it does not re-parse them
//! into records.
//!
//! [`entries`]: crate::history::HistoryLog::entries

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::history::HistoryLog;

/// First line of every exported history file.
pub const HISTORY_HEADER: &str = "History of calculations:";

/// Persists history logs to a configured text file.
///
/// The target path is set at construction or via
/// [`set_path`](HistoryStore::set_path); it is never inferred. Saving or
/// loading without a configured path fails with
/// [`StoreError::ResourceUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    path: Option<PathBuf>,
}

impl HistoryStore {
    /// Creates a store with no target configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store targeting the given file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Points the store at a different file.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// The configured target, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn configured_path(&self) -> StoreResult<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| StoreError::ResourceUnavailable("no history file configured".to_string()))
    }

    /// Writes the log's entries to the configured file.
    ///
    /// The file starts with [`HISTORY_HEADER`] followed by one rendered
    /// record per line. An existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ResourceUnavailable`] when no path is
    /// configured or the file cannot be written.
    pub fn save(&self, log: &HistoryLog) -> StoreResult<()> {
        let path = self.configured_path()?;

        let mut contents = String::from(HISTORY_HEADER);
        contents.push('\n');
        for record in log.entries() {
            contents.push_str(&record.to_string());
            contents.push('\n');
        }

        fs::write(path, contents).map_err(|err| {
            StoreError::ResourceUnavailable(format!("cannot write '{}': {}", path.display(), err))
        })?;

        debug!(path = %path.display(), entries = log.len(), "Saved history file");
        Ok(())
    }

    /// Reads the configured file and returns its lines verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the file does not exist and
    /// [`StoreError::ResourceUnavailable`] when no path is configured or
    /// the file cannot be read.
    pub fn load(&self) -> StoreResult<Vec<String>> {
        let path = self.configured_path()?;

        let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            _ => StoreError::ResourceUnavailable(format!(
                "cannot read '{}': {}",
                path.display(),
                err
            )),
        })?;

        let lines: Vec<String> = contents.lines().map(str::to_owned).collect();
        debug!(path = %path.display(), lines = lines.len(), "Loaded history file");
        Ok(lines)
    }
}
