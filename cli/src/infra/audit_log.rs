//! Infrastructure implementation of the `AuditSink` port.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::application::ports::AuditSink;
use crate::domain::{AuditLogError, AuditRecord};

/// Plain-text audit log, appended to and never rewritten.
///
/// The file is opened for every record and closed again when the handle
/// drops, including on a failed write. No lock is taken: one process writes
/// at a time. The file is never rotated or truncated.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditLog {
    fn append(&self, record: &AuditRecord) -> Result<(), AuditLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| AuditLogError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(record.render().as_bytes())
            .map_err(|source| AuditLogError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
